//! Collaborators supplied by the hosting game server.
//!
//! The core never talks to the server directly. It receives chat through a
//! [`ChatListener`], answers through a [`MessageSink`] and asks a
//! [`PlayerDirectory`] who the operators are.

pub mod console;
pub mod mock;
mod ops;
mod relay;
mod tellraw;

pub use ops::OpsFile;
pub use relay::{parse_chat_line, ChatRelay, SubscriptionId};
pub use tellraw::TellrawSink;

/// Who wrote a chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    /// A connected player, identified by name.
    Player(String),
    /// The server console or a remote console.
    Console,
}

impl Sender {
    /// Creates a player sender.
    pub fn player(name: impl Into<String>) -> Self {
        Self::Player(name.into())
    }

    /// The player name, or `None` for the console.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Player(name) => Some(name),
            Self::Console => None,
        }
    }
}

/// A chat message with hover and click affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichMessage {
    /// Text shown in chat.
    pub text: String,
    /// Tooltip shown while hovering the text.
    pub hover: Option<String>,
    /// Text placed into the player's chat input when clicked.
    pub suggestion: Option<String>,
}

impl RichMessage {
    /// Creates a message with no affordances.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hover: None,
            suggestion: None,
        }
    }

    /// Adds a hover tooltip.
    pub fn with_hover(self, hover: impl Into<String>) -> Self {
        Self {
            hover: Some(hover.into()),
            ..self
        }
    }

    /// Adds a click-to-suggest payload.
    pub fn with_suggestion(self, suggestion: impl Into<String>) -> Self {
        Self {
            suggestion: Some(suggestion.into()),
            ..self
        }
    }
}

/// Delivers replies to players.
pub trait MessageSink {
    /// Sends plain text to one player.
    fn send_message(&self, player: &str, text: &str);

    /// Whether [`MessageSink::send_rich_message`] renders affordances.
    fn supports_rich(&self) -> bool {
        false
    }

    /// Sends a message with hover/click affordances.
    ///
    /// Sinks without rich support fall back to the bare text.
    fn send_rich_message(&self, player: &str, message: &RichMessage) {
        self.send_message(player, &message.text);
    }
}

/// Answers permission questions about players.
pub trait PlayerDirectory {
    /// Whether the player holds operator rights.
    fn is_operator(&self, player: &str) -> bool;
}

/// Receives chat lines from a [`ChatRelay`].
pub trait ChatListener {
    fn on_chat(&mut self, sender: &Sender, text: &str);
}
