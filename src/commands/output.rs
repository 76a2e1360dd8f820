//! Transport-agnostic command output types.
//!
//! Handlers describe what to tell the player; the service decides how to
//! deliver it given what the message sink supports.

use crate::host::RichMessage;
use crate::marks::Mark;

/// One message back to the invoking player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Informational message (results, headers, confirmations).
    Info(String),
    /// Rejection or failure message.
    Error(String),
    /// A mark shown in a listing.
    Entry(MarkEntry),
}

impl Reply {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a listing entry for a mark.
    pub fn entry(mark: &Mark) -> Self {
        Self::Entry(MarkEntry::from(mark))
    }

    /// The text a plain-text transport shows for this reply.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Info(text) | Self::Error(text) => text.clone(),
            Self::Entry(entry) => entry.plain_text(),
        }
    }
}

/// A listed mark, carrying what a rich transport needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkEntry {
    pub name: String,
    pub author: String,
    pub timestamp: String,
    pub detail: String,
    pub content: String,
}

impl MarkEntry {
    /// `<name> (by <author> at <timestamp>)`.
    pub fn plain_text(&self) -> String {
        format!("{} (by {} at {})", self.name, self.author, self.timestamp)
    }

    /// Name in chat, detail line on hover, content offered on click.
    pub fn to_rich(&self) -> RichMessage {
        RichMessage::new(self.name.clone())
            .with_hover(self.detail.clone())
            .with_suggestion(self.content.clone())
    }
}

impl From<&Mark> for MarkEntry {
    fn from(mark: &Mark) -> Self {
        Self {
            name: mark.name.clone(),
            author: mark.author.clone(),
            timestamp: mark.timestamp(),
            detail: mark.detail_line(),
            content: mark.content.clone(),
        }
    }
}
