//! Chat event source fed from raw server console output.

use super::{ChatListener, Sender};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `[time] [thread/LEVEL]: <Name> message` as printed for player chat.
///
/// The name must follow the log header directly, so `/me` output such as
/// `* Bob <Carol> ...` is not chat from Carol.
static PLAYER_CHAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[[^\]]*\]\s*)+: <(\w+)> (.*)$").expect("player chat pattern is valid")
});

/// `[time] [thread/LEVEL]: [Server] message` as printed for `/say` from the
/// console or rcon.
static CONSOLE_CHAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[[^\]]*\]\s*)+: \[(?:Server|Rcon)\] (.*)$")
        .expect("console chat pattern is valid")
});

/// Handle returned by [`ChatRelay::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Fans chat lines out to registered listeners, in registration order.
#[derive(Default)]
pub struct ChatRelay {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Box<dyn ChatListener>)>,
}

impl ChatRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for every subsequent chat line.
    pub fn subscribe(&mut self, listener: Box<dyn ChatListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener, handing it back to the caller.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Option<Box<dyn ChatListener>> {
        let idx = self.listeners.iter().position(|(lid, _)| *lid == id)?;
        Some(self.listeners.remove(idx).1)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers one chat line to every listener.
    pub fn publish(&mut self, sender: &Sender, text: &str) {
        for (_, listener) in &mut self.listeners {
            listener.on_chat(sender, text);
        }
    }

    /// Parses one line of server output and publishes it if it is chat.
    ///
    /// Returns true when the line was chat.
    pub fn feed_console_line(&mut self, line: &str) -> bool {
        match parse_chat_line(line) {
            Some((sender, text)) => {
                debug!(?sender, "chat: {text}");
                self.publish(&sender, &text);
                true
            }
            None => false,
        }
    }
}

/// Extracts sender and text from a server output line.
pub fn parse_chat_line(line: &str) -> Option<(Sender, String)> {
    if let Some(caps) = CONSOLE_CHAT.captures(line) {
        return Some((Sender::Console, caps[1].to_string()));
    }
    PLAYER_CHAT
        .captures(line)
        .map(|caps| (Sender::player(&caps[1]), caps[2].to_string()))
}
