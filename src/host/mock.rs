//! In-memory collaborators for tests and embedding.

use super::{MessageSink, PlayerDirectory, RichMessage};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// A message captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub player: String,
    pub text: String,
    /// Set when the message went out through the rich path.
    pub rich: Option<RichMessage>,
}

/// Records every message instead of delivering it.
///
/// Clones share the same log, so a test can keep one handle while the
/// service owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    sent: Rc<RefCell<Vec<SentMessage>>>,
    rich: bool,
}

impl RecordingSink {
    /// A sink that only accepts plain messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that advertises rich message support.
    pub fn with_rich() -> Self {
        Self {
            rich: true,
            ..Self::default()
        }
    }

    /// Everything sent so far.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.borrow().clone()
    }

    /// Texts sent to one player, in order.
    pub fn texts_for(&self, player: &str) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .filter(|m| m.player == player)
            .map(|m| m.text.clone())
            .collect()
    }

    /// Returns and forgets everything sent so far.
    pub fn take(&self) -> Vec<SentMessage> {
        std::mem::take(&mut *self.sent.borrow_mut())
    }
}

impl MessageSink for RecordingSink {
    fn send_message(&self, player: &str, text: &str) {
        self.sent.borrow_mut().push(SentMessage {
            player: player.to_string(),
            text: text.to_string(),
            rich: None,
        });
    }

    fn supports_rich(&self) -> bool {
        self.rich
    }

    fn send_rich_message(&self, player: &str, message: &RichMessage) {
        self.sent.borrow_mut().push(SentMessage {
            player: player.to_string(),
            text: message.text.clone(),
            rich: Some(message.clone()),
        });
    }
}

/// A fixed set of operators.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    operators: HashSet<String>,
}

impl StaticDirectory {
    pub fn new<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operators: operators.into_iter().map(Into::into).collect(),
        }
    }
}

impl PlayerDirectory for StaticDirectory {
    fn is_operator(&self, player: &str) -> bool {
        self.operators.contains(player)
    }
}
