//! Message sink that writes `/tellraw` server commands.

use super::{MessageSink, RichMessage};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::io::Write;
use tracing::warn;

const TEXT_COLOR: &str = "yellow";

/// Writes one `/tellraw <player> <json>` command per message.
///
/// The writer is normally the server's stdin. With `rich` disabled, hover
/// and click affordances are dropped and only the text is sent.
pub struct TellrawSink<W: Write> {
    out: RefCell<W>,
    rich: bool,
}

impl<W: Write> TellrawSink<W> {
    pub fn new(out: W, rich: bool) -> Self {
        Self {
            out: RefCell::new(out),
            rich,
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_command(&self, player: &str, component: &Value) {
        let mut out = self.out.borrow_mut();
        let written = writeln!(out, "/tellraw {player} {component}").and_then(|()| out.flush());
        if let Err(e) = written {
            warn!("Failed to send message to {player}: {e}");
        }
    }
}

fn text_component(text: &str) -> Value {
    json!({ "text": text, "color": TEXT_COLOR })
}

fn rich_component(message: &RichMessage) -> Value {
    let mut component = text_component(&message.text);
    if let Some(hover) = &message.hover {
        component["hoverEvent"] = json!({ "action": "show_text", "contents": hover });
    }
    if let Some(suggestion) = &message.suggestion {
        component["clickEvent"] = json!({ "action": "suggest_command", "value": suggestion });
    }
    component
}

impl<W: Write> MessageSink for TellrawSink<W> {
    fn send_message(&self, player: &str, text: &str) {
        self.write_command(player, &text_component(text));
    }

    fn supports_rich(&self) -> bool {
        self.rich
    }

    fn send_rich_message(&self, player: &str, message: &RichMessage) {
        if self.rich {
            self.write_command(player, &rich_component(message));
        } else {
            self.send_message(player, &message.text);
        }
    }
}
