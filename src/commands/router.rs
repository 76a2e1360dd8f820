//! Command parsing and routing for chatmark.
//!
//! Turns a chat line into an [`Invocation`] and dispatches it to the
//! matching handler.

use super::definitions::Verb;
use super::handlers::{self, CommandContext, CommandResult};
use super::tokenizer;
use super::COMMAND_PREFIX;
use crate::error::{MarkError, Result};

/// A recognised command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The invoking player.
    pub player: String,
    /// The selected verb.
    pub verb: Verb,
    /// Every token of the line, prefix and verb included.
    pub tokens: Vec<String>,
}

impl Invocation {
    /// Tokens after the verb.
    pub fn args(&self) -> &[String] {
        self.tokens.get(2..).unwrap_or_default()
    }
}

/// Command router for parsing and dispatching chat lines.
pub struct CommandRouter;

impl CommandRouter {
    /// Parses a chat line.
    ///
    /// The first token must be the command prefix and the second a known
    /// verb; anything else is [`MarkError::UnknownCommand`].
    pub fn parse(player: &str, text: &str) -> Result<Invocation> {
        let tokens = tokenizer::split(text);

        let verb = match tokens.as_slice() {
            [prefix, verb, ..] if prefix == COMMAND_PREFIX => Verb::parse(verb),
            _ => None,
        }
        .ok_or(MarkError::UnknownCommand)?;

        Ok(Invocation {
            player: player.to_string(),
            verb,
            tokens,
        })
    }

    /// Runs the handler for an invocation.
    pub fn dispatch(ctx: &mut CommandContext<'_>, inv: &Invocation) -> CommandResult {
        match inv.verb {
            Verb::Help => handlers::system::handle_help(inv),
            Verb::List => handlers::listing::handle_list(ctx, inv),
            Verb::Search => handlers::listing::handle_search(ctx, inv),
            Verb::Add => handlers::marks::handle_add(ctx, inv),
            Verb::Rm => handlers::marks::handle_rm(ctx, inv),
            Verb::Show => handlers::marks::handle_show(ctx, inv),
        }
    }
}
