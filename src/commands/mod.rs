//! Command parsing and dispatch for chatmark.
//!
//! Parsing is separate from execution so the verb grammar can be tested
//! without a store.

pub mod definitions;
pub mod handlers;
pub mod help;
pub mod output;
pub mod router;
pub mod tokenizer;

/// First token of every command line.
pub const COMMAND_PREFIX: &str = "!mark";

pub use definitions::{CommandDef, Verb, COMMANDS};
pub use handlers::{CommandContext, CommandResult};
pub use output::{MarkEntry, Reply};
pub use router::{CommandRouter, Invocation};
