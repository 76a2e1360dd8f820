//! System command handlers (help).

use super::CommandResult;
use crate::commands::help::help_lines;
use crate::commands::output::Reply;
use crate::commands::router::Invocation;
use tracing::debug;

/// Handle `!mark help`. Extra arguments are ignored.
pub fn handle_help(inv: &Invocation) -> CommandResult {
    debug!("help called by {}", inv.player);
    Ok(help_lines().into_iter().map(Reply::Info).collect())
}
