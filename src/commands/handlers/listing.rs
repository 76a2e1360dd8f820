//! Multi-mark handlers (list, search).

use super::{CommandContext, CommandResult, PRIVATE_QUALIFIER, PUBLIC_QUALIFIER};
use crate::commands::output::Reply;
use crate::commands::router::Invocation;
use crate::error::MarkError;
use crate::marks::Mark;
use tracing::debug;

/// Handle `!mark list [public|private]`.
pub fn handle_list(ctx: &mut CommandContext<'_>, inv: &Invocation) -> CommandResult {
    debug!("list called by {}", inv.player);
    let (public, private) = match inv.args() {
        [] => (true, true),
        [q] if q == PUBLIC_QUALIFIER => (true, false),
        [q] if q == PRIVATE_QUALIFIER => (false, true),
        _ => return Err(MarkError::UnknownCommand),
    };

    let mut replies = Vec::new();
    if public {
        replies.push(Reply::info("Public marks:"));
        push_entries(&mut replies, ctx.store.public().iter(), "No public marks yet.");
    }
    if private {
        replies.push(Reply::info("Private marks:"));
        let marks = ctx.store.private(&inv.player).into_iter().flatten();
        push_entries(&mut replies, marks, "No private marks yet.");
    }
    Ok(replies)
}

fn push_entries<'a>(
    replies: &mut Vec<Reply>,
    marks: impl Iterator<Item = &'a Mark>,
    empty: &str,
) {
    let before = replies.len();
    replies.extend(marks.map(Reply::entry));
    if replies.len() == before {
        replies.push(Reply::info(empty));
    }
}

/// Handle `!mark search <text>`.
pub fn handle_search(ctx: &mut CommandContext<'_>, inv: &Invocation) -> CommandResult {
    debug!("search called by {}", inv.player);
    let [needle] = inv.args() else {
        return Err(MarkError::UnknownCommand);
    };

    let hits = ctx.store.search(&inv.player, needle);
    let mut replies = Vec::new();
    push_names(&mut replies, "Public marks:", &hits.public, "No public marks found.");
    push_names(&mut replies, "Private marks:", &hits.private, "No private marks found.");
    Ok(replies)
}

fn push_names(replies: &mut Vec<Reply>, header: &str, marks: &[&Mark], empty: &str) {
    replies.push(Reply::info(header));
    if marks.is_empty() {
        replies.push(Reply::info(empty));
    } else {
        replies.extend(marks.iter().map(|m| Reply::info(m.name.clone())));
    }
}
