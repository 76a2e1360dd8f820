//! Single-mark handlers (add, rm, show).

use super::{CommandContext, CommandResult, PUBLIC_QUALIFIER};
use crate::commands::output::Reply;
use crate::commands::router::Invocation;
use crate::commands::tokenizer;
use crate::config::{PublicPermission, PUBLIC_PERMISSION_KEY};
use crate::error::{Action, MarkError, Result};
use crate::marks::{Mark, ScopeKey};
use tracing::{debug, info};

/// Token index of the first argument after prefix and verb.
const FIRST_ARG: usize = 2;

/// Handle `!mark add [public] <name> <content...>`.
///
/// Checks run in order: argument count, permission, name uniqueness.
pub fn handle_add(ctx: &mut CommandContext<'_>, inv: &Invocation) -> CommandResult {
    debug!("add called by {}", inv.player);
    let args = inv.args();

    let (is_public, name_idx) = match args.first().map(String::as_str) {
        Some(PUBLIC_QUALIFIER) if args.len() >= 3 => (true, FIRST_ARG + 1),
        Some(PUBLIC_QUALIFIER) => return Err(MarkError::MissingContent),
        _ if args.len() >= 2 => (false, FIRST_ARG),
        _ => return Err(MarkError::UnknownCommand),
    };

    if is_public {
        check_publish(ctx, &inv.player)?;
    }

    let name = &inv.tokens[name_idx];
    let content = tokenizer::join(&inv.tokens, name_idx + 1);
    let mark = Mark::new(name.as_str(), content, inv.player.as_str(), is_public);
    let label = mark.scope().label();

    ctx.store.add(mark)?;
    info!("{} added {} mark {:?}", inv.player, label.to_lowercase(), name);

    Ok(vec![Reply::info(format!(
        "{label} mark \"{name}\" has been successfully saved."
    ))])
}

fn check_publish(ctx: &CommandContext<'_>, player: &str) -> Result<()> {
    match ctx.permission {
        PublicPermission::Any => Ok(()),
        PublicPermission::Op if ctx.directory.is_operator(player) => Ok(()),
        PublicPermission::Op => Err(MarkError::PermissionDenied(Action::PublishMark)),
        PublicPermission::Invalid(value) => Err(MarkError::Misconfigured {
            key: PUBLIC_PERMISSION_KEY,
            value: value.clone(),
        }),
    }
}

/// Handle `!mark rm <name>`.
///
/// The caller's private scope is searched first. Public marks can only be
/// removed by operators, whatever the publish policy says.
pub fn handle_rm(ctx: &mut CommandContext<'_>, inv: &Invocation) -> CommandResult {
    debug!("rm called by {}", inv.player);
    let [name] = inv.args() else {
        return Err(MarkError::UnknownCommand);
    };

    let key = locate(ctx, &inv.player, name)?;
    if key == ScopeKey::Public && !ctx.directory.is_operator(&inv.player) {
        return Err(MarkError::PermissionDenied(Action::RemovePublicMark));
    }

    ctx.store.remove(&key, name)?;
    info!("{} removed {} mark {:?}", inv.player, key.label().to_lowercase(), name);

    Ok(vec![Reply::info(format!(
        "{} mark \"{name}\" has been successfully deleted.",
        key.label()
    ))])
}

/// Handle `!mark show <name>`: detail line, then the raw content.
pub fn handle_show(ctx: &mut CommandContext<'_>, inv: &Invocation) -> CommandResult {
    debug!("show called by {}", inv.player);
    let [name] = inv.args() else {
        return Err(MarkError::UnknownCommand);
    };

    let mark = ctx
        .store
        .lookup(&inv.player, name)
        .ok_or_else(|| MarkError::not_found(name.as_str()))?;

    Ok(vec![
        Reply::info(mark.detail_line()),
        Reply::info(mark.content.clone()),
    ])
}

/// Which scope visible to `player` holds `name`.
fn locate(ctx: &CommandContext<'_>, player: &str, name: &str) -> Result<ScopeKey> {
    if ctx
        .store
        .private(player)
        .is_some_and(|scope| scope.contains(name))
    {
        Ok(ScopeKey::Private(player.to_string()))
    } else if ctx.store.public().contains(name) {
        Ok(ScopeKey::Public)
    } else {
        Err(MarkError::not_found(name))
    }
}
