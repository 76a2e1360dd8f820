//! Command handlers for chatmark.
//!
//! Each handler validates its own arguments, reads or mutates the store and
//! returns the replies for the invoking player. Handlers never deliver
//! messages themselves.

pub mod listing;
pub mod marks;
pub mod system;

use super::output::Reply;
use crate::config::PublicPermission;
use crate::error::Result;
use crate::host::PlayerDirectory;
use crate::marks::MarkStore;

/// Qualifier selecting the public scope.
pub const PUBLIC_QUALIFIER: &str = "public";
/// Qualifier selecting the caller's private scope.
pub const PRIVATE_QUALIFIER: &str = "private";

/// Context provided to command handlers.
pub struct CommandContext<'a> {
    /// The mark store.
    pub store: &'a mut MarkStore,
    /// Operator lookup.
    pub directory: &'a dyn PlayerDirectory,
    /// Who may create public marks.
    pub permission: &'a PublicPermission,
}

/// Replies on success; the error becomes a single reply at the service
/// boundary.
pub type CommandResult = Result<Vec<Reply>>;
