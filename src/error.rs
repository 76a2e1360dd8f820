//! Error types for chatmark.
//!
//! Every command failure is one of these variants. The service converts them
//! into exactly one player-facing reply; internal kinds are logged instead of
//! being shown to the player.

use crate::commands::COMMAND_PREFIX;
use thiserror::Error;

/// Operator-only actions a player may be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Creating a public mark.
    PublishMark,
    /// Removing a public mark.
    RemovePublicMark,
}

impl Action {
    fn describe(&self) -> &'static str {
        match self {
            Self::PublishMark => "make public marks",
            Self::RemovePublicMark => "remove public marks",
        }
    }
}

/// Main error type for chatmark operations.
#[derive(Error, Debug)]
pub enum MarkError {
    /// Unknown verb, wrong prefix or wrong argument count.
    #[error("unknown command")]
    UnknownCommand,

    /// `add public` without a content argument.
    #[error("missing argument <content>")]
    MissingContent,

    /// Operator-only action attempted by a non-operator.
    #[error("permission denied: only operators may {}", .0.describe())]
    PermissionDenied(Action),

    /// A permission setting holds a value the service does not understand.
    #[error("unacceptable value {value:?} for config key {key}")]
    Misconfigured { key: &'static str, value: String },

    /// The named mark is absent from every searched scope.
    #[error("mark {name:?} not found")]
    NotFound { name: String },

    /// The name is already claimed in a conflicting scope.
    #[error("mark {name:?} already exists")]
    Conflict { name: String },

    /// Reading or writing the marks file failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration errors (unreadable or malformed config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarkError {
    /// Creates a not-found error for the given mark name.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates a conflict error for the given mark name.
    pub fn conflict(name: impl Into<String>) -> Self {
        Self::Conflict { name: name.into() }
    }

    /// Creates a persistence error with the given message.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownCommand | Self::MissingContent => "Usage Error",
            Self::PermissionDenied(_) | Self::Misconfigured { .. } => "Permission Error",
            Self::NotFound { .. } => "Not Found",
            Self::Conflict { .. } => "Conflict",
            Self::Persistence(_) => "Persistence Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// True for faults the player can do nothing about.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Persistence(_) | Self::Config(_) | Self::Internal(_)
        )
    }

    /// The single chat reply describing this error to the player.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownCommand => {
                format!("Unknown command. Type \"{COMMAND_PREFIX} help\" for help.")
            }
            Self::MissingContent => "Missing argument <content>.".to_string(),
            Self::PermissionDenied(action) => {
                format!("Only op can {}. Permission denied.", action.describe())
            }
            Self::Misconfigured { .. } => {
                "Unacceptable config for public mark permission. Please ask an admin to fix it."
                    .to_string()
            }
            Self::NotFound { name } => {
                format!("Cannot find mark \"{name}\". Make sure the name is correct.")
            }
            Self::Conflict { name } => format!(
                "Mark \"{name}\" already exists. Remove that mark first or use another name."
            ),
            Self::Persistence(_) | Self::Config(_) | Self::Internal(_) => {
                "Mark service internal error raised.".to_string()
            }
        }
    }
}

/// Result type alias using MarkError.
pub type Result<T> = std::result::Result<T, MarkError>;
