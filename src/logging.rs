//! Logging configuration for chatmark.
//!
//! Stdout carries server commands, so logs go to stderr or to a file, never
//! to stdout.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes logging to stderr.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes logging to a file, appending across runs.
///
/// Falls back to stderr if the file cannot be opened.
pub fn init_file_logging(log_path: &Path) {
    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            init_stderr_logging();
            return;
        }
    }

    let log_file = match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {e}");
            init_stderr_logging();
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Returns the default path for the log file.
///
/// Uses the XDG state directory on Linux (`~/.local/state/chatmark/chatmark.log`),
/// or falls back to the config directory on other platforms.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("chatmark").join("chatmark.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("chatmark").join("chatmark.log");
    }

    std::env::temp_dir().join("chatmark.log")
}
