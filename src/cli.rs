//! Command-line argument parsing for chatmark.

use chatmark::config::Config;
use chatmark::logging;
use clap::Parser;
use std::path::PathBuf;

/// Chat-driven bookmarks, relayed through a game server console.
///
/// Reads server output on stdin and writes `/tellraw` commands to stdout.
#[derive(Parser, Debug)]
#[command(name = "chatmark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "CHATMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Marks file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub marks_file: Option<PathBuf>,

    /// Server operator list (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub ops_file: Option<PathBuf>,

    /// Send plain text only, without hover or click affordances
    #[arg(long)]
    pub plain: bool,

    /// Write logs to a file instead of stderr (default location if no PATH)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub log_file: Option<Option<PathBuf>>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Where logs should go, or `None` for stderr.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .map(|path| path.unwrap_or_else(logging::get_log_path))
    }

    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.marks_file {
            config.marks_file = Some(path.clone());
        }
        if let Some(path) = &self.ops_file {
            config.ops_file = Some(path.clone());
        }
        if self.plain {
            config.rich_messages = false;
        }
    }
}
