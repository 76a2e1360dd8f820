//! Configuration management for chatmark.
//!
//! Loads an optional TOML file. Every key is optional; an absent file means
//! all defaults.

use crate::error::{MarkError, Result};
use crate::host::OpsFile;
use crate::persistence::MarkFile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config key holding the public mark permission policy.
pub const PUBLIC_PERMISSION_KEY: &str = "public_permission_level";

/// Main configuration structure for chatmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Who may create public marks: `"op"` or `"any"`.
    ///
    /// Kept as a raw TOML value so a bad value, of any type, can be
    /// reported to players instead of failing startup.
    #[serde(default)]
    pub public_permission_level: Option<toml::Value>,

    /// Path of the marks JSON file.
    #[serde(default)]
    pub marks_file: Option<PathBuf>,

    /// Path of the server's operator list.
    #[serde(default)]
    pub ops_file: Option<PathBuf>,

    /// Send hover/click messages when the sink supports them.
    #[serde(default = "default_rich_messages")]
    pub rich_messages: bool,
}

fn default_rich_messages() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_permission_level: None,
            marks_file: None,
            ops_file: None,
            rich_messages: default_rich_messages(),
        }
    }
}

/// Who may create public marks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PublicPermission {
    /// Only operators.
    #[default]
    Op,
    /// Every player.
    Any,
    /// A configured value that is neither `op` nor `any`.
    Invalid(String),
}

impl PublicPermission {
    /// Interprets the raw config value. Absent means [`PublicPermission::Op`].
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            None | Some("op") => Self::Op,
            Some("any") => Self::Any,
            Some(other) => Self::Invalid(other.to_string()),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chatmark")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| MarkError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            MarkError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// The configured public mark permission policy.
    pub fn public_permission(&self) -> PublicPermission {
        match &self.public_permission_level {
            None => PublicPermission::Op,
            Some(toml::Value::String(value)) => {
                PublicPermission::from_config(Some(value.as_str()))
            }
            Some(other) => PublicPermission::Invalid(other.to_string()),
        }
    }

    /// The marks file path, falling back to the default location.
    pub fn marks_path(&self) -> PathBuf {
        self.marks_file.clone().unwrap_or_else(MarkFile::default_path)
    }

    /// The ops file path, falling back to the default location.
    pub fn ops_path(&self) -> PathBuf {
        self.ops_file.clone().unwrap_or_else(OpsFile::default_path)
    }
}
