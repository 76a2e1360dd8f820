//! Operator lookup backed by the server's `ops.json`.

use super::PlayerDirectory;
use crate::error::{MarkError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct OpEntry {
    name: String,
}

/// Reads the operator list on every query, so op changes apply live.
#[derive(Debug, Clone)]
pub struct OpsFile {
    path: PathBuf,
}

impl OpsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `ops.json` in the server's working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("ops.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<OpEntry>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            MarkError::persistence(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            MarkError::persistence(format!("Invalid ops file {}: {e}", self.path.display()))
        })
    }
}

impl PlayerDirectory for OpsFile {
    fn is_operator(&self, player: &str) -> bool {
        debug!("Checking operator status of {player}");
        match self.read() {
            Ok(ops) => ops.iter().any(|op| op.name == player),
            Err(e) => {
                warn!("Treating {player} as non-operator: {e}");
                false
            }
        }
    }
}
