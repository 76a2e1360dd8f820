//! Persistence layer for chatmark.
//!
//! The whole mark collection lives in one pretty-printed JSON document that
//! is rewritten after every mutation.

use crate::error::{MarkError, Result};
use crate::marks::MarkDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What [`MarkFile::load`] found on disk.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No file yet (first run).
    Missing,
    /// The file parsed cleanly.
    Loaded(MarkDocument),
    /// The file exists but is not a valid marks document.
    Corrupt(String),
}

/// The JSON file backing a mark store.
#[derive(Debug, Clone)]
pub struct MarkFile {
    path: PathBuf,
}

impl MarkFile {
    /// Creates a handle for the file at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default marks file location, relative to the server's
    /// working directory: `chatmark/marks.json`.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chatmark").join("marks.json")
    }

    /// Returns the path of the marks file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the marks file.
    pub fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome::Missing);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            MarkError::persistence(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        match serde_json::from_str::<MarkDocument>(&content) {
            Ok(doc) => Ok(LoadOutcome::Loaded(doc)),
            Err(e) => Ok(LoadOutcome::Corrupt(e.to_string())),
        }
    }

    /// Writes the full document.
    ///
    /// The JSON goes to a sibling `.tmp` file first and is then renamed over
    /// the target, so readers only ever see a complete document.
    pub fn save(&self, doc: &MarkDocument) -> Result<()> {
        self.ensure_parent_dirs()?;

        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| MarkError::internal(format!("Failed to encode marks: {e}")))?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|e| {
            MarkError::persistence(format!("Failed to write {}: {e}", tmp_path.display()))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            MarkError::persistence(format!(
                "Failed to move {} to {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })?;

        debug!("Saved marks to {}", self.path.display());
        Ok(())
    }

    /// Moves an unreadable file aside so a fresh one can be written.
    ///
    /// Earlier backups are kept: the first free name out of
    /// `marks.json.bak`, `marks.json.1.bak`, `marks.json.2.bak`, ... is used.
    pub fn back_up_corrupt(&self) -> Result<PathBuf> {
        let backup_path = (0u32..)
            .map(|n| self.backup_path(n))
            .find(|candidate| !candidate.exists())
            .ok_or_else(|| MarkError::internal("No free backup name for marks file"))?;
        fs::rename(&self.path, &backup_path).map_err(|e| {
            MarkError::persistence(format!(
                "Failed to back up corrupted marks file to {}: {e}",
                backup_path.display()
            ))
        })?;
        warn!("Backed up corrupted marks file to {}", backup_path.display());
        Ok(backup_path)
    }

    fn backup_path(&self, n: u32) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|f| f.to_os_string())
            .unwrap_or_default();
        if n == 0 {
            name.push(".bak");
        } else {
            name.push(format!(".{n}.bak"));
        }
        self.path.with_file_name(name)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Ensures parent directories exist for the marks file.
    fn ensure_parent_dirs(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if parent.as_os_str().is_empty() {
                return Ok(());
            }
            fs::create_dir_all(parent).map_err(|e| {
                MarkError::persistence(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        Ok(())
    }
}
