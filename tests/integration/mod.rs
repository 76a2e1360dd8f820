//! Integration tests for chatmark.

pub mod persistence_test;
pub mod relay_test;
pub mod scenarios_test;

use chatmark::config::PublicPermission;
use chatmark::host::mock::{RecordingSink, StaticDirectory};
use chatmark::host::Sender;
use chatmark::marks::MarkStore;
use chatmark::service::MarkService;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A service over a temp marks file, with Carol as the only operator.
pub struct Harness {
    pub service: MarkService,
    pub sink: RecordingSink,
    pub dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_permission(PublicPermission::Op)
    }

    pub fn with_permission(permission: PublicPermission) -> Self {
        let dir = tempdir().unwrap();
        let sink = RecordingSink::new();
        let service = open_service(&dir.path().join("marks.json"), &sink, permission);
        Self { service, sink, dir }
    }

    pub fn marks_path(&self) -> PathBuf {
        self.dir.path().join("marks.json")
    }

    /// Sends one chat line as `player` and returns the texts it received.
    pub fn say(&mut self, player: &str, text: &str) -> Vec<String> {
        self.service.handle_line(&Sender::player(player), text);
        self.sink.take().into_iter().map(|m| m.text).collect()
    }

    /// Drops the service and opens a fresh one on the same file.
    pub fn restart(&mut self) {
        self.sink = RecordingSink::new();
        self.service = open_service(&self.marks_path(), &self.sink, PublicPermission::Op);
    }
}

fn open_service(path: &Path, sink: &RecordingSink, permission: PublicPermission) -> MarkService {
    MarkService::new(
        MarkStore::open(path).unwrap(),
        Box::new(sink.clone()),
        Box::new(StaticDirectory::new(["Carol"])),
        permission,
    )
}
