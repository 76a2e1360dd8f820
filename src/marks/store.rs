//! The in-memory mark collection and its durability rules.

use super::{Mark, MarkDocument, Scope, ScopeKey};
use crate::error::{MarkError, Result};
use crate::persistence::{LoadOutcome, MarkFile};
use std::path::Path;
use tracing::{info, warn};

/// Marks matching a search, split by scope.
#[derive(Debug, Default)]
pub struct SearchHits<'a> {
    pub public: Vec<&'a Mark>,
    pub private: Vec<&'a Mark>,
}

/// All marks, backed by a JSON file.
///
/// Every successful mutation is written to disk before the call returns. If
/// the write fails the mutation is undone, so memory and disk agree.
#[derive(Debug)]
pub struct MarkStore {
    doc: MarkDocument,
    file: MarkFile,
}

impl MarkStore {
    /// Opens the store at `path`, creating and saving an empty one if the
    /// file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = MarkFile::new(path.as_ref());

        let doc = match file.load()? {
            LoadOutcome::Loaded(doc) => {
                info!("Loaded saved marks from {}", file.path().display());
                return Ok(Self { doc, file });
            }
            LoadOutcome::Missing => {
                warn!("No saved marks at {}", file.path().display());
                info!("Creating new marks file");
                MarkDocument::default()
            }
            LoadOutcome::Corrupt(reason) => {
                warn!("Marks file {} is unreadable: {reason}", file.path().display());
                file.back_up_corrupt()?;
                MarkDocument::default()
            }
        };

        file.save(&doc)?;
        Ok(Self { doc, file })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The public scope. Always present, possibly empty.
    pub fn public(&self) -> &Scope {
        &self.doc.public
    }

    /// A player's private scope, if they ever created a private mark.
    pub fn private(&self, player: &str) -> Option<&Scope> {
        self.doc.private.get(player)
    }

    /// Looks up a scope by key.
    pub fn scope(&self, key: &ScopeKey) -> Option<&Scope> {
        match key {
            ScopeKey::Public => Some(&self.doc.public),
            ScopeKey::Private(player) => self.private(player),
        }
    }

    /// Iterates every scope with its key, public first.
    pub fn scopes(&self) -> impl Iterator<Item = (ScopeKey, &Scope)> {
        std::iter::once((ScopeKey::Public, &self.doc.public)).chain(
            self.doc
                .private
                .iter()
                .map(|(player, scope)| (ScopeKey::Private(player.clone()), scope)),
        )
    }

    /// Finds a mark visible to `player`: their private scope first, then
    /// the public scope. Other players' scopes are never searched.
    pub fn lookup(&self, player: &str, name: &str) -> Option<&Mark> {
        self.private(player)
            .and_then(|scope| scope.get(name))
            .or_else(|| self.doc.public.get(name))
    }

    /// True if adding `name` to the given scope would break uniqueness.
    ///
    /// A private name collides with the public scope and the author's own
    /// scope. A public name collides with every scope.
    pub fn is_claimed(&self, key: &ScopeKey, name: &str) -> bool {
        match key {
            ScopeKey::Public => self.scopes().any(|(_, scope)| scope.contains(name)),
            ScopeKey::Private(player) => {
                self.doc.public.contains(name)
                    || self.private(player).is_some_and(|scope| scope.contains(name))
            }
        }
    }

    /// Inserts a new mark and saves.
    pub fn add(&mut self, mark: Mark) -> Result<()> {
        let key = mark.scope();
        if self.is_claimed(&key, &mark.name) {
            return Err(MarkError::conflict(mark.name));
        }

        let name = mark.name.clone();
        let mut created_scope = false;
        match &key {
            ScopeKey::Public => self.doc.public.insert(mark),
            ScopeKey::Private(player) => {
                created_scope = !self.doc.private.contains_key(player);
                self.doc
                    .private
                    .entry(player.clone())
                    .or_default()
                    .insert(mark)
            }
        }

        if let Err(e) = self.file.save(&self.doc) {
            self.undo_add(&key, &name, created_scope);
            return Err(e);
        }
        Ok(())
    }

    /// Reverts an add. A private scope is dropped only if the add created it.
    fn undo_add(&mut self, key: &ScopeKey, name: &str, created_scope: bool) {
        if let Some(scope) = self.scope_mut(key) {
            scope.take(name);
        }
        if let ScopeKey::Private(player) = key {
            if created_scope {
                self.doc.private.remove(player);
            }
        }
    }

    fn scope_mut(&mut self, key: &ScopeKey) -> Option<&mut Scope> {
        match key {
            ScopeKey::Public => Some(&mut self.doc.public),
            ScopeKey::Private(player) => self.doc.private.get_mut(player),
        }
    }

    /// Removes a mark from the given scope and saves.
    pub fn remove(&mut self, key: &ScopeKey, name: &str) -> Result<Mark> {
        let (idx, mark) = self
            .scope_mut(key)
            .and_then(|scope| scope.take(name))
            .ok_or_else(|| MarkError::not_found(name))?;

        if let Err(e) = self.file.save(&self.doc) {
            if let Some(scope) = self.scope_mut(key) {
                scope.restore(idx, mark);
            }
            return Err(e);
        }
        Ok(mark)
    }

    /// Marks whose name or content contains `needle`, public scope first,
    /// then the player's own scope, each in insertion order.
    pub fn search(&self, player: &str, needle: &str) -> SearchHits<'_> {
        SearchHits {
            public: matching(Some(&self.doc.public), needle),
            private: matching(self.private(player), needle),
        }
    }
}

fn matching<'a>(scope: Option<&'a Scope>, needle: &str) -> Vec<&'a Mark> {
    scope
        .map(|s| s.iter().filter(|m| m.matches(needle)).collect())
        .unwrap_or_default()
}
