//! An insertion-ordered set of marks keyed by name.

use super::Mark;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Marks of one scope, kept in the order they were added.
///
/// Serialized as a JSON object `name -> mark`; object order is preserved in
/// both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    marks: Vec<Mark>,
}

impl Scope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a mark by name.
    pub fn get(&self, name: &str) -> Option<&Mark> {
        self.marks.iter().find(|m| m.name == name)
    }

    /// Returns true if a mark with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterates marks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Mark> {
        self.marks.iter()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Appends a mark, replacing any mark of the same name in place.
    pub(crate) fn insert(&mut self, mark: Mark) {
        match self.position(&mark.name) {
            Some(idx) => self.marks[idx] = mark,
            None => self.marks.push(mark),
        }
    }

    /// Removes a mark, returning it with its former position.
    pub(crate) fn take(&mut self, name: &str) -> Option<(usize, Mark)> {
        let idx = self.position(name)?;
        Some((idx, self.marks.remove(idx)))
    }

    /// Puts a mark back where [`Scope::take`] found it.
    pub(crate) fn restore(&mut self, idx: usize, mark: Mark) {
        let idx = idx.min(self.marks.len());
        self.marks.insert(idx, mark);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.marks.iter().position(|m| m.name == name)
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = &'a Mark;
    type IntoIter = std::slice::Iter<'a, Mark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.marks.len()))?;
        for mark in &self.marks {
            map.serialize_entry(&mark.name, mark)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScopeVisitor)
    }
}

struct ScopeVisitor;

impl<'de> Visitor<'de> for ScopeVisitor {
    type Value = Scope;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of mark name to mark")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Scope, A::Error> {
        let mut scope = Scope::new();
        while let Some((key, mut mark)) = access.next_entry::<String, Mark>()? {
            // The object key is authoritative for lookups.
            mark.name = key;
            scope.insert(mark);
        }
        Ok(scope)
    }
}
