//! The on-disk shape of the mark collection.

use super::{Scope, ScopeKey, PUBLIC_SCOPE_KEY};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Every scope of the store.
///
/// Serialized as one JSON object: the `.public` key first, then one key per
/// player. A document without `.public` loads with an empty public scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkDocument {
    pub public: Scope,
    pub private: BTreeMap<String, Scope>,
}

impl Serialize for MarkDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.private.len() + 1))?;
        map.serialize_entry(PUBLIC_SCOPE_KEY, &self.public)?;
        for (player, scope) in &self.private {
            map.serialize_entry(player, scope)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MarkDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = MarkDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of scope key to marks")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MarkDocument, A::Error> {
        let mut doc = MarkDocument::default();
        while let Some((key, scope)) = access.next_entry::<String, Scope>()? {
            match ScopeKey::from_key(&key) {
                ScopeKey::Public => doc.public = scope,
                ScopeKey::Private(player) => {
                    doc.private.insert(player, scope);
                }
            }
        }
        Ok(doc)
    }
}
