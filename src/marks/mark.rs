//! The mark record and its scope key.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

/// Key of the shared public scope in the marks document.
pub const PUBLIC_SCOPE_KEY: &str = ".public";

/// Which partition of the store a mark lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// The scope every player can read.
    Public,
    /// One player's own scope.
    Private(String),
}

impl ScopeKey {
    /// Returns the document key for this scope.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Public => PUBLIC_SCOPE_KEY,
            Self::Private(player) => player,
        }
    }

    /// Parses a document key back into a scope.
    pub fn from_key(key: &str) -> Self {
        if key == PUBLIC_SCOPE_KEY {
            Self::Public
        } else {
            Self::Private(key.to_string())
        }
    }

    /// Capitalized label used in replies ("Public" / "Private").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private(_) => "Private",
        }
    }
}

/// A named note left by a player.
///
/// Field names on disk are `name`, `content`, `player`, `time` and `public`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub name: String,
    pub content: String,
    #[serde(rename = "player")]
    pub author: String,
    #[serde(rename = "time", with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "public")]
    pub is_public: bool,
}

impl Mark {
    /// Creates a mark stamped with the current local time.
    ///
    /// Sub-second precision is dropped so the stored value equals what a
    /// reload of the saved file produces.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        is_public: bool,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            author: author.into(),
            created_at: Local::now().naive_local().trunc_subsecs(0),
            is_public,
        }
    }

    /// The scope this mark belongs to.
    pub fn scope(&self) -> ScopeKey {
        if self.is_public {
            ScopeKey::Public
        } else {
            ScopeKey::Private(self.author.clone())
        }
    }

    /// Creation time formatted as stored.
    pub fn timestamp(&self) -> String {
        self.created_at.format(timestamp::FORMAT).to_string()
    }

    /// `<Scope> mark "<name>" was marked by <author> at <timestamp>`.
    pub fn detail_line(&self) -> String {
        format!(
            "{} mark \"{}\" was marked by {} at {}",
            self.scope().label(),
            self.name,
            self.author,
            self.timestamp()
        )
    }

    /// Case-sensitive substring match on name or content.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.contains(needle) || self.content.contains(needle)
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
