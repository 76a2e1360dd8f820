//! Marks and the store that owns them.
//!
//! A mark is either public (readable by everyone) or private to its author.
//! A name is unique across the public scope and the author's own scope.

mod document;
mod mark;
mod scope;
mod store;

pub use document::MarkDocument;
pub use mark::{Mark, ScopeKey, PUBLIC_SCOPE_KEY};
pub use scope::Scope;
pub use store::{MarkStore, SearchHits};
