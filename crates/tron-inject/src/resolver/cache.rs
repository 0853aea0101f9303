//! Cache of trimmed file contents keyed by placeholder identifier.
//!
//! Owned by a single [`FileResolver`](super::FileResolver). Entries are never
//! invalidated; a file changed on disk after its first read keeps its cached
//! contents until the owning engine is dropped.

use std::collections::HashMap;

/// Identifier → trimmed file contents.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<String, String>,
}

impl ResolutionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached contents for an identifier.
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Store contents for an identifier.
    pub fn insert(&mut self, identifier: &str, contents: String) {
        let _ = self.entries.insert(identifier.to_string(), contents);
    }

    /// Number of cached identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
