use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Immutable set of granule filters, keyed by filter name.
///
/// Two filter sets are equal iff all key/value pairs match; iteration order
/// is insertion order but does not participate in equality. Reset decisions
/// are driven by this value equality, never by identity, so toggling a
/// filter and setting it back to its original value nets out to "unchanged".
///
/// Editing never mutates in place: `with` and `without` return a new set
/// that replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    entries: IndexMap<String, String>,
}

impl FilterSet {
    /// Create an empty (unfiltered) set
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set with `key` set to `value`
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Return a new set with `key` removed
    pub fn without(&self, key: &str) -> Self {
        let mut entries = self.entries.clone();
        entries.shift_remove(key);
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
