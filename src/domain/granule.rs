use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a granule within its dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GranuleId(String);

impl GranuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GranuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One search result item belonging to a dataset.
///
/// The core treats granules as opaque tokens: only the identity matters to
/// the loading logic, and item order is whatever the source returned.
/// Everything a host UI renders (title, time range, browse imagery, ...)
/// rides along in `metadata` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Granule {
    pub id: GranuleId,
    pub title: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Granule {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: GranuleId::new(id),
            title: title.into(),
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}
