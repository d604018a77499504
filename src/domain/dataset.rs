use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::filters::FilterSet;

/// Identifier of the dataset whose granules are being browsed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetId(String);

impl DatasetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DatasetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Parameters for the external detail-view and retrieve-data workflows.
///
/// The workflows themselves live outside this crate; they only need to know
/// which dataset is selected and which filters are in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalContext {
    pub dataset: DatasetId,
    pub filters: FilterSet,
}
