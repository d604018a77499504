use serde::{Deserialize, Serialize};

use crate::domain::filters::FilterSet;

/// Messages emitted by the (external) filter UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterMsg {
    /// The filter form settled on a new value.
    ///
    /// The coordinator compares this against the active session's filters
    /// by value; redundant notifications are absorbed there, so the filter
    /// UI may deliver these as noisily as it likes.
    Changed(FilterSet),
}

impl FilterMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        false
    }
}
