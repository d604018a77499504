use serde::{Deserialize, Serialize};

use crate::{
    core::state::granules::SessionId,
    domain::{dataset::DatasetId, page::PageResponse},
};

/// Messages specific to GranuleListState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GranuleMsg {
    /// A dataset was selected; start a fresh session for it
    SelectDataset(DatasetId),

    /// The user asked for more results (typically via a scroll intent)
    RequestMore,

    /// A page fetch completed for the tagged session
    PageLoaded {
        session: SessionId,
        response: PageResponse,
    },

    /// A page fetch failed for the tagged session
    PageFailed {
        session: SessionId,
        message: String,
    },
}

impl GranuleMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        // Granule messages are gated by the load-state guard and are not frequent
        false
    }
}
