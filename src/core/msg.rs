use serde::{Deserialize, Serialize};

pub mod filters;
pub mod granules;
pub mod scroll;
pub mod system;

use filters::FilterMsg;
use granules::GranuleMsg;
use scroll::ScrollMsg;
use system::SystemMsg;

/// Domain messages representing everything that can happen to the core.
///
/// These are the only inputs to the update function: scroll samples and
/// filter changes delivered by the host, page completions delivered by the
/// command executor, and system-level notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Granule list operations (delegated to GranuleListState)
    Granule(GranuleMsg),

    // Filter change notifications (routed through the equality check)
    Filter(FilterMsg),

    // Scroll position samples (routed through the intent detector)
    Scroll(ScrollMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            // Scroll samples arrive at the host's own cadence, often per frame
            Msg::Scroll(msg) => msg.is_frequent(),
            Msg::Granule(_) | Msg::Filter(_) | Msg::System(_) => false,
        }
    }
}
