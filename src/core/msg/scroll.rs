use serde::{Deserialize, Serialize};

/// Messages carrying scroll-position signals from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollMsg {
    /// One scroll-position sample: how far the viewport currently is from
    /// the bottom of the scrollable region, in pixels.
    Sample { distance_px: u32 },
}

impl ScrollMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        // Samples arrive continuously while the user scrolls
        matches!(self, ScrollMsg::Sample { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_msg_frequent_detection() {
        assert!(ScrollMsg::Sample { distance_px: 0 }.is_frequent());
    }

    #[test]
    fn test_scroll_msg_serialization() {
        let msg = ScrollMsg::Sample { distance_px: 150 };
        let serialized = serde_json::to_string(&msg).expect("serialize");
        let deserialized: ScrollMsg = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(msg, deserialized);
    }
}
