//! Scroll-intent detection

/// Edge-triggered near-bottom detector.
///
/// Converts the host's continuous stream of scroll-position samples into
/// discrete "load more" intents. An intent fires the first time the
/// distance from the bottom drops below the configured threshold and not
/// again until the distance has risen back to or above the threshold, so a
/// single scroll-to-bottom gesture produces exactly one intent no matter
/// how many samples it generates.
///
/// The detector knows nothing about load state; the pagination state
/// machine ignores intents it cannot act on.
#[derive(Debug, Clone)]
pub struct ScrollState {
    threshold_px: u32,
    armed: bool,
}

impl ScrollState {
    /// Create a detector that fires below `threshold_px` from the bottom
    pub fn new(threshold_px: u32) -> Self {
        Self {
            threshold_px,
            armed: true,
        }
    }

    pub fn threshold_px(&self) -> u32 {
        self.threshold_px
    }

    /// Feed one sample; returns `true` iff a load-more intent fires
    pub fn offer_sample(&mut self, distance_px: u32) -> bool {
        if distance_px >= self.threshold_px {
            self.armed = true;
            return false;
        }

        if self.armed {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(crate::infrastructure::config::DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_on_threshold_crossing() {
        let mut scroll = ScrollState::new(200);

        assert!(!scroll.offer_sample(500));
        assert!(scroll.offer_sample(150));
        // Still near the bottom: a continuous scroll keeps sampling but
        // must not fire again
        assert!(!scroll.offer_sample(100));
        assert!(!scroll.offer_sample(0));
    }

    #[test]
    fn test_rearms_after_rising_above_threshold() {
        let mut scroll = ScrollState::new(200);

        assert!(scroll.offer_sample(10));
        assert!(!scroll.offer_sample(50));

        // Scrolling back up re-arms the detector
        assert!(!scroll.offer_sample(400));
        assert!(scroll.offer_sample(199));
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        let mut scroll = ScrollState::new(200);

        // Exactly at the threshold counts as "not near bottom"
        assert!(!scroll.offer_sample(200));
        assert!(scroll.offer_sample(199));
    }

    #[test]
    fn test_fires_immediately_when_first_sample_is_near_bottom() {
        // A short list can start out already inside the threshold
        let mut scroll = ScrollState::new(200);
        assert!(scroll.offer_sample(0));
    }

    #[test]
    fn test_default_uses_configured_threshold() {
        let scroll = ScrollState::default();
        assert_eq!(
            scroll.threshold_px(),
            crate::infrastructure::config::DEFAULT_SCROLL_THRESHOLD_PX
        );
    }
}
