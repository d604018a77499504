//! Accumulated result storage for the active session

use crate::domain::granule::Granule;

/// The ordered collection of granules accumulated for the current session.
///
/// Items appear in fetch order, top to bottom, and are never re-sorted by
/// the core. This store is mutated exclusively by `GranuleListState`:
/// `reset` once per new session, `append` once per accepted page. At-most-
/// once application of a response is enforced upstream by the stale-
/// response guard, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GranuleList {
    items: Vec<Granule>,
}

impl GranuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all accumulated items; called exactly once per new session
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Append a page of items, preserving their order
    pub fn append(&mut self, items: Vec<Granule>) {
        self.items.extend(items);
    }

    /// The current ordered sequence, for rendering
    pub fn snapshot(&self) -> &[Granule] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Granule> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
