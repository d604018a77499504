//! Load-session state for granule pagination

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::{
    dataset::DatasetId,
    filters::FilterSet,
    page::{PageCursor, PageResponse},
};

/// Identity of one load session.
///
/// Ids are handed out monotonically by `GranuleListState`; every page
/// request carries the id of its owning session, and responses whose id no
/// longer matches the active session are discarded. This replaces explicit
/// request cancellation: superseding a session makes its in-flight fetch
/// inert no matter when (or whether) it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Load status of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    /// No fetch outstanding; more pages may exist
    #[default]
    Idle,
    /// Exactly one fetch outstanding
    Loading,
    /// No further pages exist; terminal except via a full reset
    Exhausted,
    /// The last fetch failed; accumulated items are kept
    Error,
}

/// The live aggregate for one (dataset, filter set) pair.
///
/// A session is created when a dataset is selected or its filter set
/// changes, and discarded (never reused) when superseded. Item storage
/// lives in `GranuleList`; the session tracks identity, cursor and status.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSession {
    id: SessionId,
    dataset: DatasetId,
    filters: FilterSet,
    cursor: PageCursor,
    status: SessionStatus,
}

impl LoadSession {
    /// Create a new session about to issue its first-page fetch
    pub fn new(id: SessionId, dataset: DatasetId, filters: FilterSet) -> Self {
        Self {
            id,
            dataset,
            filters,
            cursor: PageCursor::Start,
            status: SessionStatus::Loading,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn dataset(&self) -> &DatasetId {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether a `request_more` call may act right now.
    ///
    /// `Loading` is exclusive (at most one outstanding fetch) and
    /// `Exhausted` is terminal, so only `Idle` and the retry-able `Error`
    /// state accept another fetch.
    pub fn can_request_more(&self) -> bool {
        matches!(self.status, SessionStatus::Idle | SessionStatus::Error)
    }

    /// Mark a follow-up fetch as in flight
    pub fn begin_fetch(&mut self) {
        debug_assert!(self.can_request_more());
        self.status = SessionStatus::Loading;
    }

    /// Apply an accepted page response: store the continuation cursor and
    /// settle into `Idle` or `Exhausted`.
    pub fn accept_response(&mut self, response: &PageResponse) {
        self.cursor = match &response.next_cursor {
            Some(token) => PageCursor::Token(token.clone()),
            None => self.cursor.clone(),
        };
        self.status = if response.is_final() {
            SessionStatus::Exhausted
        } else {
            SessionStatus::Idle
        };
    }

    /// Record a failed fetch
    pub fn fail(&mut self) {
        self.status = SessionStatus::Error;
    }
}
