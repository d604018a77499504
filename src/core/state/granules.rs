use log::{debug, warn};

use crate::{
    core::cmd::Cmd,
    core::msg::granules::GranuleMsg,
    domain::{
        dataset::DatasetId,
        filters::FilterSet,
        granule::Granule,
        page::{PageRequest, PageResponse},
    },
};

mod results;
mod session;

pub use results::GranuleList;
pub use session::{LoadSession, SessionId, SessionStatus};

/// Pagination state machine for the granule result list.
///
/// Owns the active `LoadSession` and the accumulated `GranuleList`, and is
/// the only component that issues `Cmd::FetchPage` or mutates the list.
/// Because at most one fetch is outstanding per session and stale sessions
/// are discarded wholesale, accepted responses are necessarily applied in
/// the order their requests were issued.
#[derive(Debug, Clone, Default)]
pub struct GranuleListState {
    session: Option<LoadSession>,
    granules: GranuleList,
    next_session_id: u64,
}

impl GranuleListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Granule-list-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: GranuleMsg) -> Vec<Cmd> {
        match msg {
            GranuleMsg::SelectDataset(dataset) => self.start(dataset, FilterSet::new()),

            GranuleMsg::RequestMore => self.request_more(),

            GranuleMsg::PageLoaded { session, response } => {
                self.on_page_loaded(session, response)
            }

            GranuleMsg::PageFailed { session, message } => {
                self.on_page_failed(session, message)
            }
        }
    }

    /// Supersede the current session with a fresh one and fetch its first
    /// page. The previous session's in-flight fetch, if any, becomes stale.
    fn start(&mut self, dataset: DatasetId, filters: FilterSet) -> Vec<Cmd> {
        self.next_session_id += 1;
        let session = LoadSession::new(SessionId::new(self.next_session_id), dataset, filters);
        let request = PageRequest::first_page(
            session.dataset().clone(),
            session.filters().clone(),
        );
        let cmd = Cmd::FetchPage {
            session: session.id(),
            request,
        };

        self.granules.reset();
        self.session = Some(session);
        vec![cmd]
    }

    /// Coordinator entry point for filter-change notifications.
    ///
    /// Equal filter sets are absorbed here so redundant events never cause
    /// a refetch; a genuinely different set supersedes the session.
    pub fn apply_filters(&mut self, filters: FilterSet) -> Vec<Cmd> {
        let Some(session) = &self.session else {
            warn!("Filter change ignored: no dataset selected");
            return vec![];
        };

        if session.filters() == &filters {
            debug!("Filter change ignored: value unchanged");
            return vec![];
        }

        let dataset = session.dataset().clone();
        self.start(dataset, filters)
    }

    /// Ask for the next page. A deliberate no-op while a fetch is in
    /// flight, after exhaustion, or before any dataset is selected.
    fn request_more(&mut self) -> Vec<Cmd> {
        let Some(session) = &mut self.session else {
            return vec![];
        };

        if !session.can_request_more() {
            debug!(
                "request_more ignored while {status}",
                status = session.status()
            );
            return vec![];
        }

        session.begin_fetch();
        vec![Cmd::FetchPage {
            session: session.id(),
            request: PageRequest {
                dataset: session.dataset().clone(),
                filters: session.filters().clone(),
                cursor: session.cursor().clone(),
            },
        }]
    }

    fn on_page_loaded(&mut self, session_id: SessionId, response: PageResponse) -> Vec<Cmd> {
        let Some(session) = self.active_session_mut(session_id) else {
            return vec![];
        };

        session.accept_response(&response);
        self.granules.append(response.items);
        vec![]
    }

    fn on_page_failed(&mut self, session_id: SessionId, message: String) -> Vec<Cmd> {
        let Some(session) = self.active_session_mut(session_id) else {
            return vec![];
        };

        // Accumulated items stay visible; only the status changes
        session.fail();
        vec![Cmd::LogError { message }]
    }

    /// Stale-response guard: a completion only counts if it is tagged with
    /// the currently-active session's id.
    fn active_session_mut(&mut self, session_id: SessionId) -> Option<&mut LoadSession> {
        match &mut self.session {
            Some(session) if session.id() == session_id => Some(session),
            Some(_) => {
                debug!("Dropping completion for superseded session {session_id:?}");
                None
            }
            None => None,
        }
    }

    // ===== Presentation interface =====

    /// The accumulated, ordered result sequence
    pub fn snapshot(&self) -> &[Granule] {
        self.granules.snapshot()
    }

    /// Load status of the active session (`Idle` before any selection)
    pub fn status(&self) -> SessionStatus {
        self.session
            .as_ref()
            .map(LoadSession::status)
            .unwrap_or_default()
    }

    pub fn selected_dataset(&self) -> Option<&DatasetId> {
        self.session.as_ref().map(LoadSession::dataset)
    }

    pub fn active_filters(&self) -> Option<&FilterSet> {
        self.session.as_ref().map(LoadSession::filters)
    }

    pub fn active_session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(LoadSession::id)
    }

    pub fn len(&self) -> usize {
        self.granules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granules.is_empty()
    }
}
