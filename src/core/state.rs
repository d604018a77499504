use crate::{
    domain::{
        dataset::{DatasetId, RetrievalContext},
        filters::FilterSet,
        granule::Granule,
    },
    infrastructure::config::Config,
};

pub mod granules;
pub mod scroll;
pub mod system;

pub use granules::{GranuleListState, SessionId, SessionStatus};
pub use scroll::ScrollState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub granules: GranuleListState,
    pub scroll: ScrollState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            scroll: ScrollState::new(config.browse.scroll_threshold_px),
            config: ConfigState { config },
            ..Self::default()
        }
    }

    // ===== Presentation interface =====
    // Hosts render from these; they never mutate state directly.

    /// The accumulated, ordered granule sequence for the current session
    pub fn snapshot(&self) -> &[Granule] {
        self.granules.snapshot()
    }

    /// Current load status; hosts show a loading indicator iff `Loading`
    pub fn status(&self) -> SessionStatus {
        self.granules.status()
    }

    pub fn selected_dataset(&self) -> Option<&DatasetId> {
        self.granules.selected_dataset()
    }

    pub fn active_filters(&self) -> Option<&FilterSet> {
        self.granules.active_filters()
    }

    /// Parameters for the external detail-view / retrieve-data workflows
    pub fn retrieval_context(&self) -> Option<RetrievalContext> {
        Some(RetrievalContext {
            dataset: self.granules.selected_dataset()?.clone(),
            filters: self
                .granules
                .active_filters()
                .cloned()
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::granules::GranuleMsg;
    use crate::infrastructure::config::BrowseConfig;

    #[test]
    fn test_app_state_default() {
        let state = AppState::new();

        assert!(state.snapshot().is_empty());
        assert_eq!(state.status(), SessionStatus::Idle);
        assert_eq!(state.selected_dataset(), None);
        assert_eq!(state.retrieval_context(), None);
        assert!(state.system.status_message.is_none());
    }

    #[test]
    fn test_new_with_config_wires_scroll_threshold() {
        let config = Config {
            browse: BrowseConfig {
                scroll_threshold_px: 50,
                page_size: 20,
            },
            ..Config::default()
        };
        let state = AppState::new_with_config(config);
        assert_eq!(state.scroll.threshold_px(), 50);
    }

    #[test]
    fn test_retrieval_context_after_selection() {
        let mut state = AppState::new();
        state
            .granules
            .update(GranuleMsg::SelectDataset(DatasetId::from("C1")));

        let context = state.retrieval_context().expect("dataset selected");
        assert_eq!(context.dataset, DatasetId::from("C1"));
        assert!(context.filters.is_empty());
    }
}
