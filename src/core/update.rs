use crate::{
    core::cmd::Cmd,
    core::msg::{filters::FilterMsg, granules::GranuleMsg, scroll::ScrollMsg, Msg},
    core::state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Granule list messages (delegated to GranuleListState)
        Msg::Granule(granule_msg) => {
            let commands = state.granules.update(granule_msg);
            (state, commands)
        }

        // Filter changes go through the coordinator's equality check
        Msg::Filter(FilterMsg::Changed(filters)) => {
            let commands = state.granules.apply_filters(filters);
            (state, commands)
        }

        // Scroll samples pass the intent detector first; the pagination
        // state machine then decides whether the intent is actionable
        Msg::Scroll(ScrollMsg::Sample { distance_px }) => {
            if state.scroll.offer_sample(distance_px) {
                let commands = state.granules.update(GranuleMsg::RequestMore);
                (state, commands)
            } else {
                (state, vec![])
            }
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}
