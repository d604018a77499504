use serde::{Deserialize, Serialize};

use crate::{core::state::granules::SessionId, domain::page::PageRequest};

/// Elm-like command definitions
/// Represents side effects (page fetches, logging) requested by the update
/// function and carried out by the command executor. The update function
/// itself never performs I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    /// Fetch one page from the granule source, tagged with the owning
    /// session so the eventual completion can be checked for staleness
    FetchPage {
        session: SessionId,
        request: PageRequest,
    },

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.remove(0),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchPage { .. } => true,
            Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_async),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // Fetches are what the user is waiting on
            Cmd::FetchPage { .. } => 0,

            // Logging has lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 1,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(Cmd::priority).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{dataset::DatasetId, filters::FilterSet};

    fn fetch_cmd() -> Cmd {
        Cmd::FetchPage {
            session: SessionId::new(1),
            request: PageRequest::first_page(DatasetId::from("C1"), FilterSet::new()),
        }
    }

    #[test]
    fn test_cmd_batch_empty() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let cmd = fetch_cmd();
        assert_eq!(Cmd::batch(vec![cmd.clone()]), cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        let cmds = vec![fetch_cmd(), Cmd::LogInfo { message: "x".into() }];
        assert_eq!(Cmd::batch(cmds.clone()), Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        assert!(fetch_cmd().is_async());
        assert!(!Cmd::LogInfo { message: "x".into() }.is_async());
        assert!(Cmd::Batch(vec![fetch_cmd()]).is_async());
        assert!(!Cmd::Batch(vec![Cmd::None]).is_async());
    }

    #[test]
    fn test_cmd_priority() {
        assert_eq!(fetch_cmd().priority(), 0);
        assert_eq!(Cmd::LogError { message: "x".into() }.priority(), 1);
        assert_eq!(Cmd::None.priority(), 255);

        let batch = Cmd::Batch(vec![Cmd::LogInfo { message: "x".into() }, fetch_cmd()]);
        assert_eq!(batch.priority(), 0);
    }

    #[test]
    fn test_cmd_serialization() {
        let cmd = fetch_cmd();
        let serialized = serde_json::to_string(&cmd).expect("serialize");
        let deserialized: Cmd = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(cmd, deserialized);
    }
}
