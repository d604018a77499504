use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_msg_equality() {
        assert_eq!(SystemMsg::ClearStatusMessage, SystemMsg::ClearStatusMessage);
        assert_ne!(
            SystemMsg::UpdateStatusMessage("a".into()),
            SystemMsg::UpdateStatusMessage("b".into())
        );
    }

    #[test]
    fn test_system_msg_serialization() {
        let msg = SystemMsg::ShowError("source unavailable".into());
        let serialized = serde_json::to_string(&msg).expect("serialize");
        let deserialized: SystemMsg = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(msg, deserialized);
    }
}
