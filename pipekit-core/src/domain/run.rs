//! Run domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Handle to one execution of a submitted pipeline
///
/// Returned by the pipeline service when a run is created. Only `run_id` is
/// needed for follow-up queries; the rest is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunHandle {
    pub run_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub experiment_id: Option<String>,
    #[serde(default)]
    pub state: RunState,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Runtime state of a run as reported by the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    #[default]
    RuntimeStateUnspecified,
    Pending,
    Running,
    Succeeded,
    Skipped,
    Failed,
    Canceling,
    Canceled,
    Paused,
}

impl RunState {
    /// Returns true once the run will not change state again
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Succeeded | RunState::Skipped | RunState::Failed | RunState::Canceled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_handle_from_service_json() {
        let json = r#"{
            "run_id": "0b5c6d4e-1111-2222-3333-444455556666",
            "display_name": "hello-pipeline 2026-10-17 10-00-00",
            "experiment_id": "exp-1",
            "state": "PENDING",
            "created_at": "2026-10-17T10:00:00Z",
            "storage_state": "AVAILABLE"
        }"#;

        let run: RunHandle = serde_json::from_str(json).unwrap();
        assert_eq!(run.run_id, "0b5c6d4e-1111-2222-3333-444455556666");
        assert_eq!(run.state, RunState::Pending);
        assert!(run.created_at.is_some());
        assert!(run.finished_at.is_none());
    }

    #[test]
    fn test_run_handle_minimal_json() {
        let run: RunHandle = serde_json::from_str(r#"{"run_id": "abc"}"#).unwrap();
        assert_eq!(run.state, RunState::RuntimeStateUnspecified);
        assert!(!run.state.is_terminal());
    }

    #[test]
    fn test_terminal_states() {
        assert!(RunState::Succeeded.is_terminal());
        assert!(RunState::Failed.is_terminal());
        assert!(!RunState::Running.is_terminal());
        assert!(!RunState::Canceling.is_terminal());
    }
}
