use crate::domain::{Classification, EmissionResult, FootprintState, ProgressState};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Events emitted by the session after handling a command
///
/// Every event carrying ledger state carries the snapshots taken after the
/// atomic commit, so a reader never observes a half-applied update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A trip was estimated and committed to both ledgers
    TripLogged {
        result: EmissionResult,
        footprint: FootprintState,
        progress: ProgressState,
    },

    /// A scanned item was credited; the footprint ledger is untouched
    ItemScanned {
        classification: Classification,
        progress: ProgressState,
    },

    /// The classification call failed; nothing was credited
    ScanUnidentified { classification: Classification },

    /// A quest was completed and its points awarded
    QuestCompleted {
        quest_id: String,
        points: u32,
        progress: ProgressState,
    },

    /// The quest had already been completed; nothing changed
    QuestAlreadyDone { quest_id: String },

    /// The final quiz answer landed; points were settled and the per-session
    /// score reset
    QuizFinished {
        correct: u32,
        total: usize,
        points: u32,
        progress: ProgressState,
    },

    /// The quiz session returned to `NotStarted`
    QuizReset,

    /// Command failed
    CommandFailed { command: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_clone() {
        let event = SessionEvent::QuestAlreadyDone {
            quest_id: "q2".to_string(),
        };

        let cloned = event.clone();
        assert_eq!(event, cloned);
    }

    #[test]
    fn test_command_failed_event() {
        let event = SessionEvent::CommandFailed {
            command: "LogActivity".to_string(),
            reason: "bad distance".to_string(),
        };

        if let SessionEvent::CommandFailed { command, reason } = event {
            assert_eq!(command, "LogActivity");
            assert_eq!(reason, "bad distance");
        } else {
            panic!("Expected CommandFailed");
        }
    }

    #[test]
    fn test_event_serialization_tags() {
        let event = SessionEvent::QuizReset;

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"quiz_reset\""));
    }
}
