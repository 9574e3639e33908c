use crate::domain::Activity;

/// Commands that can be executed on a session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Log an activity (trip, scan result, quest, quiz) against the ledgers
    LogActivity { activity: Activity },

    /// Return a finished quiz to `NotStarted` for the next round
    ResetQuiz,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TransportMode, TripActivity};

    #[test]
    fn test_command_clone() {
        let cmd = SessionCommand::LogActivity {
            activity: Activity::Trip(TripActivity::new(5.0, TransportMode::Bike)),
        };

        let cloned = cmd.clone();
        assert_eq!(cmd, cloned);
    }

    #[test]
    fn test_command_debug() {
        let cmd = SessionCommand::LogActivity {
            activity: Activity::Quest {
                quest_id: "q1".to_string(),
            },
        };

        let debug = format!("{:?}", cmd);
        assert!(debug.contains("LogActivity"));
        assert!(debug.contains("q1"));
    }
}
