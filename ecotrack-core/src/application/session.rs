use crate::application::{SessionCommand, SessionConfig, SessionEvent};
use crate::domain::quiz::QuizStep;
use crate::domain::{
    emission, Activity, Classification, FootprintLedger, ProgressError, ProgressTracker,
    QuestCatalog, QuizError, QuizKey, QuizSession, Timestamp, TripActivity,
};
use crate::scan::{ImagePayload, WasteClassifier};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One committed activity in the session journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub at: Timestamp,
    /// Short label for display (e.g. "trip:car", "scan:Plastic Bottle")
    pub label: String,
    pub emissions_kg: f64,
    pub points_awarded: u32,
}

/// Read-only view handed to presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SessionSnapshot {
    pub footprint: crate::domain::FootprintState,
    pub progress: crate::domain::ProgressState,
    /// Derived from the point total at snapshot time
    pub level: u64,
    pub quiz: QuizSession,
}

/// Session orchestrator: the only mutation path into the ledgers
///
/// Receives activities, computes their effect through the emission model (or
/// the external classification result), and commits footprint and progress
/// together. For one activity both ledgers update as one atomic unit — every
/// fallible step runs before the first mutation, so a rejected command leaves
/// no trace.
#[derive(Debug, Clone)]
pub struct EcoSession {
    footprint: FootprintLedger,
    progress: ProgressTracker,
    quiz: QuizSession,
    quests: QuestCatalog,
    quiz_key: QuizKey,
    journal: Vec<ActivityRecord>,
}

impl EcoSession {
    /// Open a session from baseline config and the static catalogs
    pub fn new(config: SessionConfig, quests: QuestCatalog, quiz_key: QuizKey) -> Self {
        Self {
            footprint: FootprintLedger::new(config.baseline_footprint_kg, config.goal_kg),
            progress: ProgressTracker::new(config.baseline_points),
            quiz: QuizSession::new(),
            quests,
            quiz_key,
            journal: Vec::new(),
        }
    }

    /// Default config plus the stock catalogs
    pub fn with_defaults() -> Self {
        Self::new(
            SessionConfig::default(),
            QuestCatalog::standard(),
            QuizKey::standard(),
        )
    }

    // ===== Command handling =====

    /// Process a single command and return the resulting event
    pub fn handle_command(&mut self, command: SessionCommand) -> SessionEvent {
        match command {
            SessionCommand::LogActivity { activity } => self.log_activity(activity),
            SessionCommand::ResetQuiz => self.reset_quiz(),
        }
    }

    /// Route one activity to its handler
    pub fn log_activity(&mut self, activity: Activity) -> SessionEvent {
        match activity {
            Activity::Trip(trip) => self.log_trip(trip),
            Activity::Scan(classification) => self.record_scan(classification),
            Activity::Quest { quest_id } => self.complete_quest(quest_id),
            Activity::Quiz { answers } => self.submit_quiz(&answers),
        }
    }

    /// Run the external classifier over a captured image, then commit.
    ///
    /// The exclusive `&mut self` borrow guarantees a single outstanding
    /// request per capture. A failed call substitutes the documented
    /// zero-reward fallback and mutates nothing.
    pub async fn scan_item(
        &mut self,
        classifier: &dyn WasteClassifier,
        image: &ImagePayload,
    ) -> SessionEvent {
        match classifier.classify(image).await {
            Ok(classification) => self.log_activity(Activity::Scan(classification)),
            Err(error) => {
                tracing::warn!(%error, "classification failed, substituting fallback");
                SessionEvent::ScanUnidentified {
                    classification: Classification::unidentified(),
                }
            }
        }
    }

    /// Return a finished (or abandoned) quiz to `NotStarted`
    pub fn reset_quiz(&mut self) -> SessionEvent {
        self.quiz.reset();
        self.progress.reset_quiz_score();
        SessionEvent::QuizReset
    }

    // ===== Read model =====

    pub fn snapshot(&self) -> SessionSnapshot {
        let progress = self.progress.state().clone();
        SessionSnapshot {
            footprint: self.footprint.state(),
            level: progress.level(),
            progress,
            quiz: self.quiz,
        }
    }

    pub fn journal(&self) -> &[ActivityRecord] {
        &self.journal
    }

    pub fn quests(&self) -> &QuestCatalog {
        &self.quests
    }

    pub fn quiz_key(&self) -> &QuizKey {
        &self.quiz_key
    }

    // ===== Activity handlers =====

    fn log_trip(&mut self, trip: TripActivity) -> SessionEvent {
        let result = match emission::estimate(&trip) {
            Ok(result) => result,
            Err(error) => return Self::failed("LogActivity", error),
        };

        // Commit point: both ledgers update together
        let footprint = self.footprint.apply_delta(result.emissions_kg);
        let progress = self.progress.award_points(result.points_awarded);
        self.record(
            format!("trip:{}", trip.mode),
            result.emissions_kg,
            result.points_awarded,
        );

        tracing::info!(
            mode = %trip.mode,
            distance_km = trip.distance_km,
            emissions_kg = result.emissions_kg,
            points = result.points_awarded,
            "trip logged"
        );

        SessionEvent::TripLogged {
            result,
            footprint,
            progress,
        }
    }

    fn record_scan(&mut self, classification: Classification) -> SessionEvent {
        // The service's reward is trusted verbatim; scanning is a separate
        // reward track and never touches the footprint ledger
        let progress = self.progress.award_points(classification.points_reward);
        self.record(
            format!("scan:{}", classification.material),
            0.0,
            classification.points_reward,
        );

        tracing::info!(
            material = %classification.material,
            recyclable = classification.is_recyclable,
            points = classification.points_reward,
            "scan credited"
        );

        SessionEvent::ItemScanned {
            classification,
            progress,
        }
    }

    fn complete_quest(&mut self, quest_id: String) -> SessionEvent {
        let quest = match self.quests.get(&quest_id) {
            Some(quest) => quest.clone(),
            None => {
                return Self::failed("LogActivity", ProgressError::UnknownQuest(quest_id));
            }
        };

        match self.progress.complete_quest(&quest) {
            Ok(progress) => {
                self.record(format!("quest:{quest_id}"), 0.0, quest.points);

                tracing::info!(quest_id = %quest_id, points = quest.points, "quest completed");

                SessionEvent::QuestCompleted {
                    quest_id,
                    points: quest.points,
                    progress,
                }
            }
            // Re-completing a quest is a no-op, not a failure
            Err(ProgressError::QuestAlreadyCompleted(_)) => {
                tracing::debug!(quest_id = %quest_id, "quest already completed, ignoring");
                SessionEvent::QuestAlreadyDone { quest_id }
            }
            Err(error) => Self::failed("LogActivity", error),
        }
    }

    fn submit_quiz(&mut self, answers: &[u32]) -> SessionEvent {
        let total = self.quiz_key.len();
        if answers.len() != total {
            return Self::failed(
                "LogActivity",
                QuizError::WrongAnswerCount {
                    expected: total,
                    got: answers.len(),
                },
            );
        }

        if let Err(error) = self.quiz.start(total) {
            return Self::failed("LogActivity", error);
        }

        // Answer count was validated against the key, so neither the tracker
        // nor the state machine can reject anything past this point
        let mut finish = None;
        for (index, &selected) in answers.iter().enumerate() {
            let correct = match self
                .progress
                .record_quiz_answer(selected, index, &self.quiz_key)
            {
                Ok(correct) => correct,
                Err(error) => return Self::failed("LogActivity", error),
            };

            match self.quiz.answer(correct, total) {
                Ok(step) => finish = Some(step),
                Err(error) => return Self::failed("LogActivity", error),
            }
        }

        let score = match finish {
            Some(QuizStep::Finished { score }) => score,
            _ => return Self::failed("LogActivity", QuizError::NotInProgress),
        };

        let points = score * self.quiz_key.points_per_correct();
        self.progress.award_points(points);
        self.progress.reset_quiz_score();
        let progress = self.progress.state().clone();
        self.record("quiz".to_string(), 0.0, points);

        tracing::info!(correct = score, total, points, "quiz finished");

        SessionEvent::QuizFinished {
            correct: score,
            total,
            points,
            progress,
        }
    }

    // ===== Helpers =====

    fn record(&mut self, label: String, emissions_kg: f64, points_awarded: u32) {
        self.journal.push(ActivityRecord {
            id: Uuid::new_v4(),
            at: Timestamp::now(),
            label,
            emissions_kg,
            points_awarded,
        });
    }

    fn failed(command: &str, error: impl std::fmt::Display) -> SessionEvent {
        tracing::warn!(command, %error, "command rejected");
        SessionEvent::CommandFailed {
            command: command.to_string(),
            reason: error.to_string(),
        }
    }
}

impl Default for EcoSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}
