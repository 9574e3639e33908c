use crate::domain::catalog::{Quest, QuizKey};
use crate::domain::quiz::QuizError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Points needed to advance one level
const POINTS_PER_LEVEL: u64 = 100;

/// Immutable snapshot of cumulative gamification progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressState {
    /// Cumulative reward points
    total_points: u64,

    /// Quests completed this session (each can only be earned once)
    completed_quests: HashSet<String>,

    /// Correct answers in the current quiz session, reset when it finishes
    quiz_score: u32,
}

impl ProgressState {
    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn completed_quests(&self) -> &HashSet<String> {
        &self.completed_quests
    }

    pub fn quiz_score(&self) -> u32 {
        self.quiz_score
    }

    /// Level is always derived from the point total, never stored, so it
    /// cannot desynchronize.
    pub fn level(&self) -> u64 {
        self.total_points / POINTS_PER_LEVEL
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProgressError {
    #[error("quest {0} is already completed")]
    QuestAlreadyCompleted(String),

    #[error("unknown quest: {0}")]
    UnknownQuest(String),
}

/// Cumulative reward points, quest completion and quiz scoring
///
/// Mutated only through the session orchestrator's commit path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressTracker {
    state: ProgressState,
}

impl ProgressTracker {
    /// Start from a configured baseline point total
    pub fn new(baseline_points: u64) -> Self {
        Self {
            state: ProgressState {
                total_points: baseline_points,
                completed_quests: HashSet::new(),
                quiz_score: 0,
            },
        }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Add points and return the new snapshot
    pub fn award_points(&mut self, points: u32) -> ProgressState {
        self.state.total_points += u64::from(points);

        tracing::debug!(
            awarded = points,
            total_points = self.state.total_points,
            level = self.state.level(),
            "points awarded"
        );

        self.state.clone()
    }

    /// Mark a quest completed and award its fixed points.
    ///
    /// Quests are single-completion: a second attempt fails with
    /// [`ProgressError::QuestAlreadyCompleted`] and awards nothing.
    pub fn complete_quest(&mut self, quest: &Quest) -> Result<ProgressState, ProgressError> {
        if self.state.completed_quests.contains(&quest.id) {
            return Err(ProgressError::QuestAlreadyCompleted(quest.id.clone()));
        }

        self.state.completed_quests.insert(quest.id.clone());
        Ok(self.award_points(quest.points))
    }

    /// Check one quiz answer against the static key and track the running
    /// session score. Does not award points; the caller settles the reward
    /// when the quiz finishes.
    pub fn record_quiz_answer(
        &mut self,
        selected: u32,
        question_index: usize,
        key: &QuizKey,
    ) -> Result<bool, QuizError> {
        let expected = key
            .answer_for(question_index)
            .ok_or(QuizError::NoSuchQuestion {
                index: question_index,
                len: key.len(),
            })?;

        let correct = expected == selected;
        if correct {
            self.state.quiz_score += 1;
        }

        Ok(correct)
    }

    /// Clear the per-session quiz score for the next round
    pub fn reset_quiz_score(&mut self) {
        self.state.quiz_score = 0;
    }
}
