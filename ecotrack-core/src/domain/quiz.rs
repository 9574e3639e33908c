use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Quiz session state machine
///
/// `NotStarted → InProgress(0, 0)` on start; each answer advances the step
/// (and the score when correct) until the final answer lands in `Finished`.
/// `Finished` is terminal until an explicit [`QuizSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizSession {
    NotStarted,
    InProgress { step: usize, score: u32 },
    Finished { score: u32 },
}

/// What a single answer did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved on to the next question
    Advanced,
    /// That was the final question; the session is finished
    Finished { score: u32 },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QuizError {
    #[error("quiz already started")]
    AlreadyStarted,

    #[error("quiz already finished; reset it before starting again")]
    AlreadyFinished,

    #[error("no quiz in progress")]
    NotInProgress,

    #[error("question index {index} out of range for a {len}-question quiz")]
    NoSuchQuestion { index: usize, len: usize },

    #[error("quiz must have at least one question")]
    EmptyQuiz,

    #[error("expected {expected} answers, got {got}")]
    WrongAnswerCount { expected: usize, got: usize },
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession::NotStarted
    }

    /// Begin a session of `question_count` questions
    pub fn start(&mut self, question_count: usize) -> Result<(), QuizError> {
        if question_count == 0 {
            return Err(QuizError::EmptyQuiz);
        }

        match self {
            QuizSession::NotStarted => {
                *self = QuizSession::InProgress { step: 0, score: 0 };
                Ok(())
            }
            QuizSession::InProgress { .. } => Err(QuizError::AlreadyStarted),
            QuizSession::Finished { .. } => Err(QuizError::AlreadyFinished),
        }
    }

    /// Record one answered question.
    ///
    /// `question_count` is the session length; the final answer transitions
    /// to `Finished` and returns the closing score.
    pub fn answer(&mut self, correct: bool, question_count: usize) -> Result<QuizStep, QuizError> {
        match *self {
            QuizSession::InProgress { step, score } => {
                let score = if correct { score + 1 } else { score };

                if step + 1 < question_count {
                    *self = QuizSession::InProgress {
                        step: step + 1,
                        score,
                    };
                    Ok(QuizStep::Advanced)
                } else {
                    *self = QuizSession::Finished { score };
                    Ok(QuizStep::Finished { score })
                }
            }
            QuizSession::NotStarted => Err(QuizError::NotInProgress),
            QuizSession::Finished { .. } => Err(QuizError::AlreadyFinished),
        }
    }

    /// Explicitly leave `Finished` (or abandon an in-progress session) and
    /// return to `NotStarted`
    pub fn reset(&mut self) {
        *self = QuizSession::NotStarted;
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, QuizSession::Finished { .. })
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_not_started() {
        let session = QuizSession::new();
        assert_eq!(session, QuizSession::NotStarted);
    }

    #[test]
    fn test_start_transitions_to_in_progress() {
        let mut session = QuizSession::new();

        session.start(3).unwrap();

        assert_eq!(session, QuizSession::InProgress { step: 0, score: 0 });
    }

    #[test]
    fn test_cannot_start_empty_quiz() {
        let mut session = QuizSession::new();

        assert_eq!(session.start(0), Err(QuizError::EmptyQuiz));
        assert_eq!(session, QuizSession::NotStarted);
    }

    #[test]
    fn test_answers_advance_and_score() {
        let mut session = QuizSession::new();
        session.start(3).unwrap();

        assert_eq!(session.answer(true, 3).unwrap(), QuizStep::Advanced);
        assert_eq!(session, QuizSession::InProgress { step: 1, score: 1 });

        assert_eq!(session.answer(false, 3).unwrap(), QuizStep::Advanced);
        assert_eq!(session, QuizSession::InProgress { step: 2, score: 1 });
    }

    #[test]
    fn test_final_answer_finishes() {
        let mut session = QuizSession::new();
        session.start(3).unwrap();

        session.answer(true, 3).unwrap();
        session.answer(false, 3).unwrap();
        let step = session.answer(true, 3).unwrap();

        assert_eq!(step, QuizStep::Finished { score: 2 });
        assert_eq!(session, QuizSession::Finished { score: 2 });
        assert!(session.is_finished());
    }

    #[test]
    fn test_finished_is_terminal() {
        let mut session = QuizSession::Finished { score: 1 };

        assert_eq!(session.answer(true, 1), Err(QuizError::AlreadyFinished));
        assert_eq!(session.start(3), Err(QuizError::AlreadyFinished));
        assert_eq!(session, QuizSession::Finished { score: 1 });
    }

    #[test]
    fn test_cannot_answer_before_start() {
        let mut session = QuizSession::new();

        assert_eq!(session.answer(true, 3), Err(QuizError::NotInProgress));
    }

    #[test]
    fn test_cannot_restart_in_progress() {
        let mut session = QuizSession::new();
        session.start(3).unwrap();

        assert_eq!(session.start(3), Err(QuizError::AlreadyStarted));
    }

    #[test]
    fn test_reset_returns_to_not_started() {
        let mut session = QuizSession::Finished { score: 3 };

        session.reset();

        assert_eq!(session, QuizSession::NotStarted);
        // A fresh session can start again
        session.start(2).unwrap();
        assert_eq!(session, QuizSession::InProgress { step: 0, score: 0 });
    }

    #[test]
    fn test_single_question_quiz() {
        let mut session = QuizSession::new();
        session.start(1).unwrap();

        let step = session.answer(true, 1).unwrap();

        assert_eq!(step, QuizStep::Finished { score: 1 });
    }
}
