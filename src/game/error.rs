use chrono::NaiveDate;
use thiserror::Error;

use crate::engine::ScoreError;
use crate::input::LoadError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot access prompts for future dates ({0})")]
    FutureDate(NaiveDate),

    #[error("Invalid date format: {0:?}. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("No prompt found for {0}")]
    NotFound(NaiveDate),

    #[error("Guess is empty")]
    EmptyGuess,

    #[error("Guess is longer than {max} words")]
    GuessTooLong { max: usize },

    #[error("No attempts left for this prompt")]
    RoundOver,

    #[error("Prompt store error: {0}")]
    Store(String),

    #[error("Completion failed: {0}")]
    Completion(String),

    #[error(transparent)]
    Scoring(#[from] ScoreError),
}

impl From<LoadError> for GameError {
    fn from(err: LoadError) -> Self {
        GameError::Store(err.to_string())
    }
}

impl GameError {
    /// Text safe to show a player; scoring internals stay hidden.
    pub fn user_message(&self) -> String {
        match self {
            GameError::Scoring(_) => "Scoring unavailable".to_string(),
            other => other.to_string(),
        }
    }
}
