// Game host configuration

use std::path::PathBuf;

use super::word_count::WordCount;
use crate::engine::ScoringConfig;

/// Attempts allowed per daily prompt before the response is revealed.
pub const MAX_ATTEMPTS: usize = 3;

/// Upper bound on raw guess length, checked before scoring.
pub const MAX_GUESS_WORDS: usize = 200;

pub const SEED_PROMPT: &str = "What color is the sky?";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Attempts per round (default 3)
    pub max_attempts: usize,

    /// Longest raw guess accepted, in words (default 200)
    pub max_guess_words: usize,

    /// Response length requested when seeding a prompt (default 1 word)
    pub default_word_count: WordCount,

    /// Prompt used when no prompt exists for today
    pub seed_prompt: String,

    /// Scoring used for guesses; the game awards containment and stem-prefix credit
    pub scoring: ScoringConfig,

    /// Where tracing output goes while the TUI owns the terminal
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            max_guess_words: MAX_GUESS_WORDS,
            default_word_count: WordCount::default(),
            seed_prompt: SEED_PROMPT.to_string(),
            scoring: ScoringConfig::default().with_partial_credit(),
            log_file: std::env::temp_dir().join("predictle.log"),
        }
    }
}
