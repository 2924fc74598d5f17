use tracing::{info, warn};

use super::config::GameConfig;
use super::error::GameError;
use super::store::DailyPrompt;
use crate::engine::{Scorer, Scratch};
use crate::text::{count_words, truncate_words};

/// A scored guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: String,
    pub score: u8,
}

/// Play state for one daily prompt.
///
/// A round allows a fixed number of attempts. Each guess is cut down to the
/// word count of the hidden response before scoring. The response is revealed
/// once the attempts run out or a guess scores 100.
#[derive(Debug)]
pub struct DailyRound {
    prompt: DailyPrompt,
    attempts: Vec<Attempt>,
    max_attempts: usize,
    max_guess_words: usize,
    revealed: bool,
    scratch: Scratch,
}

impl DailyRound {
    pub fn new(prompt: DailyPrompt, config: &GameConfig) -> Self {
        Self {
            prompt,
            attempts: Vec::new(),
            max_attempts: config.max_attempts,
            max_guess_words: config.max_guess_words,
            revealed: false,
            scratch: Scratch::new(),
        }
    }

    pub fn prompt(&self) -> &DailyPrompt {
        &self.prompt
    }

    /// Word count of the hidden response, which caps every guess.
    pub fn max_words(&self) -> usize {
        count_words(&self.prompt.reference_text)
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn attempts_left(&self) -> usize {
        if self.revealed {
            return 0;
        }
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    pub fn best_score(&self) -> u8 {
        self.attempts.iter().map(|a| a.score).max().unwrap_or(0)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The hidden response, available only once the round is over.
    pub fn reference(&self) -> Option<&str> {
        self.revealed.then_some(self.prompt.reference_text.as_str())
    }

    /// Scores a guess and records it as an attempt.
    ///
    /// A guess that fails to score does not use up an attempt.
    pub fn submit(&mut self, scorer: &Scorer, guess: &str) -> Result<Attempt, GameError> {
        if self.revealed || self.attempts.len() >= self.max_attempts {
            return Err(GameError::RoundOver);
        }

        if guess.trim().is_empty() {
            return Err(GameError::EmptyGuess);
        }

        if count_words(guess) > self.max_guess_words {
            return Err(GameError::GuessTooLong {
                max: self.max_guess_words,
            });
        }

        let guess = truncate_words(guess, self.max_words());
        let breakdown = scorer
            .breakdown_with(&self.prompt.reference_text, &guess, &mut self.scratch)
            .map_err(|e| {
                warn!(date = %self.prompt.date, error = %e, "guess could not be scored");
                GameError::from(e)
            })?;

        let attempt = Attempt {
            guess,
            score: breakdown.score,
        };
        self.attempts.push(attempt.clone());

        if breakdown.score == 100 || self.attempts.len() >= self.max_attempts {
            self.revealed = true;
        }

        info!(
            date = %self.prompt.date,
            attempt = self.attempts.len(),
            score = attempt.score,
            revealed = self.revealed,
            "guess scored"
        );
        Ok(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn round(reference: &str) -> DailyRound {
        let prompt = DailyPrompt {
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            prompt: "What color is the sky?".to_string(),
            reference_text: reference.to_string(),
        };
        DailyRound::new(prompt, &GameConfig::default())
    }

    #[test]
    fn test_reference_hidden_until_revealed() {
        let mut round = round("Usually blue, but can change.");
        let scorer = Scorer::default();
        assert_eq!(round.reference(), None);

        round.submit(&scorer, "green").unwrap();
        assert_eq!(round.reference(), None);
        assert_eq!(round.attempts_left(), 2);
    }

    #[test]
    fn test_three_attempts_then_reveal() {
        let mut round = round("Usually blue, but can change.");
        let scorer = Scorer::default();

        round.submit(&scorer, "green").unwrap();
        round.submit(&scorer, "blue").unwrap();
        round.submit(&scorer, "usually blue").unwrap();

        assert!(round.is_revealed());
        assert_eq!(round.attempts_left(), 0);
        assert_eq!(round.reference(), Some("Usually blue, but can change."));
        assert_eq!(round.submit(&scorer, "again"), Err(GameError::RoundOver));
        assert_eq!(round.attempts().len(), 3);
    }

    #[test]
    fn test_perfect_guess_reveals_early() {
        let mut round = round("Blue");
        let attempt = round.submit(&Scorer::default(), "blue!").unwrap();
        assert_eq!(attempt.score, 100);
        assert!(round.is_revealed());
        assert_eq!(round.best_score(), 100);
    }

    #[test]
    fn test_guess_truncated_to_reference_length() {
        let mut round = round("Blue sky");
        let attempt = round
            .submit(&Scorer::default(), "blue sky with clouds")
            .unwrap();
        assert_eq!(attempt.guess, "blue sky");
        assert_eq!(attempt.score, 100);
    }

    #[test]
    fn test_best_score_tracks_maximum() {
        let mut round = round("apple banana cherry");
        let scorer = Scorer::default();
        round.submit(&scorer, "cherry banana apple").unwrap();
        round.submit(&scorer, "grape").unwrap();
        assert_eq!(round.best_score(), 53);
    }

    #[test]
    fn test_empty_guess_does_not_use_attempt() {
        let mut round = round("Blue");
        assert_eq!(round.submit(&Scorer::default(), "   "), Err(GameError::EmptyGuess));
        assert!(round.attempts().is_empty());
    }

    #[test]
    fn test_overlong_guess_rejected() {
        let mut round = round("Blue");
        let guess = vec!["word"; 201].join(" ");
        assert_eq!(
            round.submit(&Scorer::default(), &guess),
            Err(GameError::GuessTooLong { max: 200 })
        );
    }

    #[test]
    fn test_unscorable_reference_surfaces_error() {
        let mut round = round("...");
        let err = round.submit(&Scorer::default(), "blue").unwrap_err();
        assert_eq!(err.user_message(), "Scoring unavailable");
        assert!(round.attempts().is_empty());
    }
}
