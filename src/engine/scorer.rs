//! Similarity scoring between a reference response and a guess.
//!
//! The final score blends three sub-scores, each in `[0, 100]`:
//!
//! - **positional**: similarity of words sharing the same slot, over the
//!   reference length
//! - **presence**: best match of each reference word anywhere in the guess
//! - **sequence**: weighted longest common subsequence over the longer length
//!
//! Scoring is pure: the same two strings always produce the same score, and
//! a [`Scorer`] can be shared freely between threads.

use lazy_static::lazy_static;
use std::fmt;
use tracing::debug;

use super::config::ScoringConfig;
use super::error::ScoreError;
use super::lcs::LcsTable;
use super::similarity::SimilarityMatrix;
use crate::text::{normalize_with, EnglishStemmer, Stem, Token};

/// The three sub-scores and the combined result of one scoring call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub positional: f64,
    pub presence: f64,
    pub sequence: f64,
    pub score: u8,
}

/// Reusable buffers for repeated scoring calls.
#[derive(Debug, Default, Clone)]
pub struct Scratch {
    matrix: SimilarityMatrix,
    lcs: LcsTable,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct Scorer {
    config: ScoringConfig,
    stemmer: Box<dyn Stem>,
}

impl fmt::Debug for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scorer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            stemmer: Box::new(EnglishStemmer::new()),
        }
    }

    pub fn with_stemmer(mut self, stemmer: impl Stem + 'static) -> Self {
        self.stemmer = Box::new(stemmer);
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        normalize_with(text, self.stemmer.as_ref())
    }

    /// Scores `candidate` against `reference`, returning a value in `[0, 100]`.
    pub fn score(&self, reference: &str, candidate: &str) -> Result<u8, ScoreError> {
        self.breakdown(reference, candidate).map(|b| b.score)
    }

    pub fn breakdown(&self, reference: &str, candidate: &str) -> Result<ScoreBreakdown, ScoreError> {
        self.breakdown_with(reference, candidate, &mut Scratch::new())
    }

    /// Like [`Scorer::breakdown`], reusing the caller's buffers.
    pub fn breakdown_with(
        &self,
        reference: &str,
        candidate: &str,
        scratch: &mut Scratch,
    ) -> Result<ScoreBreakdown, ScoreError> {
        let reference = self.tokenize(reference);
        let candidate = self.tokenize(candidate);
        self.breakdown_tokens(&reference, &candidate, scratch)
    }

    /// Scores two already-normalized token sequences.
    ///
    /// Fails with [`ScoreError::EmptyReference`] when `reference` is empty;
    /// an empty `candidate` simply scores 0.
    pub fn breakdown_tokens(
        &self,
        reference: &[Token],
        candidate: &[Token],
        scratch: &mut Scratch,
    ) -> Result<ScoreBreakdown, ScoreError> {
        let m = reference.len();
        let n = candidate.len();
        if m == 0 {
            return Err(ScoreError::EmptyReference);
        }

        scratch.matrix.fill(reference, candidate, &self.config.tiers);
        let matrix = &scratch.matrix;

        let positional_sum: f64 = (0..m.min(n)).map(|i| matrix.get(i, i)).sum();
        let positional = positional_sum / m as f64 * 100.0;

        let presence_sum: f64 = (0..m).map(|i| matrix.best_in_row(i)).sum();
        let presence = presence_sum / self.config.presence.divisor(m, n) as f64 * 100.0;

        let lcs = scratch.lcs.compute(matrix);
        let sequence = lcs / m.max(n) as f64 * 100.0;

        let score = self.config.weights.combine(positional, presence, sequence);
        debug!(
            reference_words = m,
            candidate_words = n,
            positional,
            presence,
            sequence,
            score,
            "scored guess"
        );

        Ok(ScoreBreakdown {
            positional,
            presence,
            sequence,
            score,
        })
    }
}

lazy_static! {
    static ref DEFAULT_SCORER: Scorer = Scorer::default();
}

/// Scores a guess with the default configuration and English stemming.
pub fn score(reference: &str, candidate: &str) -> Result<u8, ScoreError> {
    DEFAULT_SCORER.score(reference, candidate)
}
