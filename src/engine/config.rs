// Scoring configuration
// Tuning constants for the similarity engine, kept out of the algorithm so
// they can be re-tuned without touching its structure.

/// Similarity for identical normalized words.
pub const EXACT_MATCH: f64 = 1.0;
/// Similarity for words sharing a stem ("running" / "run").
pub const STEM_MATCH: f64 = 0.7;
/// Similarity when one word contains the other (partial credit only).
pub const CONTAINMENT_MATCH: f64 = 0.5;
/// Similarity when one stem is a prefix of the other (partial credit only).
pub const STEM_PREFIX_MATCH: f64 = 0.4;
/// Shortest stem allowed to earn prefix credit.
pub const MIN_STEM_PREFIX_LEN: usize = 4;

pub const POSITIONAL_WEIGHT: f64 = 0.5;
pub const PRESENCE_WEIGHT: f64 = 0.3;
pub const SEQUENCE_WEIGHT: f64 = 0.2;

/// Pairwise word similarity tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityTiers {
    /// Exact normalized match (default 1.0)
    pub exact: f64,

    /// Stem match (default 0.7)
    pub stem: f64,

    /// Enables the containment and stem-prefix tiers (default off)
    pub partial_credit: bool,

    pub containment: f64, // default 0.5
    pub stem_prefix: f64, // default 0.4
    pub min_stem_prefix: usize,
}

impl Default for SimilarityTiers {
    fn default() -> Self {
        Self {
            exact: EXACT_MATCH,
            stem: STEM_MATCH,
            partial_credit: false,
            containment: CONTAINMENT_MATCH,
            stem_prefix: STEM_PREFIX_MATCH,
            min_stem_prefix: MIN_STEM_PREFIX_LEN,
        }
    }
}

/// Weights of the three sub-scores; they sum to 1.0 so the final score stays in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub positional: f64,
    pub presence: f64,
    pub sequence: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            positional: POSITIONAL_WEIGHT,
            presence: PRESENCE_WEIGHT,
            sequence: SEQUENCE_WEIGHT,
        }
    }
}

impl ScoreWeights {
    /// Weighted sum of the sub-scores, rounded half away from zero and clamped to [0, 100].
    pub fn combine(&self, positional: f64, presence: f64, sequence: f64) -> u8 {
        let total =
            positional * self.positional + presence * self.presence + sequence * self.sequence;
        total.round().clamp(0.0, 100.0) as u8
    }
}

/// What the presence sum is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceDenominator {
    /// Reference length `m`.
    #[default]
    Reference,
    /// `max(m, n)`, which penalises padded guesses.
    Longest,
}

impl PresenceDenominator {
    pub fn divisor(self, reference_len: usize, candidate_len: usize) -> usize {
        match self {
            PresenceDenominator::Reference => reference_len,
            PresenceDenominator::Longest => reference_len.max(candidate_len),
        }
    }
}

/// Master configuration for the scorer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringConfig {
    pub tiers: SimilarityTiers,
    pub weights: ScoreWeights,
    pub presence: PresenceDenominator,
}

impl ScoringConfig {
    pub fn with_partial_credit(mut self) -> Self {
        self.tiers.partial_credit = true;
        self
    }

    pub fn with_presence(mut self, presence: PresenceDenominator) -> Self {
        self.presence = presence;
        self
    }
}
