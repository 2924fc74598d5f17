pub mod config;
pub mod error;
pub mod lcs;
pub mod rating;
pub mod scorer;
pub mod similarity;

pub use config::{PresenceDenominator, ScoreWeights, ScoringConfig, SimilarityTiers};
pub use error::ScoreError;
pub use lcs::{weighted_lcs, LcsTable};
pub use rating::ScoreBand;
pub use scorer::{score, ScoreBreakdown, Scorer, Scratch};
pub use similarity::{word_similarity, SimilarityMatrix};
