use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The reference normalized to zero tokens, so there is nothing to divide by.
    #[error("reference text contains no scorable words")]
    EmptyReference,
}
