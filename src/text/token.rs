/// A comparable word unit produced by the normalizer.
///
/// Carries the cleaned surface form and its stem. Tokens are only built by
/// [`crate::text::normalize`] and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    normalized: String,
    stemmed: String,
}

impl Token {
    pub(crate) fn new(normalized: impl Into<String>, stemmed: impl Into<String>) -> Self {
        Self {
            normalized: normalized.into(),
            stemmed: stemmed.into(),
        }
    }

    /// Lowercase ASCII alphanumeric form of the word.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn stemmed(&self) -> &str {
        &self.stemmed
    }
}
