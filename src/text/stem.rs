//! Stemming capability used by the normalizer.
//!
//! The scorer only ever sees the [`Stem`] trait, so a different algorithm
//! (or a language other than English) can be swapped in without touching
//! the scoring code.

use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;

/// Reduces a normalized word to its root form.
pub trait Stem: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stem for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Porter-family English stemmer (Snowball `english`).
pub struct EnglishStemmer {
    inner: Stemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EnglishStemmer")
    }
}

impl Stem for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// Leaves every word untouched, so only exact matches line up.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stem for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

lazy_static! {
    static ref ENGLISH: EnglishStemmer = EnglishStemmer::new();
}

/// Shared English stemmer instance.
pub fn english() -> &'static EnglishStemmer {
    &ENGLISH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_strips_ing_and_doubled_consonant() {
        assert_eq!(english().stem("running"), "run");
        assert_eq!(english().stem("run"), "run");
    }

    #[test]
    fn test_english_strips_ly() {
        assert_eq!(english().stem("quickly"), english().stem("quick"));
    }

    #[test]
    fn test_english_strips_plural() {
        assert_eq!(english().stem("dogs"), "dog");
    }

    #[test]
    fn test_identity_stemmer_is_noop() {
        assert_eq!(IdentityStemmer.stem("running"), "running");
    }

    #[test]
    fn test_closure_implements_stem() {
        let truncate = |word: &str| word.chars().take(3).collect::<String>();
        assert_eq!(truncate.stem("banana"), "ban");
    }
}
