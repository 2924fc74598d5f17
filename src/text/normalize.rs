use super::stem::{english, Stem};
use super::token::Token;

/// Characters that separate words instead of being part of them.
const SEPARATORS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '/', '\\', '-', '_', '+', '=', '@', '#', '$', '%', '^', '&',
    '*', '(', ')', '[', ']', '{', '}', '|', '<', '>',
];

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Word-splitting whitespace: Unicode spaces and the byte order mark, but not NEL.
fn is_word_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn has_alphanumeric(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_alphanumeric())
}

fn split_separators(text: &str) -> String {
    text.chars()
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect()
}

/// Lowercases, folds word spaces to ' ' and drops everything else outside `[a-z0-9]`.
fn clean(text: &str) -> String {
    split_separators(text)
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| {
            if is_word_space(c) {
                Some(' ')
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}

/// Normalizes text into tokens using the shared English stemmer.
pub fn normalize(text: &str) -> Vec<Token> {
    normalize_with(text, english())
}

/// Normalizes text into an ordered token sequence.
///
/// Separator punctuation becomes whitespace, so "blue,but" yields two words,
/// while other symbols (quotes, apostrophes, accented letters) are removed in
/// place, so "don't" yields "dont". Returns an empty vector when nothing
/// scorable remains.
pub fn normalize_with(text: &str, stemmer: &dyn Stem) -> Vec<Token> {
    clean(text)
        .split_whitespace()
        .filter(|word| has_alphanumeric(word))
        .map(|word| Token::new(word, stemmer.stem(word)))
        .collect()
}

/// Counts words the way the game reports response length.
pub fn count_words(text: &str) -> usize {
    split_separators(text)
        .split(is_word_space)
        .filter(|word| has_alphanumeric(word))
        .count()
}

/// Keeps at most `max` whitespace-separated words of a guess.
pub fn truncate_words(text: &str, max: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max {
        return text.trim().to_string();
    }
    words[..max].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::IdentityStemmer;

    fn surface(text: &str) -> Vec<String> {
        normalize_with(text, &IdentityStemmer)
            .iter()
            .map(|t| t.normalized().to_string())
            .collect()
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(surface("blue,but"), vec!["blue", "but"]);
        assert_eq!(surface("well-known/used"), vec!["well", "known", "used"]);
    }

    #[test]
    fn test_lowercases_and_strips_symbols() {
        assert_eq!(
            surface("Usually blue, but can change."),
            vec!["usually", "blue", "but", "can", "change"]
        );
        assert_eq!(surface("Don't \"quote\" me"), vec!["dont", "quote", "me"]);
    }

    #[test]
    fn test_non_ascii_is_removed() {
        assert_eq!(surface("café 🚀 ok"), vec!["caf", "ok"]);
    }

    #[test]
    fn test_symbol_only_fragments_dropped() {
        assert!(surface("... !!! ???").is_empty());
        assert!(surface("   ").is_empty());
        assert!(surface("").is_empty());
    }

    #[test]
    fn test_byte_order_mark_separates_words() {
        assert_eq!(surface("blue\u{feff}sky"), vec!["blue", "sky"]);
        assert_eq!(surface("blue\u{3000}sky\u{a0}today"), vec!["blue", "sky", "today"]);
        assert_eq!(count_words("blue\u{feff}sky"), 2);
    }

    #[test]
    fn test_next_line_is_stripped_not_split() {
        assert_eq!(surface("blue\u{85}sky"), vec!["bluesky"]);
        assert_eq!(count_words("blue\u{85}sky"), 1);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        assert_eq!(surface("b a b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(surface("Route 66!"), vec!["route", "66"]);
    }

    #[test]
    fn test_default_stemmer_fills_stem() {
        let tokens = normalize("Running dogs");
        assert_eq!(tokens[0].normalized(), "running");
        assert_eq!(tokens[0].stemmed(), "run");
        assert_eq!(tokens[1].stemmed(), "dog");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("Usually blue, but can change."), 5);
        assert_eq!(count_words("one--two"), 2);
        assert_eq!(count_words(" ' \" "), 0);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_truncate_words() {
        assert_eq!(truncate_words("  a b  c ", 5), "a b  c");
        assert_eq!(truncate_words("a b c d", 2), "a b");
        assert_eq!(truncate_words("a b", 0), "");
    }
}
