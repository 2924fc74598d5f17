/// Requested length of the model's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCount {
    #[default]
    One,
    Five,
    Ten,
}

impl WordCount {
    pub const ALL: [WordCount; 3] = [WordCount::One, WordCount::Five, WordCount::Ten];

    pub fn words(self) -> usize {
        match self {
            WordCount::One => 1,
            WordCount::Five => 5,
            WordCount::Ten => 10,
        }
    }

    pub fn from_words(words: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.words() == words)
    }

    pub fn label(self) -> String {
        match self.words() {
            1 => "1 word".to_string(),
            n => format!("{} words", n),
        }
    }

    /// Length instruction appended to a prompt sent to the completion provider.
    pub fn instruction(self) -> String {
        format!("Respond in exactly {}.", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_roundtrip_through_options() {
        for option in WordCount::ALL {
            assert_eq!(WordCount::from_words(option.words()), Some(option));
        }
        assert_eq!(WordCount::from_words(3), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(WordCount::One.label(), "1 word");
        assert_eq!(WordCount::Ten.label(), "10 words");
        assert_eq!(WordCount::Five.instruction(), "Respond in exactly 5 words.");
    }

    #[test]
    fn test_default_is_one_word() {
        assert_eq!(WordCount::default(), WordCount::One);
    }
}
