use tracing::debug;

use super::error::GameError;
use super::word_count::WordCount;

/// Canned reply used when no live model is wired in.
pub const MOCK_REPLY: &str = "Usually blue, but can change.";

/// Source of reference responses for a prompt.
pub trait CompletionProvider {
    fn complete(&self, prompt: &str, words: WordCount) -> Result<String, GameError>;
}

/// Prompt text as sent to a provider, with the length instruction appended.
pub fn build_request(prompt: &str, words: WordCount) -> String {
    format!("{} {}", prompt.trim(), words.instruction())
}

/// Provider that always answers with the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCompletion {
    reply: String,
}

impl FixedCompletion {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for FixedCompletion {
    fn default() -> Self {
        Self::new(MOCK_REPLY)
    }
}

impl CompletionProvider for FixedCompletion {
    fn complete(&self, prompt: &str, words: WordCount) -> Result<String, GameError> {
        debug!(request = %build_request(prompt, words), "fixed completion");

        let reply = self.reply.trim();
        if reply.is_empty() {
            return Err(GameError::Completion("provider returned no text".to_string()));
        }
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_appends_instruction() {
        assert_eq!(
            build_request(" What color is the sky? ", WordCount::One),
            "What color is the sky? Respond in exactly 1 word."
        );
    }

    #[test]
    fn test_fixed_completion_returns_trimmed_reply() {
        let provider = FixedCompletion::new("  blue \n");
        assert_eq!(provider.complete("sky?", WordCount::One), Ok("blue".to_string()));
    }

    #[test]
    fn test_default_reply() {
        let reply = FixedCompletion::default()
            .complete("What color is the sky?", WordCount::Five)
            .unwrap();
        assert_eq!(reply, MOCK_REPLY);
    }

    #[test]
    fn test_blank_reply_is_error() {
        let provider = FixedCompletion::new("   ");
        assert!(matches!(
            provider.complete("sky?", WordCount::One),
            Err(GameError::Completion(_))
        ));
    }
}
