pub mod completion;
pub mod config;
pub mod dates;
pub mod error;
pub mod round;
pub mod store;
pub mod word_count;

pub use completion::{CompletionProvider, FixedCompletion};
pub use config::GameConfig;
pub use error::GameError;
pub use round::{Attempt, DailyRound};
pub use store::{fetch_prompt, seed_prompt, DailyPrompt, InMemoryPromptStore, PromptStore};
pub use word_count::WordCount;
