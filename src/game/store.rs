//! Daily prompt persistence.
//!
//! The store is a collaborator of the game, not of the scoring engine: the
//! engine only ever consumes `reference_text`. The in-memory store can be
//! filled from a TOML file of `[[prompt]]` tables:
//!
//! ```toml
//! [[prompt]]
//! date = "2026-10-19"
//! prompt = "What color is the sky?"
//! reference_text = "Usually blue, but can change."
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::completion::CompletionProvider;
use super::dates::validate_date_access;
use super::error::GameError;
use super::word_count::WordCount;
use crate::input::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrompt {
    pub date: NaiveDate,
    pub prompt: String,
    pub reference_text: String,
}

pub trait PromptStore {
    fn get(&self, date: NaiveDate) -> Result<Option<DailyPrompt>, GameError>;

    /// Inserts or replaces the prompt for its date.
    fn upsert(&mut self, prompt: DailyPrompt) -> Result<(), GameError>;

    /// Dates with a prompt on or before `up_to`, newest first.
    fn available_dates(&self, up_to: NaiveDate) -> Result<Vec<NaiveDate>, GameError>;
}

#[derive(Debug, Default, Deserialize)]
struct PromptFile {
    #[serde(default, rename = "prompt")]
    prompts: Vec<DailyPrompt>,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryPromptStore {
    prompts: BTreeMap<NaiveDate, DailyPrompt>,
}

impl InMemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries for the same date replace earlier ones.
    pub fn from_toml_str(source: &str) -> Result<Self, LoadError> {
        let file: PromptFile =
            toml::from_str(source).map_err(|e| LoadError::PromptFile(e.to_string()))?;

        let mut store = Self::new();
        for prompt in file.prompts {
            store.prompts.insert(prompt.date, prompt);
        }
        Ok(store)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        let source = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&source)?;
        info!(path = %path.display(), prompts = store.len(), "loaded prompt file");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl PromptStore for InMemoryPromptStore {
    fn get(&self, date: NaiveDate) -> Result<Option<DailyPrompt>, GameError> {
        Ok(self.prompts.get(&date).cloned())
    }

    fn upsert(&mut self, prompt: DailyPrompt) -> Result<(), GameError> {
        self.prompts.insert(prompt.date, prompt);
        Ok(())
    }

    fn available_dates(&self, up_to: NaiveDate) -> Result<Vec<NaiveDate>, GameError> {
        Ok(self.prompts.range(..=up_to).rev().map(|(date, _)| *date).collect())
    }
}

/// Fetches the prompt a player may open for `date`.
pub fn fetch_prompt(
    store: &dyn PromptStore,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<DailyPrompt, GameError> {
    validate_date_access(date, today)?;
    store.get(date)?.ok_or(GameError::NotFound(date))
}

/// Asks the provider for a reference response and stores it under `date`.
pub fn seed_prompt(
    store: &mut dyn PromptStore,
    provider: &dyn CompletionProvider,
    date: NaiveDate,
    prompt: &str,
    words: WordCount,
) -> Result<DailyPrompt, GameError> {
    let reference_text = provider.complete(prompt, words)?;
    let daily = DailyPrompt {
        date,
        prompt: prompt.trim().to_string(),
        reference_text,
    };
    store.upsert(daily.clone())?;
    info!(%date, "seeded daily prompt");
    Ok(daily)
}
