use super::mode::AppMode;
use crate::game::Attempt;

/// Everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub title: String,
    pub prompt: Option<String>,
    pub word_hint: Option<String>,
    pub attempts: Vec<Attempt>,
    pub attempts_left: usize,
    pub best_score: Option<u8>,
    pub reference: Option<String>,
    pub message: Option<String>,
    pub input: String,
    pub cursor: u16,
}
