use ratatui::style::Color;

use crate::engine::ScoreBand;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            accent: Color::Rgb(247, 118, 142),  // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::{ScoreBand, Theme};
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }

    /// Green for close guesses down to red for distant ones.
    pub fn score(score: u8) -> Color {
        match ScoreBand::from_score(score) {
            ScoreBand::Perfect | ScoreBand::Excellent | ScoreBand::Great => {
                Color::Rgb(158, 206, 106) // #9ECE6A
            }
            ScoreBand::Good => Color::Rgb(224, 175, 104), // #E0AF68
            ScoreBand::Fair => Color::Rgb(255, 158, 100), // #FF9E64
            ScoreBand::KeepTrying => Theme::current().accent,
        }
    }
}
