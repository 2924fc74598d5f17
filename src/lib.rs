//! Guess what a language model answered, and get scored on how close you were.
//!
//! The scoring engine lives in [`engine`] and [`text`] and is pure; the rest
//! of the crate is the terminal game built around it.

pub mod app;
pub mod engine;
pub mod game;
pub mod input;
pub mod logging;
pub mod text;
pub mod ui;

pub use engine::{score, ScoreError, Scorer};
