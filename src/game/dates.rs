//! Calendar helpers for daily prompts.
//!
//! Prompts are keyed by local calendar date. Players may open any past date
//! but never a future one.

use chrono::{Local, NaiveDate};

use super::error::GameError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, GameError> {
    let input = input.trim();
    let well_formed = input.len() == 10
        && input.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });

    if !well_formed {
        return Err(GameError::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| GameError::InvalidDate(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

pub fn validate_date_access(date: NaiveDate, today: NaiveDate) -> Result<(), GameError> {
    if is_future(date, today) {
        return Err(GameError::FutureDate(date));
    }
    Ok(())
}
