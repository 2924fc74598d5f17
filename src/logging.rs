//! Tracing setup.
//!
//! The TUI owns stdout, so events go to a log file. The filter comes from
//! `PREDICTLE_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PREDICTLE_LOG";
const DEFAULT_FILTER: &str = "warn";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot install subscriber: {0}")]
    Install(String),
}

pub fn init(log_file: &Path) -> Result<(), LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_install_error() {
        let path = std::env::temp_dir().join(format!("predictle-log-{}.log", std::process::id()));

        assert!(init(&path).is_ok());
        assert!(path.exists());
        assert!(matches!(init(&path), Err(LoggingError::Install(_))));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unopenable_log_file_is_io_error() {
        let dir = std::env::temp_dir();
        assert!(matches!(init(&dir), Err(LoggingError::Io(_))));
    }
}
