//! RQUIZ - Terminal Trivia Quiz
//!
//! A TUI application for running a single-session multiple-choice quiz
//! over a bundled question dataset, with per-category selection and a
//! scored results summary.

use std::fmt;
use std::time::Duration;

// Public re-exports
pub mod app;
pub mod config;
pub mod models;
pub mod questions;
pub mod quiz;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum QuizError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Settings validation or parsing error
    ConfigError(String),
    /// Question dataset loading or decoding error
    DatasetError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::IoError(err) => write!(f, "I/O error: {}", err),
            QuizError::ConfigError(msg) => write!(f, "Settings error: {}", msg),
            QuizError::DatasetError(msg) => write!(f, "Dataset error: {}", msg),
            QuizError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::IoError(err)
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::DatasetError(format!("JSON decoding error: {}", err))
    }
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuizError {
    fn from(err: toml::ser::Error) -> Self {
        QuizError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for RQUIZ operations
pub type Result<T> = std::result::Result<T, QuizError>;

// Common types and constants
pub const APP_NAME: &str = "rquiz";
pub const CONFIG_FILE: &str = "rquiz.toml";

/// Question counts offered on the intake screen
pub const QUESTION_COUNT_CHOICES: [usize; 4] = [5, 10, 15, 20];

/// Cosmetic pause between answer feedback and the next question
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1000);

/// Maximum accepted contestant name length, in characters
pub const MAX_NAME_LEN: usize = 32;
