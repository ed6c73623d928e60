//! Settings management module
//!
//! Handles loading, saving, and validation of user preferences that
//! prefill the intake screen and select the question dataset.

use crate::quiz::AnswerPolicy;
use crate::{QuizError, Result, APP_NAME, CONFIG_FILE, QUESTION_COUNT_CHOICES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User preferences loaded at startup
///
/// All fields have defaults; a missing settings file is not an error.
/// The app only reads this file during normal play; nothing is written
/// back between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Question count preselected on the intake screen
    pub default_count: usize,
    /// Category key preselected on the intake screen ("any" for all)
    pub default_category: String,
    /// Whether resubmitting an answered question overwrites the answer
    pub allow_revision: bool,
    /// Optional questions file replacing the bundled dataset
    pub questions_file: Option<PathBuf>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            default_count: 5,
            default_category: "any".to_string(),
            allow_revision: true,
            questions_file: None,
        }
    }
}

impl QuizSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the settings values
    pub fn validate(&self) -> Result<()> {
        if !QUESTION_COUNT_CHOICES.contains(&self.default_count) {
            return Err(QuizError::ConfigError(format!(
                "default_count must be one of {:?}, got {}",
                QUESTION_COUNT_CHOICES, self.default_count
            )));
        }

        if self.default_category.trim().is_empty() {
            return Err(QuizError::ConfigError(
                "default_category must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The answer-revision policy these settings select
    pub fn answer_policy(&self) -> AnswerPolicy {
        if self.allow_revision {
            AnswerPolicy::AllowRevision
        } else {
            AnswerPolicy::LockFirst
        }
    }

    /// Load settings from the standard file location
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load settings from an explicit file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the standard file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let path = Self::config_file_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::ConfigError(format!(
                    "Failed to create settings directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to write settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Standard settings file path under the platform config directory
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
