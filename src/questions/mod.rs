//! Question source module
//!
//! Loads the read-only question dataset (bundled into the binary, or
//! from a settings-supplied file) and exposes pure category filtering
//! and bounded selection over it.

use crate::config::QuizSettings;
use crate::models::Category;
use crate::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Question dataset compiled into the binary
const BUNDLED_QUESTIONS: &str = include_str!("../data/questions.json");

/// Display names for the bundled category identifiers
///
/// This is the static backing of the category listing; an earlier
/// revision fetched the same `{id, name}` pairs from a remote endpoint.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("science", "Science"),
    ("geography", "Geography"),
    ("history", "History"),
    ("music", "Music"),
    ("film_and_tv", "Film & TV"),
    ("sport_and_leisure", "Sport & Leisure"),
    ("general_knowledge", "General Knowledge"),
];

/// Sentinel category key that matches every record
pub const ANY_CATEGORY: &str = "any";

/// One pre-authored question as stored in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Unique identifier within the dataset
    pub id: String,
    /// Category key, matched exactly when filtering
    pub category: String,
    /// Prompt text
    pub question: String,
    /// The single correct answer text
    pub correct_answer: String,
    /// Incorrect answer texts
    pub incorrect_answers: Vec<String>,
    /// Optional difficulty tag, shown on the quiz screen when present
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Category filter applied when selecting questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every record
    Any,
    /// Match records whose category equals the key exactly
    Category(String),
}

impl CategoryFilter {
    /// Parse a category key, mapping the `"any"` sentinel to `Any`
    pub fn parse(key: &str) -> Self {
        if key == ANY_CATEGORY {
            Self::Any
        } else {
            Self::Category(key.to_string())
        }
    }

    /// Check whether a record category passes this filter
    ///
    /// Matching is exact and case-sensitive; no fuzzy matching.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Category(key) => key == category,
        }
    }

    /// Display label for the filter
    pub fn label(&self) -> String {
        match self {
            Self::Any => "Any Category".to_string(),
            Self::Category(key) => category_label(key),
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::Any
    }
}

/// Display name for a category key, falling back to the key itself
pub fn category_label(key: &str) -> String {
    CATEGORY_LABELS
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Read-only question dataset loaded wholesale at startup
#[derive(Debug, Clone)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Load the dataset bundled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_QUESTIONS, "bundled dataset")
    }

    /// Load a dataset of the same shape from a file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::DatasetError(format!(
                "Failed to read questions file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    /// Load the dataset named by the settings, or the bundled one
    pub fn load(settings: &QuizSettings) -> Result<Self> {
        match &settings.questions_file {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    fn from_json(json: &str, origin: &str) -> Result<Self> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)
            .map_err(|e| QuizError::DatasetError(format!("Failed to decode {}: {}", origin, e)))?;

        if records.is_empty() {
            return Err(QuizError::DatasetError(format!(
                "{} contains no questions",
                origin
            )));
        }

        Ok(Self { records })
    }

    /// Select a bounded, ordered subset of the dataset
    ///
    /// Filters by exact category equality, then returns a prefix of the
    /// surviving pool of length `min(count, pool len)`. Question order is
    /// whatever the dataset provides; no shuffling. A filter matching
    /// nothing yields an empty list.
    pub fn select(&self, filter: &CategoryFilter, count: usize) -> Vec<QuestionRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(&record.category))
            .take(count)
            .cloned()
            .collect()
    }

    /// Ordered distinct category listing derived from the dataset
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for record in &self.records {
            if !categories.iter().any(|c| c.id == record.category) {
                categories.push(Category {
                    id: record.category.clone(),
                    name: category_label(&record.category),
                });
            }
        }
        categories
    }

    /// Total number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
