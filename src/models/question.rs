//! Question and answer data models
//!
//! Contains the question record realized for one quiz session, the
//! recorded answer, and the category listing entry.

use serde::{Deserialize, Serialize};

/// A question realized for one session's working list
///
/// Built from a dataset record at session start; `answers` holds the
/// incorrect answers plus the correct one in a shuffled order that is
/// fixed for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within a session's working list
    pub id: String,
    /// Category key from the dataset
    pub category: String,
    /// Prompt text shown to the contestant
    pub prompt: String,
    /// The single correct answer text
    pub correct_answer: String,
    /// Incorrect answer texts (typically 3)
    pub incorrect_answers: Vec<String>,
    /// Optional difficulty tag carried over from the dataset
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Full selectable answer-set, shuffled once at session start
    pub answers: Vec<String>,
}

impl Question {
    /// Check a selected answer against the correct one by exact equality
    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }
}

/// A contestant's recorded response to one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Identifier of the answered question
    pub question_id: String,
    /// The answer text the contestant selected
    pub selected_answer: String,
    /// Whether the selection matched the correct answer, computed at submission
    pub is_correct: bool,
}

/// A category listing entry shown on the intake screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category key used for filtering
    pub id: String,
    /// Human-readable display name
    pub name: String,
}
