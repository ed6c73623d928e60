//! Session summary model
//!
//! Holds the scored outcome of a completed quiz session along with the
//! derived percentage and tiered feedback message for the results screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scored outcome of one completed quiz session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// When the last answer was recorded
    pub finished_at: DateTime<Utc>,
    /// Contestant name from the intake screen
    pub name: String,
    /// Number of correct answers
    pub score: usize,
    /// Number of questions in the working list
    pub total: usize,
}

impl SessionSummary {
    /// Create a summary timestamped now
    pub fn new(name: String, score: usize, total: usize) -> Self {
        Self {
            finished_at: Utc::now(),
            name,
            score,
            total,
        }
    }

    /// Score as a whole percentage, rounded to the nearest percent
    pub fn percentage(&self) -> u8 {
        crate::util::format::format_percent(self.score, self.total)
    }

    /// Number of incorrect answers
    pub fn incorrect(&self) -> usize {
        self.total.saturating_sub(self.score)
    }

    /// Feedback message for the achieved percentage tier
    pub fn feedback(&self) -> &'static str {
        match self.percentage() {
            90..=100 => "Outstanding! You're a quiz master!",
            70..=89 => "Great job! You know your stuff!",
            50..=69 => "Good effort! Keep learning!",
            30..=49 => "Nice try! You'll do better next time!",
            _ => "Don't worry, we all start somewhere!",
        }
    }
}
