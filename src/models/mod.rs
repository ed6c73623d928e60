//! Data models module
//!
//! Contains the question, answer, and category records plus the
//! results summary computed at session completion.

pub mod question;
pub mod summary;

// Re-export commonly used types
pub use question::{Answer, Category, Question};
pub use summary::SessionSummary;
