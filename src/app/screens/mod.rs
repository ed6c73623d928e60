//! TUI screen components
//!
//! Contains individual screen implementations for the three session
//! states. Screens render session slices and collect input; every
//! mutation goes back through the session's transitions.

pub mod intake;
pub mod quiz;
pub mod results;

pub use intake::{IntakeEvent, IntakeScreen, StartRequest};
pub use quiz::QuizScreen;
pub use results::{ResultAction, ResultsScreen};
