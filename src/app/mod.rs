//! TUI application module
//!
//! Contains the terminal user interface components, keyboard input
//! mapping, and the application controller driving the session.

pub mod app;
pub mod input;
pub mod screens;
pub mod tui;

pub use app::App;
pub use input::NavigationAction;
pub use screens::{IntakeEvent, IntakeScreen, QuizScreen, ResultAction, ResultsScreen, StartRequest};
pub use tui::Tui;
