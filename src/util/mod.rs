//! Utility module
//!
//! Formatting helpers shared by the TUI screens.

pub mod format;
