//! Keyboard input mapping
//!
//! Translates crossterm key events into navigation actions for the
//! quiz and results screens. The intake screen consumes raw key events
//! instead, since it needs character input for the name field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Navigation actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back (Esc)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Convert a keyboard event to a navigation action
pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            NavigationAction::Quit
        }

        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
        KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

        KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,
        KeyCode::Esc => NavigationAction::Back,

        _ => NavigationAction::None,
    }
}

/// Check for Ctrl+C, honored on every screen
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
