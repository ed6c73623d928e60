//! Display formatting utilities
//!
//! Provides functions for rendering scores, option labels, and progress
//! text on the quiz and results screens.

/// Score as a whole percentage, rounded to the nearest percent
///
/// # Examples
/// ```
/// use rquiz::util::format::format_percent;
///
/// assert_eq!(format_percent(4, 5), 80);
/// assert_eq!(format_percent(1, 3), 33);
/// assert_eq!(format_percent(0, 0), 0);
/// ```
pub fn format_percent(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u8
}

/// Letter label for an answer option by position
///
/// Positions beyond 'Z' wrap around; the dataset never gets close.
///
/// # Examples
/// ```
/// use rquiz::util::format::option_label;
///
/// assert_eq!(option_label(0), 'A');
/// assert_eq!(option_label(3), 'D');
/// ```
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Progress text for the quiz screen, 1-based
///
/// # Examples
/// ```
/// use rquiz::util::format::progress_label;
///
/// assert_eq!(progress_label(2, 10), "Question 3 of 10");
/// ```
pub fn progress_label(index: usize, total: usize) -> String {
    format!("Question {} of {}", index + 1, total)
}
