//! Active-quiz screen implementation
//!
//! Displays one question at a time with its fixed answer-set, a progress
//! gauge, and correctness feedback. The displayed index is local to the
//! screen and only advances after the session confirms an answer was
//! recorded; correctness colors appear strictly after submission.

use crate::quiz::Session;
use crate::util::format::{option_label, progress_label};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Active-quiz screen component
#[derive(Debug, Default)]
pub struct QuizScreen {
    /// Index of the currently displayed question
    index: usize,
    /// Locally highlighted option, before submission
    selected: Option<usize>,
    /// Whether the displayed question's answer has been submitted
    submitted: bool,
}

impl QuizScreen {
    /// Create a new quiz screen at the first question
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the currently displayed question
    pub fn index(&self) -> usize {
        self.index
    }

    /// The locally highlighted option, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the displayed question has been submitted
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether another question follows the displayed one
    pub fn has_next(&self, total: usize) -> bool {
        self.index + 1 < total
    }

    /// Move the highlight up, wrapping
    pub fn select_previous(&mut self, option_count: usize) {
        if self.submitted || option_count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => option_count - 1,
            Some(i) => i - 1,
        });
    }

    /// Move the highlight down, wrapping
    pub fn select_next(&mut self, option_count: usize) {
        if self.submitted || option_count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) if i + 1 >= option_count => 0,
            Some(i) => i + 1,
        });
    }

    /// Lock the displayed question after its answer was recorded
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Advance to the next question after the session confirmed the answer
    pub fn advance(&mut self, total: usize) {
        if self.index + 1 < total {
            self.index += 1;
            self.selected = None;
            self.submitted = false;
        }
    }

    /// Return to the first question with nothing highlighted
    pub fn reset(&mut self) {
        self.index = 0;
        self.selected = None;
        self.submitted = false;
    }

    /// Render the quiz screen from the session's working list
    pub fn render(&self, f: &mut Frame, session: &Session) {
        let questions = session.questions();
        let Some(question) = questions.get(self.index) else {
            let area = f.size();
            self.render_no_question(f, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Progress gauge
                Constraint::Length(5), // Question prompt
                Constraint::Min(6),    // Answer options
                Constraint::Length(3), // Feedback line
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        self.render_progress(f, chunks[0], questions.len());
        self.render_prompt(f, chunks[1], question);
        self.render_options(f, chunks[2], question);
        self.render_feedback(f, chunks[3], question);
        self.render_help(f, chunks[4]);
    }

    fn render_no_question(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from("No question to display"),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to return to the start",
                Style::default().fg(Color::Yellow),
            )),
        ];
        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title("Quiz")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(paragraph, area);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, total: usize) {
        let ratio = if total == 0 {
            0.0
        } else {
            (self.index + 1) as f64 / total as f64
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .label(progress_label(self.index, total))
            .ratio(ratio);
        f.render_widget(gauge, area);
    }

    fn render_prompt(&self, f: &mut Frame, area: Rect, question: &crate::models::Question) {
        let title = match &question.difficulty {
            Some(difficulty) => format!(
                "{} ({})",
                crate::questions::category_label(&question.category),
                difficulty
            ),
            None => crate::questions::category_label(&question.category),
        };
        let prompt = Paragraph::new(question.prompt.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(prompt, area);
    }

    fn render_options(&self, f: &mut Frame, area: Rect, question: &crate::models::Question) {
        let items: Vec<ListItem> = question
            .answers
            .iter()
            .enumerate()
            .map(|(i, answer)| {
                let style = self.option_style(i, answer, question);
                let line = Line::from(vec![
                    Span::raw(format!(" {}) ", option_label(i))),
                    Span::raw(answer.as_str()),
                ]);
                ListItem::new(line).style(style)
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Answers"));
        f.render_widget(list, area);
    }

    fn option_style(&self, index: usize, answer: &str, question: &crate::models::Question) -> Style {
        let is_selected = self.selected == Some(index);

        if self.submitted {
            // Correctness is revealed only once the answer is in
            if answer == question.correct_answer {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else if is_selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        }
    }

    fn render_feedback(&self, f: &mut Frame, area: Rect, question: &crate::models::Question) {
        let (text, style) = if !self.submitted {
            (
                "Select an answer".to_string(),
                Style::default().fg(Color::Gray),
            )
        } else {
            let correct = self
                .selected
                .and_then(|i| question.answers.get(i))
                .map(|a| question.is_correct(a))
                .unwrap_or(false);
            if correct {
                ("Correct!".to_string(), Style::default().fg(Color::Green))
            } else {
                (
                    format!("Incorrect - the answer is {}", question.correct_answer),
                    Style::default().fg(Color::Red),
                )
            }
        };

        let feedback = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(feedback, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "↑↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Select  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Submit/Next  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Restart  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let screen = QuizScreen::new();
        assert_eq!(screen.index(), 0);
        assert_eq!(screen.selected(), None);
        assert!(!screen.is_submitted());
    }

    #[test]
    fn test_selection_wraps() {
        let mut screen = QuizScreen::new();

        screen.select_next(4);
        assert_eq!(screen.selected(), Some(0));
        screen.select_next(4);
        assert_eq!(screen.selected(), Some(1));

        screen.select_previous(4);
        screen.select_previous(4);
        assert_eq!(screen.selected(), Some(3)); // Wrapped to last

        screen.select_next(4);
        assert_eq!(screen.selected(), Some(0)); // Wrapped to first
    }

    #[test]
    fn test_selection_frozen_after_submission() {
        let mut screen = QuizScreen::new();
        screen.select_next(4);
        screen.mark_submitted();

        screen.select_next(4);
        screen.select_previous(4);
        assert_eq!(screen.selected(), Some(0));
    }

    #[test]
    fn test_selection_with_no_options() {
        let mut screen = QuizScreen::new();
        screen.select_next(0);
        screen.select_previous(0);
        assert_eq!(screen.selected(), None);
    }

    #[test]
    fn test_advance_clears_per_question_state() {
        let mut screen = QuizScreen::new();
        screen.select_next(4);
        screen.mark_submitted();

        screen.advance(5);
        assert_eq!(screen.index(), 1);
        assert_eq!(screen.selected(), None);
        assert!(!screen.is_submitted());
    }

    #[test]
    fn test_advance_clamped_at_last_question() {
        let mut screen = QuizScreen::new();
        screen.advance(2);
        assert_eq!(screen.index(), 1);
        screen.advance(2);
        assert_eq!(screen.index(), 1);
    }

    #[test]
    fn test_has_next() {
        let mut screen = QuizScreen::new();
        assert!(screen.has_next(2));
        screen.advance(2);
        assert!(!screen.has_next(2));
    }

    #[test]
    fn test_reset() {
        let mut screen = QuizScreen::new();
        screen.select_next(4);
        screen.mark_submitted();
        screen.advance(5);

        screen.reset();
        assert_eq!(screen.index(), 0);
        assert_eq!(screen.selected(), None);
        assert!(!screen.is_submitted());
    }
}
