//! Results screen implementation
//!
//! Shows the scored summary of a completed session with a percentage
//! gauge, a tiered feedback message, and actions to start a new quiz
//! or quit. The summary is frozen; only restart clears it.

use crate::quiz::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

/// Actions available on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    /// Discard the session and return to intake
    Restart,
    /// Leave the application
    Quit,
}

impl ResultAction {
    /// All actions in display order
    pub fn all() -> Vec<ResultAction> {
        vec![ResultAction::Restart, ResultAction::Quit]
    }

    /// Button label for the action
    pub fn display_text(&self) -> &'static str {
        match self {
            ResultAction::Restart => "Start New Quiz",
            ResultAction::Quit => "Quit",
        }
    }
}

/// Results screen component
#[derive(Debug)]
pub struct ResultsScreen {
    /// Index into `ResultAction::all()`
    selected_action: usize,
}

impl ResultsScreen {
    /// Create a new results screen with Restart highlighted
    pub fn new() -> Self {
        Self { selected_action: 0 }
    }

    /// The currently highlighted action
    pub fn selected_action(&self) -> ResultAction {
        ResultAction::all()[self.selected_action]
    }

    /// Move the highlight to the next action, wrapping
    pub fn select_next_action(&mut self) {
        let count = ResultAction::all().len();
        self.selected_action = (self.selected_action + 1) % count;
    }

    /// Move the highlight to the previous action, wrapping
    pub fn select_previous_action(&mut self) {
        let count = ResultAction::all().len();
        self.selected_action = if self.selected_action == 0 {
            count - 1
        } else {
            self.selected_action - 1
        };
    }

    /// Restore the default highlight
    pub fn reset(&mut self) {
        self.selected_action = 0;
    }

    /// Render the results screen from the session's frozen summary
    pub fn render(&self, f: &mut Frame, session: &Session) {
        let Some(summary) = session.summary() else {
            let area = f.size();
            self.render_no_summary(f, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Greeting and feedback
                Constraint::Length(3), // Percentage gauge
                Constraint::Min(6),    // Score table
                Constraint::Length(3), // Action buttons
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        self.render_greeting(f, chunks[0], &summary);
        self.render_gauge(f, chunks[1], &summary);
        self.render_table(f, chunks[2], &summary);
        self.render_actions(f, chunks[3]);
        self.render_help(f, chunks[4]);
    }

    fn render_no_summary(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from("No completed quiz to show"),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to return to the start",
                Style::default().fg(Color::Yellow),
            )),
        ];
        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title("Results")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(paragraph, area);
    }

    fn render_greeting(&self, f: &mut Frame, area: Rect, summary: &crate::models::SessionSummary) {
        let text = vec![
            Line::from(Span::styled(
                format!("Quiz complete, {}!", summary.name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                summary.feedback(),
                Style::default().fg(Color::Yellow),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Results"));
        f.render_widget(paragraph, area);
    }

    fn render_gauge(&self, f: &mut Frame, area: Rect, summary: &crate::models::SessionSummary) {
        let percent = summary.percentage();
        let color = match percent {
            70..=100 => Color::Green,
            40..=69 => Color::Yellow,
            _ => Color::Red,
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Score"))
            .gauge_style(Style::default().fg(color))
            .percent(u16::from(percent))
            .label(format!("{}%", percent));
        f.render_widget(gauge, area);
    }

    fn render_table(&self, f: &mut Frame, area: Rect, summary: &crate::models::SessionSummary) {
        let rows = vec![
            Row::new(vec![
                Cell::from("Questions answered"),
                Cell::from(summary.total.to_string()),
            ]),
            Row::new(vec![
                Cell::from("Correct"),
                Cell::from(summary.score.to_string())
                    .style(Style::default().fg(Color::Green)),
            ]),
            Row::new(vec![
                Cell::from("Incorrect"),
                Cell::from(summary.incorrect().to_string())
                    .style(Style::default().fg(Color::Red)),
            ]),
            Row::new(vec![
                Cell::from("Finished at"),
                Cell::from(summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            ]),
        ];

        let table = Table::new(
            rows,
            [Constraint::Percentage(50), Constraint::Percentage(50)],
        )
        .block(Block::default().borders(Borders::ALL).title("Breakdown"));
        f.render_widget(table, area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect) {
        let actions = ResultAction::all();
        let mut spans = vec![Span::raw("  ")];
        for (i, action) in actions.iter().enumerate() {
            let style = if i == self.selected_action {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", action.display_text()), style));
            spans.push(Span::raw("   "));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "←→",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Choose  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Confirm  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" New Quiz  "),
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

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_action_is_restart() {
        let screen = ResultsScreen::new();
        assert_eq!(screen.selected_action(), ResultAction::Restart);
    }

    #[test]
    fn test_action_selection_wraps() {
        let mut screen = ResultsScreen::new();

        screen.select_next_action();
        assert_eq!(screen.selected_action(), ResultAction::Quit);
        screen.select_next_action();
        assert_eq!(screen.selected_action(), ResultAction::Restart);

        screen.select_previous_action();
        assert_eq!(screen.selected_action(), ResultAction::Quit);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut screen = ResultsScreen::new();
        screen.select_next_action();
        screen.reset();
        assert_eq!(screen.selected_action(), ResultAction::Restart);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(ResultAction::Restart.display_text(), "Start New Quiz");
        assert_eq!(ResultAction::Quit.display_text(), "Quit");
    }

    #[test]
    fn test_all_actions_in_order() {
        assert_eq!(
            ResultAction::all(),
            vec![ResultAction::Restart, ResultAction::Quit]
        );
    }
}
