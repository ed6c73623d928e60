//! Intake screen implementation
//!
//! Collects contestant name, question count, and category before the
//! quiz starts. Field values live here only until the start transition
//! accepts them; validation failures come back as an inline message.

use crate::config::QuizSettings;
use crate::models::Category;
use crate::questions::{CategoryFilter, QuestionBank};
use crate::{MAX_NAME_LEN, QUESTION_COUNT_CHOICES};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The selectable fields on the intake form, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntakeField {
    Name,
    Count,
    Category,
}

impl IntakeField {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::Count,
            Self::Count => Self::Category,
            Self::Category => Self::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Count => Self::Name,
            Self::Category => Self::Count,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Count => "Number of Questions",
            Self::Category => "Category",
        }
    }
}

/// Configuration collected by the intake form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    /// Contestant name as typed (trimming happens in the session)
    pub name: String,
    /// Requested question count
    pub count: usize,
    /// Requested category filter
    pub category: CategoryFilter,
}

/// Events produced by the intake screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeEvent {
    /// The form was submitted
    Submit(StartRequest),
    /// The user asked to leave the application
    Quit,
}

/// Intake screen component
#[derive(Debug)]
pub struct IntakeScreen {
    name: String,
    count_index: usize,
    category_index: usize,
    categories: Vec<Category>,
    field: IntakeField,
    error: Option<String>,
    default_count_index: usize,
    default_category_index: usize,
}

impl IntakeScreen {
    /// Create an intake screen prefilled from settings
    pub fn new(settings: &QuizSettings, bank: &QuestionBank) -> Self {
        let categories = bank.categories();

        let default_count_index = QUESTION_COUNT_CHOICES
            .iter()
            .position(|c| *c == settings.default_count)
            .unwrap_or(0);

        // Index 0 is the "Any Category" sentinel
        let default_category_index = categories
            .iter()
            .position(|c| c.id == settings.default_category)
            .map(|i| i + 1)
            .unwrap_or(0);

        Self {
            name: String::new(),
            count_index: default_count_index,
            category_index: default_category_index,
            categories,
            field: IntakeField::Name,
            error: None,
            default_count_index,
            default_category_index,
        }
    }

    /// The name typed so far
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently chosen question count
    pub fn count(&self) -> usize {
        QUESTION_COUNT_CHOICES[self.count_index]
    }

    /// The currently chosen category filter
    pub fn selected_filter(&self) -> CategoryFilter {
        if self.category_index == 0 {
            CategoryFilter::Any
        } else {
            CategoryFilter::Category(self.categories[self.category_index - 1].id.clone())
        }
    }

    /// Snapshot of the form as a start request
    pub fn start_request(&self) -> StartRequest {
        StartRequest {
            name: self.name.clone(),
            count: self.count(),
            category: self.selected_filter(),
        }
    }

    /// Show a validation failure inline
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// The inline error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Return the form to its initial, settings-derived state
    pub fn reset(&mut self) {
        self.name.clear();
        self.count_index = self.default_count_index;
        self.category_index = self.default_category_index;
        self.field = IntakeField::Name;
        self.error = None;
    }

    /// Handle a key event, possibly producing an intake event
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<IntakeEvent> {
        match key.code {
            KeyCode::Esc => return Some(IntakeEvent::Quit),
            KeyCode::Enter => return Some(IntakeEvent::Submit(self.start_request())),
            KeyCode::Up | KeyCode::BackTab => self.field = self.field.previous(),
            KeyCode::Down | KeyCode::Tab => self.field = self.field.next(),
            KeyCode::Left => self.cycle_value(-1),
            KeyCode::Right => self.cycle_value(1),
            KeyCode::Backspace => {
                if self.field == IntakeField::Name {
                    self.name.pop();
                    self.error = None;
                }
            }
            KeyCode::Char(c) => {
                if self.field == IntakeField::Name && self.name.chars().count() < MAX_NAME_LEN {
                    self.name.push(c);
                    self.error = None;
                }
            }
            _ => {}
        }
        None
    }

    fn cycle_value(&mut self, step: isize) {
        match self.field {
            IntakeField::Name => {}
            IntakeField::Count => {
                self.count_index = cycle(self.count_index, QUESTION_COUNT_CHOICES.len(), step);
            }
            IntakeField::Category => {
                self.category_index = cycle(self.category_index, self.categories.len() + 1, step);
            }
        }
    }

    fn category_display(&self) -> String {
        if self.category_index == 0 {
            "Any Category".to_string()
        } else {
            self.categories[self.category_index - 1].name.clone()
        }
    }

    /// Render the intake screen
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Length(2), // Error line
                Constraint::Length(3), // Name
                Constraint::Length(3), // Count
                Constraint::Length(3), // Category
                Constraint::Min(0),    // Spacer
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        self.render_title(f, chunks[0]);
        self.render_error(f, chunks[1]);
        self.render_field(f, chunks[2], IntakeField::Name, self.name_display());
        self.render_field(f, chunks[3], IntakeField::Count, self.count().to_string());
        self.render_field(f, chunks[4], IntakeField::Category, self.category_display());
        self.render_help(f, chunks[6]);
    }

    fn name_display(&self) -> String {
        if self.field == IntakeField::Name {
            format!("{}_", self.name)
        } else if self.name.is_empty() {
            "Enter your name".to_string()
        } else {
            self.name.clone()
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(area);

        let title = Paragraph::new("RQUIZ")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Terminal Trivia Quiz")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_error(&self, f: &mut Frame, area: Rect) {
        if let Some(message) = &self.error {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            f.render_widget(error, area);
        }
    }

    fn render_field(&self, f: &mut Frame, area: Rect, field: IntakeField, value: String) {
        let active = self.field == field;
        let border_style = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        let value_style = if active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let paragraph = Paragraph::new(Span::styled(value, value_style)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.title())
                .border_style(border_style),
        );
        f.render_widget(paragraph, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "↑↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Field  "),
            Span::styled(
                "←→",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Change  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Start Quiz  "),
            Span::styled(
                "Esc",
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

fn cycle(index: usize, len: usize, step: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize + step + len) % len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn screen() -> IntakeScreen {
        IntakeScreen::new(&QuizSettings::default(), &QuestionBank::bundled().unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_state_from_settings() {
        let screen = screen();
        assert_eq!(screen.name(), "");
        assert_eq!(screen.count(), 5);
        assert_eq!(screen.selected_filter(), CategoryFilter::Any);
        assert!(screen.error().is_none());
    }

    #[test]
    fn test_settings_preselect_count_and_category() {
        let settings = QuizSettings {
            default_count: 15,
            default_category: "history".to_string(),
            ..Default::default()
        };
        let screen = IntakeScreen::new(&settings, &QuestionBank::bundled().unwrap());
        assert_eq!(screen.count(), 15);
        assert_eq!(
            screen.selected_filter(),
            CategoryFilter::Category("history".to_string())
        );
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut screen = screen();
        for c in "Asha".chars() {
            screen.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(screen.name(), "Asha");

        screen.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(screen.name(), "Ash");
    }

    #[test]
    fn test_name_length_cap() {
        let mut screen = screen();
        for _ in 0..(MAX_NAME_LEN + 10) {
            screen.handle_key_event(key(KeyCode::Char('a')));
        }
        assert_eq!(screen.name().chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut screen = screen();
        assert_eq!(screen.field, IntakeField::Name);

        screen.handle_key_event(key(KeyCode::Down));
        assert_eq!(screen.field, IntakeField::Count);
        screen.handle_key_event(key(KeyCode::Down));
        assert_eq!(screen.field, IntakeField::Category);
        screen.handle_key_event(key(KeyCode::Down));
        assert_eq!(screen.field, IntakeField::Name);

        screen.handle_key_event(key(KeyCode::Up));
        assert_eq!(screen.field, IntakeField::Category);
    }

    #[test]
    fn test_count_cycling() {
        let mut screen = screen();
        screen.handle_key_event(key(KeyCode::Down)); // Count field

        screen.handle_key_event(key(KeyCode::Right));
        assert_eq!(screen.count(), 10);
        screen.handle_key_event(key(KeyCode::Left));
        assert_eq!(screen.count(), 5);
        screen.handle_key_event(key(KeyCode::Left)); // Wraps to last choice
        assert_eq!(screen.count(), 20);
    }

    #[test]
    fn test_category_cycling_wraps_through_any() {
        let mut screen = screen();
        screen.handle_key_event(key(KeyCode::Down));
        screen.handle_key_event(key(KeyCode::Down)); // Category field

        screen.handle_key_event(key(KeyCode::Right));
        assert_ne!(screen.selected_filter(), CategoryFilter::Any);

        screen.handle_key_event(key(KeyCode::Left));
        assert_eq!(screen.selected_filter(), CategoryFilter::Any);
    }

    #[test]
    fn test_typing_only_affects_name_field() {
        let mut screen = screen();
        screen.handle_key_event(key(KeyCode::Down)); // Count field
        screen.handle_key_event(key(KeyCode::Char('x')));
        assert_eq!(screen.name(), "");
    }

    #[test]
    fn test_enter_submits_form_snapshot() {
        let mut screen = screen();
        for c in "Asha".chars() {
            screen.handle_key_event(key(KeyCode::Char(c)));
        }
        screen.handle_key_event(key(KeyCode::Down));
        screen.handle_key_event(key(KeyCode::Right)); // count 10

        let event = screen.handle_key_event(key(KeyCode::Enter));
        let Some(IntakeEvent::Submit(request)) = event else {
            panic!("expected submit event");
        };
        assert_eq!(request.name, "Asha");
        assert_eq!(request.count, 10);
        assert_eq!(request.category, CategoryFilter::Any);
    }

    #[test]
    fn test_esc_requests_quit() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Esc)),
            Some(IntakeEvent::Quit)
        );
    }

    #[test]
    fn test_typing_clears_error() {
        let mut screen = screen();
        screen.set_error("Please enter your name".to_string());
        screen.handle_key_event(key(KeyCode::Char('A')));
        assert!(screen.error().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut screen = screen();
        for c in "Asha".chars() {
            screen.handle_key_event(key(KeyCode::Char(c)));
        }
        screen.handle_key_event(key(KeyCode::Down));
        screen.handle_key_event(key(KeyCode::Right));
        screen.set_error("boom".to_string());

        screen.reset();
        assert_eq!(screen.name(), "");
        assert_eq!(screen.count(), 5);
        assert_eq!(screen.selected_filter(), CategoryFilter::Any);
        assert!(screen.error().is_none());
        assert_eq!(screen.field, IntakeField::Name);
    }
}
