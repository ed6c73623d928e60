//! Application controller
//!
//! Owns the terminal, settings, question bank, and session, and drives
//! the event loop: draw the screen for the current session state, poll
//! for input, and dispatch key events to the active screen. A recorded
//! answer schedules a delayed advance over an mpsc channel so the
//! feedback colors stay visible before the next question appears.

use crate::app::input::{is_interrupt, key_to_navigation, NavigationAction};
use crate::app::screens::{IntakeEvent, IntakeScreen, QuizScreen, ResultAction, ResultsScreen};
use crate::app::tui::Tui;
use crate::config::QuizSettings;
use crate::questions::QuestionBank;
use crate::quiz::{Screen, Session, SubmitOutcome};
use crate::{Result, ADVANCE_DELAY};
use crossterm::event::KeyEvent;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

/// Main application controller
pub struct App {
    tui: Tui,
    settings: QuizSettings,
    bank: QuestionBank,
    session: Session,
    rng: SmallRng,
    intake_screen: IntakeScreen,
    quiz_screen: QuizScreen,
    results_screen: ResultsScreen,
    /// Pending delayed advance after a recorded answer
    advance_rx: Option<mpsc::Receiver<()>>,
    should_quit: bool,
}

impl App {
    /// Create a new application from settings and the question dataset
    pub fn new() -> Result<Self> {
        let settings = QuizSettings::load()?;
        let bank = QuestionBank::load(&settings)?;
        let session = Session::with_policy(settings.answer_policy());
        let intake_screen = IntakeScreen::new(&settings, &bank);

        Ok(Self {
            tui: Tui::new()?,
            settings,
            bank,
            session,
            rng: SmallRng::from_entropy(),
            intake_screen,
            quiz_screen: QuizScreen::new(),
            results_screen: ResultsScreen::new(),
            advance_rx: None,
            should_quit: false,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// The loaded settings
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Run the main event loop until quit
    pub async fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.poll_advance();
            self.draw()?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Move to the next question if the advance delay has elapsed
    fn poll_advance(&mut self) {
        let Some(rx) = &mut self.advance_rx else {
            return;
        };
        if rx.try_recv().is_ok() {
            self.advance_rx = None;
            self.quiz_screen.advance(self.session.questions().len());
        }
    }

    fn draw(&mut self) -> Result<()> {
        let session = &self.session;
        let intake_screen = &self.intake_screen;
        let quiz_screen = &self.quiz_screen;
        let results_screen = &self.results_screen;

        self.tui.draw(|f| match session.screen() {
            Screen::Intake => intake_screen.render(f),
            Screen::Active => quiz_screen.render(f, session),
            Screen::Results => results_screen.render(f, session),
        })?;
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        let Some(key) = self.tui.handle_events()? else {
            return Ok(());
        };

        if is_interrupt(key) {
            self.should_quit = true;
            return Ok(());
        }

        match self.session.screen() {
            Screen::Intake => self.handle_intake_key(key),
            Screen::Active => self.handle_quiz_key(key),
            Screen::Results => self.handle_results_key(key),
        }
        Ok(())
    }

    fn handle_intake_key(&mut self, key: KeyEvent) {
        match self.intake_screen.handle_key_event(key) {
            Some(IntakeEvent::Submit(request)) => {
                let result = self.session.start(
                    &request.name,
                    request.count,
                    request.category,
                    &self.bank,
                    &mut self.rng,
                );
                match result {
                    Ok(()) => {
                        self.quiz_screen.reset();
                        self.advance_rx = None;
                    }
                    Err(e) => self.intake_screen.set_error(e.to_string()),
                }
            }
            Some(IntakeEvent::Quit) => self.should_quit = true,
            None => {}
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        let total = self.session.questions().len();
        let option_count = self
            .session
            .questions()
            .get(self.quiz_screen.index())
            .map(|q| q.answers.len())
            .unwrap_or(0);

        match key_to_navigation(key) {
            NavigationAction::Quit => self.should_quit = true,
            NavigationAction::Back => self.reset_to_intake(),
            NavigationAction::Up => self.quiz_screen.select_previous(option_count),
            NavigationAction::Down => self.quiz_screen.select_next(option_count),
            NavigationAction::Select => {
                if self.quiz_screen.is_submitted() {
                    // Skip the remaining delay and move on immediately
                    if self.quiz_screen.has_next(total) {
                        self.advance_rx = None;
                        self.quiz_screen.advance(total);
                    }
                } else {
                    self.submit_selected_answer();
                }
            }
            _ => {}
        }
    }

    fn submit_selected_answer(&mut self) {
        let Some(selected) = self.quiz_screen.selected() else {
            return;
        };
        let Some(question) = self.session.questions().get(self.quiz_screen.index()) else {
            return;
        };
        let Some(answer) = question.answers.get(selected) else {
            return;
        };
        let question_id = question.id.clone();
        let answer = answer.clone();

        match self.session.submit_answer(&question_id, &answer) {
            SubmitOutcome::Recorded { .. } => {
                self.quiz_screen.mark_submitted();
                self.schedule_advance();
            }
            SubmitOutcome::Completed { .. } => {
                // The session is in Results now; the next draw shows them
                self.quiz_screen.mark_submitted();
                self.results_screen.reset();
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Deliver one advance signal after the feedback delay
    fn schedule_advance(&mut self) {
        let (tx, rx) = mpsc::channel(1);
        self.advance_rx = Some(rx);
        tokio::spawn(async move {
            tokio::time::sleep(ADVANCE_DELAY).await;
            let _ = tx.send(()).await;
        });
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key_to_navigation(key) {
            NavigationAction::Quit => self.should_quit = true,
            NavigationAction::Back => self.reset_to_intake(),
            NavigationAction::Left | NavigationAction::Up => {
                self.results_screen.select_previous_action();
            }
            NavigationAction::Right | NavigationAction::Down => {
                self.results_screen.select_next_action();
            }
            NavigationAction::Select => match self.results_screen.selected_action() {
                ResultAction::Restart => self.reset_to_intake(),
                ResultAction::Quit => self.should_quit = true,
            },
            _ => {}
        }
    }

    /// Discard the session and return every screen to its initial shape
    fn reset_to_intake(&mut self) {
        self.session.restart();
        self.quiz_screen.reset();
        self.results_screen.reset();
        self.intake_screen.reset();
        self.advance_rx = None;
    }
}
