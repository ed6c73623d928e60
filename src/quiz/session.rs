//! Quiz session state machine
//!
//! Owns all session data (contestant identity, configuration, working
//! question list, recorded answers, score) and the current screen, and
//! mediates every transition between screens. Screens never mutate the
//! session directly; all changes flow through `start`, `submit_answer`,
//! and `restart`.

use crate::models::{Answer, Question, SessionSummary};
use crate::questions::{CategoryFilter, QuestionBank};
use crate::quiz::shuffle::realize_question;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;

/// The three mutually exclusive presentation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Intake form collecting name, count, and category
    #[default]
    Intake,
    /// One-question-at-a-time answering
    Active,
    /// Scored summary, frozen until restart
    Results,
}

/// Policy for resubmitting an answer to an already-answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPolicy {
    /// A later submission for the same question overwrites the earlier one
    #[default]
    AllowRevision,
    /// The first recorded answer is final; later submissions are ignored
    LockFirst,
}

/// Validation failure reported by the `start` transition
///
/// The session state is unchanged when `start` fails; the intake screen
/// surfaces the message inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// Name was empty after trimming whitespace
    EmptyName,
    /// The category filter matched no questions
    NoQuestions {
        /// Display label of the rejected filter
        category: String,
    },
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::EmptyName => write!(f, "Please enter your name"),
            StartError::NoQuestions { category } => {
                write!(f, "No questions available for {}", category)
            }
        }
    }
}

impl std::error::Error for StartError {}

/// Result of a `submit_answer` transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer was recorded (or revised); more questions remain
    Recorded {
        /// Whether the selection matched the correct answer
        is_correct: bool,
    },
    /// The last distinct question was answered; session is now in `Results`
    Completed {
        /// Count of correct answers across the session
        score: usize,
    },
    /// The submission was a no-op: wrong screen, unknown question id, or
    /// a locked answer under `AnswerPolicy::LockFirst`
    Ignored,
}

/// Aggregate root holding all state for one quiz attempt
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    name: String,
    requested_count: usize,
    category: CategoryFilter,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    score: usize,
    policy: AnswerPolicy,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session in the initial intake state
    pub fn new() -> Self {
        Self::with_policy(AnswerPolicy::default())
    }

    /// Create a session with an explicit answer-revision policy
    pub fn with_policy(policy: AnswerPolicy) -> Self {
        Self {
            screen: Screen::Intake,
            name: String::new(),
            requested_count: 0,
            category: CategoryFilter::Any,
            questions: Vec::new(),
            answers: Vec::new(),
            score: 0,
            policy,
            finished_at: None,
        }
    }

    /// Current presentation state
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Contestant name, empty until `start` succeeds
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Question count requested on the intake screen
    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    /// Category filter requested on the intake screen
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// The realized working question list
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question in the working list by id
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Answers recorded so far, at most one per question id
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// The recorded answer for a question, if any
    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    /// Count of correct answers, computed when the session completes
    pub fn score(&self) -> usize {
        self.score
    }

    /// The configured answer-revision policy
    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    /// Begin a quiz attempt: validate, realize the working list, enter `Active`
    ///
    /// Rejects an empty (after trimming) name and a filter that matches no
    /// questions; in both cases the session is left untouched. A pool
    /// smaller than `count` proceeds with the shorter list.
    pub fn start<R: Rng>(
        &mut self,
        name: &str,
        count: usize,
        category: CategoryFilter,
        bank: &QuestionBank,
        rng: &mut R,
    ) -> Result<(), StartError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(StartError::EmptyName);
        }

        let records = bank.select(&category, count);
        if records.is_empty() {
            return Err(StartError::NoQuestions {
                category: category.label(),
            });
        }

        self.name = trimmed.to_string();
        self.requested_count = count;
        self.category = category;
        self.questions = records
            .into_iter()
            .map(|record| realize_question(record, rng))
            .collect();
        self.answers.clear();
        self.score = 0;
        self.finished_at = None;
        self.screen = Screen::Active;
        Ok(())
    }

    /// Record one answer; completes the session after the last distinct one
    ///
    /// Submissions outside `Active` and submissions for ids not in the
    /// working list are silent no-ops. Correctness is exact string equality
    /// with the question's correct answer.
    pub fn submit_answer(&mut self, question_id: &str, selected: &str) -> SubmitOutcome {
        if self.screen != Screen::Active {
            return SubmitOutcome::Ignored;
        }

        let Some(question) = self.questions.iter().find(|q| q.id == question_id) else {
            return SubmitOutcome::Ignored;
        };

        let is_correct = question.is_correct(selected);
        let answer = Answer {
            question_id: question_id.to_string(),
            selected_answer: selected.to_string(),
            is_correct,
        };

        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == question_id)
        {
            Some(existing) => {
                if self.policy == AnswerPolicy::LockFirst {
                    return SubmitOutcome::Ignored;
                }
                *existing = answer;
            }
            None => self.answers.push(answer),
        }

        if self.answers.len() == self.questions.len() {
            self.score = self.answers.iter().filter(|a| a.is_correct).count();
            self.finished_at = Some(Utc::now());
            self.screen = Screen::Results;
            SubmitOutcome::Completed { score: self.score }
        } else {
            SubmitOutcome::Recorded { is_correct }
        }
    }

    /// Discard the attempt entirely and return to the initial intake shape
    pub fn restart(&mut self) {
        *self = Session::with_policy(self.policy);
    }

    /// Scored summary, available once the session is in `Results`
    pub fn summary(&self) -> Option<SessionSummary> {
        if self.screen != Screen::Results {
            return None;
        }
        Some(SessionSummary {
            finished_at: self.finished_at.unwrap_or_else(Utc::now),
            name: self.name.clone(),
            score: self.score,
            total: self.questions.len(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
