//! Quiz session module
//!
//! Contains the session state machine owning all quiz-attempt state and
//! the answer-set builder that fixes each question's option order.

pub mod session;
pub mod shuffle;

pub use session::{AnswerPolicy, Screen, Session, StartError, SubmitOutcome};
pub use shuffle::{build_answer_set, realize_question};
