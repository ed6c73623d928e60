//! End-to-end session flow tests exercising the public crate API:
//! dataset loading, the start transition, answer submission, scoring,
//! and restart, without a terminal.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rquiz::models::Question;
use rquiz::questions::{CategoryFilter, QuestionBank};
use rquiz::quiz::{AnswerPolicy, Screen, Session, StartError, SubmitOutcome};

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

#[test]
fn test_complete_quiz_journey() {
    let bank = QuestionBank::bundled().unwrap();
    let mut session = Session::new();

    // Intake: submit a valid form
    session
        .start("Asha", 5, CategoryFilter::Any, &bank, &mut rng())
        .unwrap();
    assert_eq!(session.screen(), Screen::Active);
    assert_eq!(session.questions().len(), 5);

    // Active: answer four correctly, one incorrectly
    let questions: Vec<Question> = session.questions().to_vec();
    for question in &questions[..4] {
        let outcome = session.submit_answer(&question.id, &question.correct_answer);
        assert!(matches!(
            outcome,
            SubmitOutcome::Recorded { is_correct: true }
        ));
    }
    let outcome = session.submit_answer(&questions[4].id, &questions[4].incorrect_answers[0]);
    assert_eq!(outcome, SubmitOutcome::Completed { score: 4 });

    // Results: the summary is fully derived from the session
    assert_eq!(session.screen(), Screen::Results);
    let summary = session.summary().unwrap();
    assert_eq!(summary.name, "Asha");
    assert_eq!(summary.score, 4);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.percentage(), 80);
    assert_eq!(summary.incorrect(), 1);
    assert_eq!(summary.feedback(), "Great job! You know your stuff!");

    // Restart discards everything
    session.restart();
    assert_eq!(session.screen(), Screen::Intake);
    assert!(session.name().is_empty());
    assert!(session.questions().is_empty());
    assert!(session.summary().is_none());
}

#[test]
fn test_category_run_with_short_pool() {
    let bank = QuestionBank::bundled().unwrap();
    let mut session = Session::new();

    // The geography pool is smaller than the request; the quiz still runs
    session
        .start(
            "Ben",
            20,
            CategoryFilter::parse("geography"),
            &bank,
            &mut rng(),
        )
        .unwrap();
    let questions: Vec<Question> = session.questions().to_vec();
    assert_eq!(questions.len(), 3);
    assert!(questions.iter().all(|q| q.category == "geography"));

    for question in &questions {
        session.submit_answer(&question.id, &question.correct_answer);
    }
    let summary = session.summary().unwrap();
    assert_eq!(summary.score, 3);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.percentage(), 100);
}

#[test]
fn test_invalid_starts_leave_session_reusable() {
    let bank = QuestionBank::bundled().unwrap();
    let mut session = Session::new();

    assert_eq!(
        session.start("   ", 5, CategoryFilter::Any, &bank, &mut rng()),
        Err(StartError::EmptyName)
    );
    assert!(matches!(
        session.start(
            "Asha",
            5,
            CategoryFilter::parse("astrology"),
            &bank,
            &mut rng()
        ),
        Err(StartError::NoQuestions { .. })
    ));
    assert_eq!(session.screen(), Screen::Intake);

    // A later valid start still works
    session
        .start("Asha", 5, CategoryFilter::Any, &bank, &mut rng())
        .unwrap();
    assert_eq!(session.screen(), Screen::Active);
}

#[test]
fn test_answer_sets_are_fixed_for_the_session() {
    let bank = QuestionBank::bundled().unwrap();
    let mut session = Session::new();
    session
        .start("Asha", 5, CategoryFilter::Any, &bank, &mut rng())
        .unwrap();

    let before: Vec<Vec<String>> = session
        .questions()
        .iter()
        .map(|q| q.answers.clone())
        .collect();

    // Submitting answers must not reorder any answer-set
    let questions: Vec<Question> = session.questions().to_vec();
    session.submit_answer(&questions[0].id, &questions[0].correct_answer);
    session.submit_answer(&questions[1].id, &questions[1].incorrect_answers[0]);

    let after: Vec<Vec<String>> = session
        .questions()
        .iter()
        .map(|q| q.answers.clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_revision_policy_differences() {
    let bank = QuestionBank::bundled().unwrap();

    let mut revising = Session::with_policy(AnswerPolicy::AllowRevision);
    revising
        .start("Asha", 5, CategoryFilter::Any, &bank, &mut rng())
        .unwrap();
    let question = revising.questions()[0].clone();
    revising.submit_answer(&question.id, &question.incorrect_answers[0]);
    revising.submit_answer(&question.id, &question.correct_answer);
    assert!(revising.answer_for(&question.id).unwrap().is_correct);

    let mut locked = Session::with_policy(AnswerPolicy::LockFirst);
    locked
        .start("Asha", 5, CategoryFilter::Any, &bank, &mut rng())
        .unwrap();
    let question = locked.questions()[0].clone();
    locked.submit_answer(&question.id, &question.incorrect_answers[0]);
    let outcome = locked.submit_answer(&question.id, &question.correct_answer);
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert!(!locked.answer_for(&question.id).unwrap().is_correct);
}

#[test]
fn test_back_to_back_sessions_are_independent() {
    let bank = QuestionBank::bundled().unwrap();
    let mut session = Session::new();

    session
        .start("Asha", 5, CategoryFilter::Any, &bank, &mut rng())
        .unwrap();
    let questions: Vec<Question> = session.questions().to_vec();
    for question in &questions {
        session.submit_answer(&question.id, &question.correct_answer);
    }
    assert_eq!(session.summary().unwrap().score, 5);

    session.restart();
    session
        .start(
            "Ben",
            10,
            CategoryFilter::parse("science"),
            &bank,
            &mut rng(),
        )
        .unwrap();
    assert_eq!(session.name(), "Ben");
    assert!(session.answers().is_empty());
    assert_eq!(session.score(), 0);
    assert!(session.questions().iter().all(|q| q.category == "science"));
}
