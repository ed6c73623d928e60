//! Answer-set builder
//!
//! Builds each question's full selectable answer-set: the incorrect
//! answers plus the correct one, permuted uniformly exactly once at
//! session start. Randomness is injected so tests can seed it.

use crate::models::Question;
use crate::questions::QuestionRecord;
use rand::seq::SliceRandom;
use rand::Rng;

/// Build the shuffled answer-set for one question
///
/// Concatenates the incorrect answers with the correct answer and applies
/// a single Fisher-Yates pass. The caller caches the result on the
/// `Question`; re-rendering must never reshuffle.
pub fn build_answer_set<R: Rng>(incorrect: &[String], correct: &str, rng: &mut R) -> Vec<String> {
    let mut answers: Vec<String> = incorrect.to_vec();
    answers.push(correct.to_string());
    answers.shuffle(rng);
    answers
}

/// Realize a dataset record into a session question with a fixed answer-set
pub fn realize_question<R: Rng>(record: QuestionRecord, rng: &mut R) -> Question {
    let answers = build_answer_set(&record.incorrect_answers, &record.correct_answer, rng);
    Question {
        id: record.id,
        category: record.category,
        prompt: record.question,
        correct_answer: record.correct_answer,
        incorrect_answers: record.incorrect_answers,
        difficulty: record.difficulty,
        answers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn incorrect() -> Vec<String> {
        vec!["Ag".to_string(), "Gd".to_string(), "Go".to_string()]
    }

    fn sample_record() -> QuestionRecord {
        QuestionRecord {
            id: "q-1".to_string(),
            category: "science".to_string(),
            question: "What is the chemical symbol for gold?".to_string(),
            correct_answer: "Au".to_string(),
            incorrect_answers: incorrect(),
            difficulty: Some("easy".to_string()),
        }
    }

    #[test]
    fn test_answer_set_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let answers = build_answer_set(&incorrect(), "Au", &mut rng);

        assert_eq!(answers.len(), 4);
        let mut sorted = answers.clone();
        sorted.sort();
        let mut expected = incorrect();
        expected.push("Au".to_string());
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_correct_answer_appears_exactly_once() {
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let answers = build_answer_set(&incorrect(), "Au", &mut rng);
            assert_eq!(answers.iter().filter(|a| *a == "Au").count(), 1);
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut first_rng = SmallRng::seed_from_u64(42);
        let mut second_rng = SmallRng::seed_from_u64(42);
        let first = build_answer_set(&incorrect(), "Au", &mut first_rng);
        let second = build_answer_set(&incorrect(), "Au", &mut second_rng);
        assert_eq!(first, second);
    }

    #[test]
    fn test_realized_question_keeps_record_fields() {
        let mut rng = SmallRng::seed_from_u64(1);
        let question = realize_question(sample_record(), &mut rng);

        assert_eq!(question.id, "q-1");
        assert_eq!(question.category, "science");
        assert_eq!(question.prompt, "What is the chemical symbol for gold?");
        assert_eq!(question.correct_answer, "Au");
        assert_eq!(question.incorrect_answers, incorrect());
        assert_eq!(question.difficulty, Some("easy".to_string()));
        assert_eq!(question.answers.len(), 4);
        assert!(question.answers.contains(&"Au".to_string()));
    }

    #[test]
    fn test_answer_set_fixed_after_realization() {
        let mut rng = SmallRng::seed_from_u64(3);
        let question = realize_question(sample_record(), &mut rng);

        // Repeated reads of the same question never reshuffle
        let first_read = question.answers.clone();
        let second_read = question.answers.clone();
        assert_eq!(first_read, second_read);
    }
}
