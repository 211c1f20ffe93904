use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::AppError;
use crate::structs::assessment::{SubmitResponse, SubmittedQuestion};
use crate::structs::question::{Question, ShuffledQuestion};

/// Randomizes question order, then each question's option order independently.
pub fn shuffle_questions<R: Rng + ?Sized>(
    mut questions: Vec<Question>,
    rng: &mut R,
) -> Result<Vec<ShuffledQuestion>, AppError> {
    questions.shuffle(rng);
    questions
        .into_iter()
        .map(|question| shuffle_options(question, &mut *rng))
        .collect()
}

/// Presents `options[p[i]]` at position `i` for a random permutation `p`; the new
/// correct index is the position of the original one inside `p`.
pub fn shuffle_options<R: Rng + ?Sized>(question: Question, rng: &mut R) -> Result<ShuffledQuestion, AppError> {
    let mut permutation: [usize; 4] = [0, 1, 2, 3];
    permutation.shuffle(rng);

    let correct_answer_index = permutation
        .iter()
        .position(|&original| original as i32 == question.correct_answer)
        .ok_or(AppError::CorruptQuestion {
            id: question.id,
            index: question.correct_answer,
        })?;

    Ok(ShuffledQuestion {
        id: question.id,
        shuffled_options: permutation.map(|original| question.options[original].clone()),
        question: question.question,
        correct_answer_index,
    })
}

/// Scores a submission against the correct indices the questions carry.
///
/// Unanswered questions count as wrong. An empty question list scores 0%.
pub fn score(questions: &[SubmittedQuestion], answers: &HashMap<String, i64>, pass_percentage: i32) -> SubmitResponse {
    let total = questions.len() as i32;
    let score = questions
        .iter()
        .filter(|question| answers.get(&question.id.to_string()) == Some(&question.correct_answer_index))
        .count() as i32;

    let percentage = if total > 0 {
        f64::from(score) / f64::from(total) * 100.0
    } else {
        0.0
    };

    SubmitResponse {
        score,
        total,
        percentage,
        pass_percentage,
        passed: percentage >= f64::from(pass_percentage),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use time::macros::datetime;

    use super::*;

    fn question(id: i32, correct_answer: i32) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            options: [0, 1, 2, 3].map(|i| format!("q{id} option {i}")),
            correct_answer,
            level: "easy".to_string(),
            created_at: datetime!(2024-01-01 0:00),
        }
    }

    fn submitted(id: i64, correct_answer_index: i64) -> SubmittedQuestion {
        SubmittedQuestion { id, correct_answer_index }
    }

    #[test]
    fn correct_option_follows_the_shuffle() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for correct in 0..4 {
                let original = question(1, correct);
                let expected = original.options[correct as usize].clone();
                let shuffled = shuffle_options(original.clone(), &mut rng).unwrap();

                assert_eq!(shuffled.shuffled_options[shuffled.correct_answer_index], expected);
                let mut sorted = shuffled.shuffled_options.to_vec();
                sorted.sort();
                let mut options = original.options.to_vec();
                options.sort();
                assert_eq!(sorted, options);
            }
        }
    }

    #[test]
    fn zero_rng_yields_rotated_options() {
        // A constant-zero source swaps every position with the first one.
        let mut rng = StepRng::new(0, 0);
        let shuffled = shuffle_options(question(5, 0), &mut rng).unwrap();
        assert_eq!(
            shuffled.shuffled_options,
            ["q5 option 1", "q5 option 2", "q5 option 3", "q5 option 0"].map(String::from)
        );
        assert_eq!(shuffled.correct_answer_index, 3);
    }

    #[test]
    fn same_seed_gives_same_assessment() {
        let questions: Vec<Question> = (1..=6).map(|id| question(id, id % 4)).collect();
        let first = shuffle_questions(questions.clone(), &mut StdRng::seed_from_u64(42)).unwrap();
        let second = shuffle_questions(questions, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_question_is_kept_once() {
        let questions: Vec<Question> = (1..=10).map(|id| question(id, id % 4)).collect();
        let shuffled = shuffle_questions(questions, &mut StdRng::seed_from_u64(7)).unwrap();
        let mut ids: Vec<i32> = shuffled.iter().map(|q| q.id).collect();
        ids.sort();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_correct_index_is_reported() {
        let err = shuffle_options(question(8, 4), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, AppError::CorruptQuestion { id: 8, index: 4 }));
    }

    #[test]
    fn counts_only_matching_answers() {
        let questions = vec![submitted(1, 0), submitted(2, 3), submitted(3, 1), submitted(4, 2)];
        let answers = HashMap::from([
            ("1".to_string(), 0),
            ("2".to_string(), 3),
            ("3".to_string(), 2),
        ]);
        let outcome = score(&questions, &answers, 50);
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.total, 4);
        assert_eq!(outcome.percentage, 50.0);
        assert!(outcome.passed);
    }

    #[test]
    fn pass_threshold_is_inclusive() {
        let questions = vec![submitted(1, 0), submitted(2, 0), submitted(3, 0), submitted(4, 0)];
        let answers = HashMap::from([("1".to_string(), 0), ("2".to_string(), 0), ("3".to_string(), 0)]);
        assert!(score(&questions, &answers, 75).passed);
        assert!(!score(&questions, &answers, 76).passed);
    }

    #[test]
    fn empty_submission_scores_zero() {
        let outcome = score(&[], &HashMap::new(), 0);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.percentage, 0.0);
        assert!(outcome.passed);
        assert!(!score(&[], &HashMap::new(), 1).passed);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let questions = vec![submitted(1, 2)];
        let answers = HashMap::from([("99".to_string(), 2)]);
        let outcome = score(&questions, &answers, 100);
        assert_eq!(outcome.score, 0);
        assert!(!outcome.passed);
    }
}
