//! Trait Scorer: reduces raw questionnaire answers to trait vectors.
//!
//! Both scorers are pure functions of (questionnaire, answer set). A missing
//! answer is a lookup-with-default-0, never an error — completeness is
//! enforced by the submission handlers before scoring is requested.

use crate::quiz::models::{
    AnswerSet, BigFiveQuestion, BigFiveVector, HollandQuestion, HollandVector,
};

fn answer_or_zero(answers: &AnswerSet, id: &str) -> i32 {
    answers.get(id).copied().unwrap_or(0)
}

/// Sums each question's raw answer into its RIASEC dimension.
pub fn score_holland(questions: &[HollandQuestion], answers: &AnswerSet) -> HollandVector {
    let mut scores = HollandVector::default();
    for q in questions {
        scores.add(q.dimension, answer_or_zero(answers, q.id));
    }
    scores
}

/// Sums each question's answer into its OCEAN factor, inverting
/// reverse-coded items (`6 - value`). The raw value still defaults to 0 for
/// a missing id, so the inversion applies to 0 as well.
pub fn score_big_five(questions: &[BigFiveQuestion], answers: &AnswerSet) -> BigFiveVector {
    let mut scores = BigFiveVector::default();
    for q in questions {
        let raw = answer_or_zero(answers, q.id);
        let value = if q.reverse { 6 - raw } else { raw };
        scores.add(q.factor, value);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BIG_FIVE_QUESTIONS, HOLLAND_QUESTIONS};

    fn uniform_answers(questions: impl Iterator<Item = &'static str>, value: i32) -> AnswerSet {
        questions.map(|id| (id.to_string(), value)).collect()
    }

    #[test]
    fn test_all_neutral_holland_is_three_per_question() {
        let answers = uniform_answers(HOLLAND_QUESTIONS.iter().map(|q| q.id), 3);
        let scores = score_holland(HOLLAND_QUESTIONS, &answers);
        // 2 questions per dimension, each worth 3
        assert_eq!(scores, HollandVector::new(6, 6, 6, 6, 6, 6));
    }

    #[test]
    fn test_all_neutral_big_five_ignores_reverse_flag() {
        // 6 - 3 = 3, so neutral answers contribute identically either way.
        let answers = uniform_answers(BIG_FIVE_QUESTIONS.iter().map(|q| q.id), 3);
        let scores = score_big_five(BIG_FIVE_QUESTIONS, &answers);
        assert_eq!(scores, BigFiveVector::new(9, 9, 9, 9, 9));
    }

    #[test]
    fn test_all_ones_holland_vector() {
        let answers = uniform_answers(HOLLAND_QUESTIONS.iter().map(|q| q.id), 1);
        let scores = score_holland(HOLLAND_QUESTIONS, &answers);
        assert_eq!(scores, HollandVector::new(2, 2, 2, 2, 2, 2));
    }

    #[test]
    fn test_all_ones_big_five_vector() {
        // Per factor: two straight items contribute 1 each, the reverse item
        // contributes 6 - 1 = 5, for a total of 7.
        let answers = uniform_answers(BIG_FIVE_QUESTIONS.iter().map(|q| q.id), 1);
        let scores = score_big_five(BIG_FIVE_QUESTIONS, &answers);
        assert_eq!(scores, BigFiveVector::new(7, 7, 7, 7, 7));
    }

    #[test]
    fn test_reverse_coding_is_self_consistent() {
        let mut answers = uniform_answers(BIG_FIVE_QUESTIONS.iter().map(|q| q.id), 3);
        answers.insert("b3".to_string(), 1); // reverse Openness item
        let scores = score_big_five(BIG_FIVE_QUESTIONS, &answers);
        // b1 + b2 = 6, b3 contributes 6 - 1 = 5
        assert_eq!(scores.openness, 11);

        answers.insert("b3".to_string(), 5);
        let scores = score_big_five(BIG_FIVE_QUESTIONS, &answers);
        assert_eq!(scores.openness, 7);
    }

    #[test]
    fn test_missing_holland_answer_contributes_zero() {
        let mut answers = uniform_answers(HOLLAND_QUESTIONS.iter().map(|q| q.id), 5);
        answers.remove("h1"); // Realistic
        let scores = score_holland(HOLLAND_QUESTIONS, &answers);
        assert_eq!(scores.realistic, 5);
        assert_eq!(scores.investigative, 10);
    }

    #[test]
    fn test_empty_answer_set_does_not_error() {
        let scores = score_holland(HOLLAND_QUESTIONS, &AnswerSet::new());
        assert_eq!(scores, HollandVector::default());
    }

    #[test]
    fn test_missing_reverse_answer_inverts_the_zero_default() {
        // The raw value defaults to 0, then the reverse formula applies.
        let mut answers = uniform_answers(BIG_FIVE_QUESTIONS.iter().map(|q| q.id), 3);
        answers.remove("b15"); // reverse Neuroticism item
        let scores = score_big_five(BIG_FIVE_QUESTIONS, &answers);
        // b13 + b14 = 6, b15 contributes 6 - 0 = 6
        assert_eq!(scores.neuroticism, 12);
    }
}
