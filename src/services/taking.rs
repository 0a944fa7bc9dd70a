// src/services/taking.rs

use std::collections::HashMap;

use sqlx::AnyPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        answer::{ANSWER_COLUMNS, Answer},
        question::{Question, QuestionDetail},
        quiz::QuizDetail,
        result::{QuizResult, RESULT_COLUMNS, SubmitAnswersRequest},
    },
    services::fetch_quiz,
};

/// Loads a quiz with its questions and answers in creation order.
pub async fn get_quiz_for_taking(pool: &AnyPool, quiz_id: i64) -> Result<QuizDetail, AppError> {
    let quiz = fetch_quiz(pool, quiz_id).await?;

    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, quiz_id, text FROM questions WHERE quiz_id = $1 ORDER BY id",
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await?;

    let answers = sqlx::query_as::<_, Answer>(&format!(
        r#"
        SELECT {ANSWER_COLUMNS}
        FROM answers
        WHERE question_id IN (SELECT id FROM questions WHERE quiz_id = $1)
        ORDER BY id
        "#
    ))
    .bind(quiz_id)
    .fetch_all(pool)
    .await?;

    let mut by_question: HashMap<i64, Vec<Answer>> = HashMap::new();
    for answer in answers {
        by_question.entry(answer.question_id).or_default().push(answer);
    }

    let questions = questions
        .into_iter()
        .map(|question| {
            let answers = by_question.remove(&question.id).unwrap_or_default();
            QuestionDetail { question, answers }
        })
        .collect();

    Ok(QuizDetail { quiz, questions })
}

/// Counts the questions whose selected answer is a correct answer of
/// that same question. Missing selections, unknown answer ids and
/// answers borrowed from another question score nothing.
pub fn grade(questions: &[QuestionDetail], selections: &HashMap<i64, i64>) -> i64 {
    questions
        .iter()
        .filter(|detail| {
            selections
                .get(&detail.question.id)
                .and_then(|answer_id| detail.answers.iter().find(|a| a.id == *answer_id))
                .is_some_and(|answer| answer.is_correct)
        })
        .count() as i64
}

/// Grades a submission and records exactly one result row for it.
///
/// * `total_questions` is the quiz's question count right now,
///   regardless of how many were answered.
/// * Repeated submissions each create their own row.
pub async fn submit_answers(
    pool: &AnyPool,
    quiz_id: i64,
    req: SubmitAnswersRequest,
) -> Result<QuizResult, AppError> {
    let detail = get_quiz_for_taking(pool, quiz_id).await?;
    req.validate()?;

    let score = grade(&detail.questions, &req.selections);
    let total_questions = detail.questions.len() as i64;

    let result = sqlx::query_as::<_, QuizResult>(&format!(
        r#"
        INSERT INTO results (quiz_id, user_name, score, total_questions)
        VALUES ($1, $2, $3, $4)
        RETURNING {RESULT_COLUMNS}
        "#
    ))
    .bind(quiz_id)
    .bind(req.user_name)
    .bind(score)
    .bind(total_questions)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert result: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::info!(
        quiz_id,
        result_id = result.id,
        score,
        total_questions,
        "submission graded"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, answers: &[(i64, bool)]) -> QuestionDetail {
        QuestionDetail {
            question: Question {
                id,
                quiz_id: 1,
                text: format!("Question {}", id),
            },
            answers: answers
                .iter()
                .map(|&(answer_id, is_correct)| Answer {
                    id: answer_id,
                    question_id: id,
                    text: format!("Answer {}", answer_id),
                    is_correct,
                })
                .collect(),
        }
    }

    fn sample() -> Vec<QuestionDetail> {
        vec![
            question(1, &[(10, false), (11, true)]),
            question(2, &[(20, true), (21, false)]),
            question(3, &[(30, false), (31, true)]),
        ]
    }

    #[test]
    fn all_correct_scores_every_question() {
        let selections = HashMap::from([(1, 11), (2, 20), (3, 31)]);
        assert_eq!(grade(&sample(), &selections), 3);
    }

    #[test]
    fn no_selections_score_zero() {
        assert_eq!(grade(&sample(), &HashMap::new()), 0);
    }

    #[test]
    fn wrong_and_missing_answers_score_nothing() {
        let selections = HashMap::from([(1, 10), (3, 31)]);
        assert_eq!(grade(&sample(), &selections), 1);
    }

    #[test]
    fn correct_answer_of_another_question_is_not_counted() {
        // 20 is correct, but for question 2.
        let selections = HashMap::from([(1, 20)]);
        assert_eq!(grade(&sample(), &selections), 0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let selections = HashMap::from([(1, 999), (42, 11)]);
        assert_eq!(grade(&sample(), &selections), 0);
    }

    #[test]
    fn question_without_correct_answer_never_scores() {
        let questions = vec![question(1, &[(10, false), (11, false)])];
        let selections = HashMap::from([(1, 10)]);
        assert_eq!(grade(&questions, &selections), 0);
    }
}
