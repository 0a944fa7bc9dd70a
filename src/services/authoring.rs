// src/services/authoring.rs

use sqlx::AnyPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        answer::{ANSWER_COLUMNS, Answer},
        question::{CreateQuestionRequest, Question, QuestionDetail},
        quiz::{CreateQuizRequest, Quiz, QuizSummary},
    },
    services::fetch_quiz,
    utils::validation::non_empty,
};

/// Lists every quiz with its question count, oldest first.
pub async fn list_quizzes(pool: &AnyPool) -> Result<Vec<QuizSummary>, AppError> {
    let quizzes = sqlx::query_as::<_, QuizSummary>(
        r#"
        SELECT
            z.id,
            z.title,
            z.description,
            (SELECT COUNT(*) FROM questions q WHERE q.quiz_id = z.id) AS question_count
        FROM quizzes z
        ORDER BY z.id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list quizzes: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(quizzes)
}

/// Creates an empty quiz.
///
/// * Rejects a blank title with `BadRequest`.
/// * Stores a blank description as NULL.
pub async fn create_quiz(pool: &AnyPool, req: CreateQuizRequest) -> Result<Quiz, AppError> {
    req.validate()?;

    let quiz = sqlx::query_as::<_, Quiz>(
        r#"
        INSERT INTO quizzes (title, description)
        VALUES ($1, NULLIF($2, ''))
        RETURNING id, title, description
        "#,
    )
    .bind(req.title)
    .bind(non_empty(req.description).unwrap_or_default())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create quiz: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::info!(quiz_id = quiz.id, title = %quiz.title, "quiz created");
    Ok(quiz)
}

/// Appends a question and its answer choices to a quiz.
///
/// * Empty answer texts are skipped.
/// * `correct_index` refers to the submitted array, so a skipped entry
///   never moves the correct flag onto a neighbour. If it points at a
///   skipped or missing entry, no answer is marked correct.
/// * Question and answers are written in one transaction.
pub async fn add_question(
    pool: &AnyPool,
    quiz_id: i64,
    req: CreateQuestionRequest,
) -> Result<QuestionDetail, AppError> {
    fetch_quiz(pool, quiz_id).await?;
    req.validate()?;

    let mut tx = pool.begin().await?;

    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (quiz_id, text)
        VALUES ($1, $2)
        RETURNING id, quiz_id, text
        "#,
    )
    .bind(quiz_id)
    .bind(req.text)
    .fetch_one(&mut *tx)
    .await?;

    let mut answers = Vec::with_capacity(req.answers.len());
    for (i, text) in req.answers.into_iter().enumerate() {
        if text.is_empty() {
            continue;
        }

        let answer = sqlx::query_as::<_, Answer>(&format!(
            r#"
            INSERT INTO answers (question_id, text, is_correct)
            VALUES ($1, $2, $3)
            RETURNING {ANSWER_COLUMNS}
            "#
        ))
        .bind(question.id)
        .bind(text)
        .bind(req.correct_index == Some(i))
        .fetch_one(&mut *tx)
        .await?;

        answers.push(answer);
    }

    tx.commit().await?;

    let detail = QuestionDetail { question, answers };

    if detail.correct_answers().next().is_none() {
        tracing::warn!(
            quiz_id,
            question_id = detail.question.id,
            "question stored without a correct answer"
        );
    }

    tracing::info!(
        quiz_id,
        question_id = detail.question.id,
        answers = detail.answers.len(),
        "question added"
    );

    Ok(detail)
}
