// src/seed.rs

use sqlx::AnyPool;

use crate::{
    error::AppError,
    models::{question::CreateQuestionRequest, quiz::CreateQuizRequest},
    services::authoring,
};

/// (question, answers, index of the correct answer)
const GENERAL_KNOWLEDGE: &[(&str, &[&str], usize)] = &[
    (
        "What is the capital of France?",
        &["London", "Paris", "Berlin", "Madrid"],
        1,
    ),
    (
        "Which planet is known as the Red Planet?",
        &["Earth", "Mars", "Jupiter", "Saturn"],
        1,
    ),
];

/// Populates an empty store with a sample quiz.
/// Returns `false` without touching anything if quizzes already exist.
pub async fn seed_sample_data(pool: &AnyPool) -> Result<bool, AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quizzes")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        tracing::info!(quizzes = count, "store already populated, skipping sample data");
        return Ok(false);
    }

    let quiz = authoring::create_quiz(
        pool,
        CreateQuizRequest {
            title: "General Knowledge".to_string(),
            description: Some("Test your general knowledge with this quiz.".to_string()),
        },
    )
    .await?;

    for (text, answers, correct) in GENERAL_KNOWLEDGE {
        authoring::add_question(
            pool,
            quiz.id,
            CreateQuestionRequest {
                text: text.to_string(),
                answers: answers.iter().map(|a| a.to_string()).collect(),
                correct_index: Some(*correct),
            },
        )
        .await?;
    }

    tracing::info!(
        quiz_id = quiz.id,
        questions = GENERAL_KNOWLEDGE.len(),
        "sample data populated"
    );
    Ok(true)
}
