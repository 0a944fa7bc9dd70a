// src/services/leaderboard.rs

use sqlx::AnyPool;

use crate::{
    error::AppError,
    models::{
        quiz::Quiz,
        result::{QuizResult, RESULT_COLUMNS},
    },
    services::fetch_quiz,
};

/// Retrieves all results for a quiz, highest score first.
/// Equal scores keep submission order.
pub async fn list_results(pool: &AnyPool, quiz_id: i64) -> Result<Vec<QuizResult>, AppError> {
    let (_, results) = quiz_leaderboard(pool, quiz_id).await?;
    Ok(results)
}

/// Same as `list_results`, also handing back the quiz it checked.
pub async fn quiz_leaderboard(
    pool: &AnyPool,
    quiz_id: i64,
) -> Result<(Quiz, Vec<QuizResult>), AppError> {
    let quiz = fetch_quiz(pool, quiz_id).await?;

    let results = sqlx::query_as::<_, QuizResult>(&format!(
        r#"
        SELECT {RESULT_COLUMNS}
        FROM results
        WHERE quiz_id = $1
        ORDER BY score DESC, id ASC
        "#
    ))
    .bind(quiz_id)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((quiz, results))
}
