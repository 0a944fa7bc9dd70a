// src/services/mod.rs

//! Quiz business logic. Every function takes the store handle explicitly
//! and returns `AppError` so handlers can render or serialize the outcome.
//! SQL uses `$n` placeholders, which both SQLite and Postgres accept.

pub mod authoring;
pub mod leaderboard;
pub mod taking;

use sqlx::AnyPool;

use crate::{error::AppError, models::quiz::Quiz};

/// Loads a quiz by id or fails with `NotFound`.
pub async fn fetch_quiz(pool: &AnyPool, quiz_id: i64) -> Result<Quiz, AppError> {
    sqlx::query_as::<_, Quiz>("SELECT id, title, description FROM quizzes WHERE id = $1")
        .bind(quiz_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::quiz_not_found(quiz_id))
}
