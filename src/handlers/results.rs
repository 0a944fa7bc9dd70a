// src/handlers/results.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::AnyPool;

use crate::{error::PageError, services::leaderboard, views};

pub async fn view_results(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
) -> Result<impl IntoResponse, PageError> {
    let (quiz, results) = leaderboard::quiz_leaderboard(&pool, quiz_id).await?;
    Ok(views::results::results(&quiz, &results))
}
