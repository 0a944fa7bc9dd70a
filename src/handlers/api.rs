// src/handlers/api.rs

//! JSON mirror of the HTML flows, one handler per service operation.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::AnyPool;

use crate::{
    error::AppError,
    models::{question::CreateQuestionRequest, quiz::CreateQuizRequest, result::SubmitAnswersRequest},
    services::{authoring, leaderboard, taking},
};

pub async fn list_quizzes(State(pool): State<AnyPool>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(authoring::list_quizzes(&pool).await?))
}

pub async fn create_quiz(
    State(pool): State<AnyPool>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = authoring::create_quiz(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Returns the quiz without answer keys.
pub async fn get_quiz(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let detail = taking::get_quiz_for_taking(&pool, quiz_id).await?;
    Ok(Json(detail.into_public()))
}

pub async fn add_question(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let question = authoring::add_question(&pool, quiz_id, payload).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

pub async fn submit_answers(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
    Json(payload): Json<SubmitAnswersRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = taking::submit_answers(&pool, quiz_id, payload).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn list_results(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(leaderboard::list_results(&pool, quiz_id).await?))
}
