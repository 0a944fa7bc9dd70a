// src/handlers/taking.rs

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::AnyPool;

use crate::{
    error::{AppError, PageError},
    handlers::forms,
    names,
    services::taking,
    views,
};

pub async fn take_quiz_form(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
) -> Result<impl IntoResponse, PageError> {
    let detail = taking::get_quiz_for_taking(&pool, quiz_id).await?;
    Ok(views::taking::take_quiz(&detail, None))
}

/// Grades the submitted form and shows the leaderboard.
pub async fn submit_quiz(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, PageError> {
    let submission = forms::submission(fields);

    match taking::submit_answers(&pool, quiz_id, submission).await {
        Ok(_) => Ok(Redirect::to(&names::results_url(quiz_id)).into_response()),
        Err(AppError::BadRequest(msg)) => {
            let detail = taking::get_quiz_for_taking(&pool, quiz_id).await?;
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                views::taking::take_quiz(&detail, Some(&msg)),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}
