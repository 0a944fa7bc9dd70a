// src/handlers/authoring.rs

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
    models::quiz::CreateQuizRequest,
    names,
    services::{authoring, taking},
    views::{
        self,
        authoring::{QuestionFormValues, QuizFormValues},
    },
};

/// Home page: every quiz with links to take, extend and rank it.
pub async fn index(State(pool): State<AnyPool>) -> Result<impl IntoResponse, PageError> {
    let quizzes = authoring::list_quizzes(&pool).await?;
    Ok(views::authoring::index(&quizzes))
}

pub async fn create_quiz_form() -> impl IntoResponse {
    views::authoring::create_quiz(&QuizFormValues::default(), None)
}

/// Creates a quiz and continues to its add-question page.
/// A blank title re-renders the form with the error.
pub async fn create_quiz(
    State(pool): State<AnyPool>,
    Form(payload): Form<CreateQuizRequest>,
) -> Result<Response, PageError> {
    let values = QuizFormValues {
        title: payload.title.clone(),
        description: payload.description.clone().unwrap_or_default(),
    };

    match authoring::create_quiz(&pool, payload).await {
        Ok(quiz) => Ok(Redirect::to(&names::add_question_url(quiz.id)).into_response()),
        Err(AppError::BadRequest(msg)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            views::authoring::create_quiz(&values, Some(&msg)),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

pub async fn add_question_form(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
) -> Result<impl IntoResponse, PageError> {
    let detail = taking::get_quiz_for_taking(&pool, quiz_id).await?;
    Ok(views::authoring::add_question(
        &detail.quiz,
        detail.questions.len(),
        &QuestionFormValues::fresh(),
        None,
    ))
}

/// Stores a question with its answers.
///
/// * `add_another` present: back to this quiz's add-question page.
/// * Otherwise: back home.
/// * A rejected submit re-renders the form with what was typed.
pub async fn add_question(
    State(pool): State<AnyPool>,
    Path(quiz_id): Path<i64>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, PageError> {
    let form = forms::question_form(fields);
    let values = QuestionFormValues::from(&form.request);

    match authoring::add_question(&pool, quiz_id, form.request).await {
        Ok(_) if form.add_another => {
            Ok(Redirect::to(&names::add_question_url(quiz_id)).into_response())
        }
        Ok(_) => Ok(Redirect::to(names::HOME_URL).into_response()),
        Err(AppError::BadRequest(msg)) => {
            let detail = taking::get_quiz_for_taking(&pool, quiz_id).await?;
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                views::authoring::add_question(
                    &detail.quiz,
                    detail.questions.len(),
                    &values,
                    Some(&msg),
                ),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Fallback for paths no route matches.
pub async fn not_found() -> PageError {
    PageError(AppError::NotFound("Page not found".to_string()))
}
