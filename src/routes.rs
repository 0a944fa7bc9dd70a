// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{api, authoring, health, results, taking},
    names,
    state::AppState,
};

/// Static assets ship with the crate, independent of the working directory.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Assembles the main application router.
///
/// * HTML pages at the root, JSON mirror under `/api`.
/// * Static assets under `/static`.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let page_routes = Router::new()
        .route(names::HOME_URL, get(authoring::index))
        .route(
            names::CREATE_QUIZ_URL,
            get(authoring::create_quiz_form).post(authoring::create_quiz),
        )
        .route(
            "/add_question/{quiz_id}",
            get(authoring::add_question_form).post(authoring::add_question),
        )
        .route(
            "/take_quiz/{quiz_id}",
            get(taking::take_quiz_form).post(taking::submit_quiz),
        )
        .route("/results/{quiz_id}", get(results::view_results));

    let api_routes = Router::new()
        .route("/quizzes", get(api::list_quizzes).post(api::create_quiz))
        .route("/quizzes/{quiz_id}", get(api::get_quiz))
        .route("/quizzes/{quiz_id}/questions", post(api::add_question))
        .route("/quizzes/{quiz_id}/submissions", post(api::submit_answers))
        .route("/quizzes/{quiz_id}/results", get(api::list_results));

    Router::new()
        .merge(page_routes)
        .route(names::HEALTH_URL, get(health::health))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(authoring::not_found)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
