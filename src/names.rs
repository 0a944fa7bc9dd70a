// src/names.rs

pub const HOME_URL: &str = "/";
pub const CREATE_QUIZ_URL: &str = "/create_quiz";
pub const HEALTH_URL: &str = "/health";

pub fn add_question_url(quiz_id: i64) -> String {
    format!("/add_question/{quiz_id}")
}

pub fn take_quiz_url(quiz_id: i64) -> String {
    format!("/take_quiz/{quiz_id}")
}

pub fn results_url(quiz_id: i64) -> String {
    format!("/results/{quiz_id}")
}

/// Form field carrying the selected answer for a question.
pub fn answer_field(question_id: i64) -> String {
    format!("answer_{question_id}")
}
