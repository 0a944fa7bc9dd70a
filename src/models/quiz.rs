// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::{
    models::question::{PublicQuestion, QuestionDetail},
    utils::validation::not_blank,
};

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// A quiz as listed on the home page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub question_count: i64,
}

/// A quiz with its questions and their answers, in creation order.
#[derive(Debug, Clone, Serialize)]
pub struct QuizDetail {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<QuestionDetail>,
}

impl QuizDetail {
    /// Strips answer keys before the quiz is handed to a respondent.
    pub fn into_public(self) -> PublicQuiz {
        PublicQuiz {
            quiz: self.quiz,
            questions: self.questions.into_iter().map(PublicQuestion::from).collect(),
        }
    }
}

/// DTO for sending a quiz to a respondent (no `is_correct` flags).
#[derive(Debug, Serialize)]
pub struct PublicQuiz {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<PublicQuestion>,
}

/// DTO for creating a new quiz.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(custom(function = not_blank, message = "Title is required"))]
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}
