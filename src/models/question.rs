// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::{
    models::answer::{Answer, PublicAnswer},
    utils::validation::not_blank,
};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
}

/// A question together with its answer choices.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub answers: Vec<Answer>,
}

impl QuestionDetail {
    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.is_correct)
    }
}

/// DTO for sending a question to a respondent (answer keys hidden).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub text: String,
    pub answers: Vec<PublicAnswer>,
}

impl From<QuestionDetail> for PublicQuestion {
    fn from(detail: QuestionDetail) -> Self {
        Self {
            id: detail.question.id,
            text: detail.question.text,
            answers: detail.answers.into_iter().map(PublicAnswer::from).collect(),
        }
    }
}

/// DTO for appending a question to a quiz.
///
/// `correct_index` points into `answers` as submitted, before empty
/// entries are dropped.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(custom(function = not_blank, message = "Question text is required"))]
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub answers: Vec<String>,
    pub correct_index: Option<usize>,
}
