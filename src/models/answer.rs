// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, any::AnyRow};

/// Select list for `answers`. `is_correct` is read back as 0/1 so the same
/// row mapping works for SQLite integers and Postgres booleans.
pub const ANSWER_COLUMNS: &str =
    "id, question_id, text, CAST(CASE WHEN is_correct THEN 1 ELSE 0 END AS BIGINT) AS is_correct";

/// Represents the 'answers' table in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

impl FromRow<'_, AnyRow> for Answer {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            question_id: row.try_get("question_id")?,
            text: row.try_get("text")?,
            is_correct: row.try_get::<i64, _>("is_correct")? != 0,
        })
    }
}

/// DTO for sending an answer choice to a respondent.
#[derive(Debug, Serialize)]
pub struct PublicAnswer {
    pub id: i64,
    pub text: String,
}

impl From<Answer> for PublicAnswer {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            text: answer.text,
        }
    }
}
