// src/models/result.rs

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, any::AnyRow};
use validator::Validate;

use crate::utils::validation::not_blank;

/// Select list for `results`. The timestamp travels as text and is parsed
/// here, which covers both SQLite and Postgres renderings.
pub const RESULT_COLUMNS: &str =
    "id, quiz_id, user_name, score, total_questions, CAST(created_at AS TEXT) AS created_at";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Represents the 'results' table in the database.
/// One row per submission; never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    pub quiz_id: i64,
    pub user_name: String,
    pub score: i64,
    pub total_questions: i64,
    pub created_at: NaiveDateTime,
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
}

impl FromRow<'_, AnyRow> for QuizResult {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        let raw: String = row.try_get("created_at")?;
        let created_at = parse_timestamp(&raw).map_err(|e| sqlx::Error::ColumnDecode {
            index: "created_at".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            quiz_id: row.try_get("quiz_id")?,
            user_name: row.try_get("user_name")?,
            score: row.try_get("score")?,
            total_questions: row.try_get("total_questions")?,
            created_at,
        })
    }
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[validate(custom(function = not_blank, message = "Name is required"))]
    #[serde(default)]
    pub user_name: String,

    /// Key: Question ID
    /// Value: selected Answer ID
    #[serde(default)]
    pub selections: HashMap<i64, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sqlite_and_postgres_timestamps() {
        let sqlite = parse_timestamp("2025-03-01 09:30:00").unwrap();
        let postgres = parse_timestamp("2025-03-01 09:30:00.123456").unwrap();

        assert_eq!(sqlite.format("%Y-%m-%d %H:%M").to_string(), "2025-03-01 09:30");
        assert_eq!(postgres.format("%Y-%m-%d %H:%M").to_string(), "2025-03-01 09:30");
        assert!(parse_timestamp("yesterday").is_err());
    }
}
