use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use time::PrimitiveDateTime;

use crate::error::AppError;

/// Columns a CSV row must provide: question, four options, correct index, level.
pub const QUESTION_FIELDS: usize = 7;

/// A stored question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub options: [String; 4],
    /// Index into `options`, 0..=3.
    pub correct_answer: i32,
    pub level: String,
    pub created_at: PrimitiveDateTime,
}

impl<'r> FromRow<'r, PgRow> for Question {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Question {
            id: row.try_get("id")?,
            question: row.try_get("question")?,
            options: [
                row.try_get("option1")?,
                row.try_get("option2")?,
                row.try_get("option3")?,
                row.try_get("option4")?,
            ],
            correct_answer: row.try_get("correct_answer")?,
            level: row.try_get("level")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// A question parsed from an uploaded row, not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: i32,
    pub level: String,
}

impl NewQuestion {
    /// Parses one CSV record. `row` is 1-based and only used for error messages.
    ///
    /// Returns `Ok(None)` for records with fewer than seven fields so the caller can
    /// skip them. A correct index that is not an integer in 0..=3 is an error that
    /// aborts the upload.
    pub fn from_record(row: usize, fields: &[String]) -> Result<Option<NewQuestion>, AppError> {
        if fields.len() < QUESTION_FIELDS {
            return Ok(None);
        }
        let field = |i: usize| fields[i].trim().to_string();
        let raw_answer = field(5);
        let correct_answer = match raw_answer.parse::<i32>() {
            Ok(index) if (0..4).contains(&index) => index,
            _ => return Err(AppError::InvalidCorrectAnswer { row, value: raw_answer }),
        };
        Ok(Some(NewQuestion {
            question: field(0),
            options: [field(1), field(2), field(3), field(4)],
            correct_answer,
            level: field(6),
        }))
    }
}

/// A question as presented to the client: options reordered, correct index remapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffledQuestion {
    pub id: i32,
    pub question: String,
    pub shuffled_options: [String; 4],
    pub correct_answer_index: usize,
}
