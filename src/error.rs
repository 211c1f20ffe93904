use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File must be a CSV")]
    InvalidFileType,

    #[error("No file uploaded")]
    MissingFile,

    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("Invalid CSV file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid correct answer index '{value}' in row {row}")]
    InvalidCorrectAnswer { row: usize, value: String },

    #[error("No questions found for level '{level}'")]
    NoQuestions { level: String },

    #[error("Question {id} has correct answer index {index} outside 0-3")]
    CorruptQuestion { id: i32, index: i32 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Storage failures of any kind are reported without their cause.
    fn detail(&self) -> String {
        match self {
            AppError::NoQuestions { .. } => "No questions found for this level".to_string(),
            AppError::Database(_) | AppError::CorruptQuestion { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidFileType
            | AppError::MissingFile
            | AppError::Multipart(_)
            | AppError::Csv(_)
            | AppError::InvalidCorrectAnswer { .. } => StatusCode::BAD_REQUEST,
            AppError::NoQuestions { .. } => StatusCode::NOT_FOUND,
            AppError::CorruptQuestion { .. } | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed: {self}");
        } else {
            log::warn!("rejected request: {self}");
        }
        HttpResponse::build(status).json(json!({ "detail": self.detail() }))
    }
}
