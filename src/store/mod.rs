use async_trait::async_trait;

use crate::error::AppError;
use crate::structs::assessment::AssessmentResult;
use crate::structs::question::Question;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Persistence for questions and assessment results.
///
/// Implementations must not hold connections between calls.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Distinct level labels in ascending order.
    async fn list_levels(&self) -> Result<Vec<String>, AppError>;

    /// Inserts raw CSV records and returns how many were stored.
    ///
    /// Records with fewer than seven fields are skipped. A malformed correct
    /// index stops the batch; rows inserted before it stay stored.
    async fn bulk_insert(&self, rows: Vec<Vec<String>>) -> Result<u64, AppError>;

    /// Questions of one level in insertion order.
    async fn fetch_by_level(&self, level: &str) -> Result<Vec<Question>, AppError>;

    async fn record_result(&self, result: &AssessmentResult) -> Result<(), AppError>;
}
