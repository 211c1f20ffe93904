use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::structs::question::ShuffledQuestion;

// Level and elapsed time are not known at submission time
pub const UNKNOWN_LEVEL: &str = "N/A";
pub const UNTRACKED_TIME: i32 = 0;

/// Body of `POST /start-assessment`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub(crate) level: String,
    pub(crate) total_time: i32,
    pub(crate) pass_percentage: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StartResponse {
    pub(crate) questions: Vec<ShuffledQuestion>,
}

/// The part of a returned question the scorer reads; other keys are ignored.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedQuestion {
    pub(crate) id: i64,
    pub(crate) correct_answer_index: i64,
}

/// Body of `POST /submit-assessment`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub(crate) questions: Vec<SubmittedQuestion>,
    /// Selected option index keyed by question id.
    pub(crate) answers: HashMap<String, i64>,
    pub(crate) pass_percentage: i32,
}

/// Result of scoring one submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub(crate) score: i32,
    pub(crate) total: i32,
    pub(crate) percentage: f64,
    pub(crate) pass_percentage: i32,
    pub(crate) passed: bool,
}

/// Row of the `assessments` table.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResult {
    pub level: String,
    pub total_time: i32,
    pub pass_percentage: i32,
    pub score: i32,
    pub total_questions: i32,
    pub percentage: f64,
    pub passed: bool,
}

impl From<&SubmitResponse> for AssessmentResult {
    fn from(outcome: &SubmitResponse) -> Self {
        AssessmentResult {
            level: UNKNOWN_LEVEL.to_string(),
            total_time: UNTRACKED_TIME,
            pass_percentage: outcome.pass_percentage,
            score: outcome.score,
            total_questions: outcome.total,
            percentage: outcome.percentage,
            passed: outcome.passed,
        }
    }
}
