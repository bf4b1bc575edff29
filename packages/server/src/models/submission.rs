use chrono::{DateTime, Utc};
use common::{SubmissionStatus, TestResult};
use serde::Serialize;

/// A stored, graded (or pending) submission.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub problem_id: i32,
    #[schema(example = "javascript")]
    pub language: String,
    pub code: String,
    pub status: SubmissionStatus,
    pub feedback: Option<String>,
    #[schema(example = 80.0)]
    pub score: Option<f64>,
    pub test_results: Vec<TestResult>,
    pub created_at: DateTime<Utc>,
    pub graded_at: Option<DateTime<Utc>>,
}

impl From<crate::entity::submission::Model> for SubmissionResponse {
    fn from(m: crate::entity::submission::Model) -> Self {
        Self {
            id: m.id,
            problem_id: m.problem_id,
            language: m.language,
            code: m.code,
            status: m.status,
            feedback: m.feedback,
            score: m.score,
            test_results: m
                .test_results
                .map(super::shared::json_or_default)
                .unwrap_or_default(),
            created_at: m.created_at,
            graded_at: m.graded_at,
        }
    }
}
