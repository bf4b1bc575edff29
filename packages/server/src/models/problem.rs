use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use common::{ProblemDifficulty, TestCase, Verdict};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::shared::{json_or_default, validate_text_size};

/// A practice problem with its declared test cases.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub pattern_id: Option<i32>,
    #[schema(example = "Pair Sum")]
    pub title: String,
    #[schema(example = "Find two numbers that add up to target.")]
    pub description: String,
    pub difficulty: ProblemDifficulty,
    /// Starter source keyed by language.
    #[schema(example = json!({"javascript": "function pairSum(arr, target) {\n  // Your code here\n}"}))]
    pub starter_code: BTreeMap<String, String>,
    pub test_cases: Vec<TestCase>,
    #[schema(example = "O(n)")]
    pub expected_time_complexity: Option<String>,
    #[schema(example = "O(1)")]
    pub expected_space_complexity: Option<String>,
    pub edge_cases: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entity::problem::Model> for ProblemResponse {
    fn from(m: crate::entity::problem::Model) -> Self {
        Self {
            id: m.id,
            pattern_id: m.pattern_id,
            title: m.title,
            description: m.description,
            difficulty: m.difficulty,
            starter_code: json_or_default(m.starter_code),
            test_cases: json_or_default(m.test_cases),
            expected_time_complexity: m.expected_time_complexity,
            expected_space_complexity: m.expected_space_complexity,
            edge_cases: json_or_default(m.edge_cases),
            created_at: m.created_at,
        }
    }
}

/// Request body for grading code against a problem.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubmitCodeRequest {
    #[schema(example = "function pairSum(arr, target) { return [2, 3]; }")]
    pub code: String,
    #[schema(example = "javascript")]
    pub language: String,
}

/// The verdict, plus the id of the stored submission for signed-in callers.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCodeResponse {
    #[serde(flatten)]
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 12)]
    pub submission_id: Option<i32>,
}

pub fn validate_submit_code(req: &SubmitCodeRequest) -> Result<(), AppError> {
    if req.code.trim().is_empty() {
        return Err(AppError::Validation("Code must not be empty".into()));
    }
    validate_text_size("code", &req.code)?;
    if req.language.trim().is_empty() {
        return Err(AppError::Validation("Language must not be empty".into()));
    }
    Ok(())
}
