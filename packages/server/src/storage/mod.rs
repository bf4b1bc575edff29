//! Persistence behind an object-safe trait so handlers never hold a connection.

mod database;
mod error;

pub use database::DatabaseStorage;
pub use error::StorageError;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{InterviewType, Verdict};

use crate::entity::{interview, pattern, problem, submission, user};

/// Profile fields taken from verified session claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub user_id: String,
    pub problem_id: i32,
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct NewInterview {
    pub user_id: String,
    pub interview_type: InterviewType,
    pub expires_at: DateTime<Utc>,
}

/// Everything written when an interview moves to `completed`.
#[derive(Debug, Clone, Default)]
pub struct InterviewCompletion {
    pub feedback: Option<String>,
    pub recording_url: Option<String>,
    pub code: Option<String>,
    pub notes: Option<String>,
    pub whiteboard_data: Option<String>,
    pub duration_seconds: i32,
    /// `None` when the session was finalized without a submit.
    pub submitted_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait Storage: Send + Sync {
    /// All patterns, ordered by id.
    async fn list_patterns(&self) -> Result<Vec<pattern::Model>, StorageError>;
    async fn get_pattern(&self, id: i32) -> Result<Option<pattern::Model>, StorageError>;
    /// Problems of one pattern, ordered by id. Unknown patterns yield an empty list.
    async fn list_problems_for_pattern(
        &self,
        pattern_id: i32,
    ) -> Result<Vec<problem::Model>, StorageError>;
    async fn get_problem(&self, id: i32) -> Result<Option<problem::Model>, StorageError>;

    /// Insert the user or refresh its profile fields.
    async fn upsert_user(&self, profile: &UserProfile) -> Result<user::Model, StorageError>;

    /// Insert a `pending` submission.
    async fn create_submission(
        &self,
        new: NewSubmission,
    ) -> Result<submission::Model, StorageError>;
    /// Grade a pending submission. Returns `false` when it was already graded.
    async fn record_verdict(&self, id: i32, verdict: &Verdict) -> Result<bool, StorageError>;
    /// A user's submissions, newest first.
    async fn list_submissions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<submission::Model>, StorageError>;

    /// Insert an `in_progress` interview.
    async fn create_interview(&self, new: NewInterview) -> Result<interview::Model, StorageError>;
    async fn get_interview(&self, id: i32) -> Result<Option<interview::Model>, StorageError>;
    /// Move an interview from `in_progress` to `completed`.
    /// Returns `false` when another request completed it first.
    async fn complete_interview(
        &self,
        id: i32,
        completion: InterviewCompletion,
    ) -> Result<bool, StorageError>;
    /// Store the analysis of a completed interview next to, not over, the
    /// submitted feedback. Returns `false` when it was already analyzed.
    async fn record_analysis(
        &self,
        id: i32,
        feedback: &str,
        score: i32,
    ) -> Result<bool, StorageError>;
    /// A user's interviews, newest first.
    async fn list_interviews_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<interview::Model>, StorageError>;
}
