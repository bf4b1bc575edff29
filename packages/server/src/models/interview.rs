use chrono::{DateTime, Utc};
use common::{InterviewStatus, InterviewType};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::lifecycle::InterviewSubmission;

use super::shared::validate_text_size;

/// Request body for starting an interview.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateInterviewRequest {
    #[serde(rename = "type", alias = "interviewType")]
    pub interview_type: InterviewType,
}

/// Artifacts captured during the session. Every field is optional.
#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInterviewRequest {
    #[schema(example = "User completed interview simulation.")]
    pub feedback: Option<String>,
    pub recording_url: Option<String>,
    pub code: Option<String>,
    pub notes: Option<String>,
    /// Whiteboard snapshot as an image data URL.
    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub whiteboard_data: Option<String>,
}

impl From<SubmitInterviewRequest> for InterviewSubmission {
    fn from(req: SubmitInterviewRequest) -> Self {
        Self {
            feedback: req.feedback,
            recording_url: req.recording_url,
            code: req.code,
            notes: req.notes,
            whiteboard_data: req.whiteboard_data,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub user_id: String,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub status: InterviewStatus,
    pub recording_url: Option<String>,
    pub feedback: Option<String>,
    /// Set once the session has been analyzed.
    #[schema(example = 85)]
    pub score: Option<i32>,
    /// Analyzer feedback, set together with `score`.
    pub analysis_feedback: Option<String>,
    #[schema(example = 1800)]
    pub duration_seconds: Option<i32>,
    pub code: Option<String>,
    pub notes: Option<String>,
    pub whiteboard_data: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub analyzed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entity::interview::Model> for InterviewResponse {
    fn from(m: crate::entity::interview::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            interview_type: m.interview_type,
            status: m.status,
            recording_url: m.recording_url,
            feedback: m.feedback,
            score: m.score,
            analysis_feedback: m.analysis_feedback,
            duration_seconds: m.duration_seconds,
            code: m.code,
            notes: m.notes,
            whiteboard_data: m.whiteboard_data,
            expires_at: m.expires_at,
            submitted_at: m.submitted_at,
            analyzed_at: m.analyzed_at,
            created_at: m.created_at,
        }
    }
}

pub fn validate_submit_interview(req: &SubmitInterviewRequest) -> Result<(), AppError> {
    for (field, value) in [
        ("feedback", &req.feedback),
        ("code", &req.code),
        ("notes", &req.notes),
    ] {
        if let Some(value) = value {
            validate_text_size(field, value)?;
        }
    }
    if let Some(url) = &req.recording_url
        && !(url.starts_with("https://") || url.starts_with("http://"))
    {
        return Err(AppError::Validation(
            "recordingUrl must be an http(s) URL".into(),
        ));
    }
    if let Some(data) = &req.whiteboard_data
        && !data.starts_with("data:image/")
    {
        return Err(AppError::Validation(
            "whiteboardData must be an image data URL".into(),
        ));
    }
    Ok(())
}
