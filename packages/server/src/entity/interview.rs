use common::{InterviewStatus, InterviewType};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interview")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: String,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    #[sea_orm(column_name = "type")]
    pub interview_type: InterviewType,
    /// `in_progress` until submitted (or expired), then `completed` exactly once.
    pub status: InterviewStatus,

    pub recording_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    /// Set by analysis only, together with `analysis_feedback`.
    pub score: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub analysis_feedback: Option<String>,
    pub duration_seconds: Option<i32>,

    #[sea_orm(column_type = "Text", nullable)]
    pub code: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// Whiteboard snapshot as a data URL.
    #[sea_orm(column_type = "Text", nullable)]
    pub whiteboard_data: Option<String>,

    pub expires_at: DateTimeUtc,
    pub submitted_at: Option<DateTimeUtc>,
    pub analyzed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
