use common::SubmissionStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: String,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub problem_id: i32,
    #[sea_orm(belongs_to, from = "problem_id", to = "id")]
    pub problem: HasOne<super::problem::Entity>,

    pub language: String,
    #[sea_orm(column_type = "Text")]
    pub code: String,
    /// `pending` until graded, then `passed` or `failed` exactly once.
    pub status: SubmissionStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub score: Option<f64>,
    /// Per-case results of the verdict, as a JSON array.
    #[sea_orm(column_type = "Json", nullable)]
    pub test_results: Option<Json>,

    pub created_at: DateTimeUtc,
    pub graded_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}
