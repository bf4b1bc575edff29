use common::ProblemDifficulty;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "problem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub pattern_id: Option<i32>,
    #[sea_orm(belongs_to, from = "pattern_id", to = "id")]
    pub pattern: HasOne<super::pattern::Entity>,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub difficulty: ProblemDifficulty,
    /// Language name to starter source, as a JSON object.
    #[sea_orm(column_type = "Json")]
    pub starter_code: Json,
    /// Ordered JSON array of `{input, output}` objects.
    #[sea_orm(column_type = "Json")]
    pub test_cases: Json,
    pub expected_time_complexity: Option<String>,
    pub expected_space_complexity: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub edge_cases: Json,

    #[sea_orm(has_many)]
    pub submissions: HasMany<super::submission::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
