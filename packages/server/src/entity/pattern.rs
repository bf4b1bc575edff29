use common::{PatternCategory, PatternDifficulty};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pattern")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: PatternCategory,
    pub difficulty: PatternDifficulty,
    #[sea_orm(column_type = "Text", nullable)]
    pub intuition: Option<String>,
    /// Ordered recognition questions, stored as a JSON array of strings.
    #[sea_orm(column_type = "Json")]
    pub checklist: Json,

    #[sea_orm(has_many)]
    pub problems: HasMany<super::problem::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
