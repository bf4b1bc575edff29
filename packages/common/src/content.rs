#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};

/// Area a pattern belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "dsa"))]
    Dsa,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "system_design"))]
    SystemDesign,
    /// Low-level (object-oriented) design.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "lld"))]
    Lld,
}

/// Learning level of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "snake_case")]
pub enum PatternDifficulty {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "beginner"))]
    Beginner,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "intermediate"))]
    Intermediate,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "advanced"))]
    Advanced,
}

/// Difficulty rating of a single practice problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "snake_case")]
pub enum ProblemDifficulty {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "easy"))]
    Easy,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "medium"))]
    Medium,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "hard"))]
    Hard,
}
