use chrono::{DateTime, Utc};
use common::{PatternCategory, PatternDifficulty};
use serde::Serialize;

use super::shared::json_or_default;

/// A reusable problem-solving pattern.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatternResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Two Pointers")]
    pub title: String,
    #[schema(example = "Use two pointers to iterate through data structures.")]
    pub description: String,
    pub category: PatternCategory,
    pub difficulty: PatternDifficulty,
    #[schema(example = "Efficiently search pairs in sorted arrays.")]
    pub intuition: Option<String>,
    /// Recognition questions, in order.
    #[schema(example = json!(["Sorted array?", "Find pair?"]))]
    pub checklist: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entity::pattern::Model> for PatternResponse {
    fn from(m: crate::entity::pattern::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            category: m.category,
            difficulty: m.difficulty,
            intuition: m.intuition,
            checklist: json_or_default(m.checklist),
            created_at: m.created_at,
        }
    }
}
