#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of mock interview a session simulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "dsa"))]
    Dsa,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "system_design"))]
    SystemDesign,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "behavioral"))]
    Behavioral,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dsa => "dsa",
            Self::SystemDesign => "system_design",
            Self::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an interview session.
///
/// `InProgress` is the only initial state and `Completed` the only terminal
/// one. There is no cancellation; an expired session is finalized as
/// `Completed` by the server.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    #[default]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "in_progress"))]
    InProgress,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "completed"))]
    Completed,
}

impl InterviewStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: InterviewStatus) -> bool {
        matches!((self, next), (Self::InProgress, Self::Completed))
    }

    /// Analysis is only meaningful once the session has been submitted.
    pub fn can_analyze(&self) -> bool {
        self.is_terminal()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
