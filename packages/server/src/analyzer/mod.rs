//! Feedback for completed interview sessions.

mod canned;
mod remote;

pub use canned::CannedAnalyzer;
pub use remote::RemoteAnalyzer;

use std::sync::Arc;

use async_trait::async_trait;
use common::InterviewType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{AnalyzerBackend, AnalyzerConfig};
use crate::entity::interview;

/// What an interview session captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewArtifacts {
    pub interview_type: InterviewType,
    pub code: Option<String>,
    pub notes: Option<String>,
    /// Whiteboard snapshot as a data URL.
    pub whiteboard_image: Option<String>,
    pub duration_seconds: Option<i32>,
}

impl InterviewArtifacts {
    /// Whether any code, notes or whiteboard snapshot were captured.
    pub fn has_content(&self) -> bool {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.code) || filled(&self.notes) || filled(&self.whiteboard_image)
    }
}

impl From<&interview::Model> for InterviewArtifacts {
    fn from(m: &interview::Model) -> Self {
        Self {
            interview_type: m.interview_type,
            code: m.code.clone(),
            notes: m.notes.clone(),
            whiteboard_image: m.whiteboard_data.clone(),
            duration_seconds: m.duration_seconds,
        }
    }
}

/// Feedback text and a 0-100 score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Analysis {
    #[schema(example = "Your communication was clear.")]
    pub feedback: String,
    #[schema(example = 85)]
    pub score: i32,
}

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Invalid analyzer configuration: {0}")]
    Config(String),

    #[error("analyzer request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("analyzer returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(&self, artifacts: &InterviewArtifacts) -> Result<Analysis, AnalyzerError>;
}

/// Build the analyzer selected by `config.backend`.
pub fn from_config(config: &AnalyzerConfig) -> Result<Arc<dyn Analyzer>, AnalyzerError> {
    match config.backend {
        AnalyzerBackend::Canned => Ok(Arc::new(CannedAnalyzer)),
        AnalyzerBackend::Remote => Ok(Arc::new(RemoteAnalyzer::from_config(config)?)),
    }
}
