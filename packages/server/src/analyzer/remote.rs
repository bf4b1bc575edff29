use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{Analysis, Analyzer, AnalyzerError, InterviewArtifacts};
use crate::config::AnalyzerConfig;

#[derive(Deserialize)]
struct RemoteResponse {
    feedback: String,
    score: f64,
}

/// Sends the artifacts to an external analysis service and expects
/// `{"feedback": ..., "score": ...}` back.
pub struct RemoteAnalyzer {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl RemoteAnalyzer {
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let url = config
            .url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AnalyzerError::Config("analyzer.url is required".into()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Analyzer for RemoteAnalyzer {
    fn name(&self) -> &'static str {
        "remote"
    }

    #[instrument(skip(self, artifacts), fields(url = %self.url, interview_type = %artifacts.interview_type))]
    async fn analyze(&self, artifacts: &InterviewArtifacts) -> Result<Analysis, AnalyzerError> {
        let mut request = self.client.post(&self.url).json(artifacts);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?.error_for_status()?;
        let body: RemoteResponse = response.json().await?;
        if !body.score.is_finite() {
            return Err(AnalyzerError::InvalidResponse(format!(
                "score is not a number: {}",
                body.score
            )));
        }

        let score = body.score.round().clamp(0.0, 100.0) as i32;
        debug!(score, "Remote analysis received");
        Ok(Analysis {
            feedback: body.feedback,
            score,
        })
    }
}
