use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use common::{InterviewStatus, InterviewType};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::analyzer::{Analysis, Analyzer, AnalyzerError, InterviewArtifacts};
use crate::config::InterviewConfig;
use crate::entity::interview;
use crate::storage::{InterviewCompletion, NewInterview, Storage, StorageError, UserProfile};

/// Feedback stored when a submit carries none.
pub const DEFAULT_SUBMIT_FEEDBACK: &str = "User completed interview simulation.";
/// Feedback stored on sessions finalized after their deadline.
pub const EXPIRED_FEEDBACK: &str = "Session expired before submission.";

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Interview not found")]
    NotFound,

    #[error("interview belongs to another user")]
    NotOwner,

    #[error("Interview session has expired")]
    SessionExpired,

    #[error("Interview must be submitted before it can be analyzed")]
    NotSubmitted,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

/// Artifacts sent with a submit.
#[derive(Debug, Clone, Default)]
pub struct InterviewSubmission {
    pub feedback: Option<String>,
    pub recording_url: Option<String>,
    pub code: Option<String>,
    pub notes: Option<String>,
    pub whiteboard_data: Option<String>,
}

/// Drives interviews through `in_progress -> completed` and analysis.
///
/// Deadlines are enforced here: a session submitted after
/// `expires_at + grace` is finalized without its artifacts.
pub struct InterviewLifecycle {
    storage: Arc<dyn Storage>,
    analyzer: Arc<dyn Analyzer>,
    duration: TimeDelta,
    grace: TimeDelta,
}

impl InterviewLifecycle {
    pub fn new(
        storage: Arc<dyn Storage>,
        analyzer: Arc<dyn Analyzer>,
        config: &InterviewConfig,
    ) -> Self {
        Self {
            storage,
            analyzer,
            duration: TimeDelta::seconds(config.duration_secs),
            grace: TimeDelta::seconds(config.grace_secs),
        }
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn create(
        &self,
        user: &UserProfile,
        interview_type: InterviewType,
    ) -> Result<interview::Model, LifecycleError> {
        self.storage.upsert_user(user).await?;

        let model = self
            .storage
            .create_interview(NewInterview {
                user_id: user.id.clone(),
                interview_type,
                expires_at: Utc::now() + self.duration,
            })
            .await?;

        info!(interview_id = model.id, "Interview started");
        Ok(model)
    }

    pub async fn get(&self, user_id: &str, id: i32) -> Result<interview::Model, LifecycleError> {
        self.load_owned(user_id, id).await
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<interview::Model>, LifecycleError> {
        Ok(self.storage.list_interviews_for_user(user_id).await?)
    }

    /// Complete a session with its artifacts.
    ///
    /// Submitting a completed session returns it unchanged.
    #[instrument(skip(self, submission))]
    pub async fn submit(
        &self,
        user_id: &str,
        id: i32,
        submission: InterviewSubmission,
    ) -> Result<interview::Model, LifecycleError> {
        let model = self.load_owned(user_id, id).await?;
        if !model.status.can_transition_to(InterviewStatus::Completed) {
            return Ok(model);
        }

        let now = Utc::now();
        if self.is_expired(&model, now) {
            self.finalize_expired(&model).await?;
            return Err(LifecycleError::SessionExpired);
        }

        let applied = self
            .storage
            .complete_interview(
                id,
                InterviewCompletion {
                    feedback: Some(
                        submission
                            .feedback
                            .unwrap_or_else(|| DEFAULT_SUBMIT_FEEDBACK.to_string()),
                    ),
                    recording_url: submission.recording_url,
                    code: submission.code,
                    notes: submission.notes,
                    whiteboard_data: submission.whiteboard_data,
                    duration_seconds: self.elapsed_seconds(&model, now),
                    submitted_at: Some(now),
                },
            )
            .await?;
        if applied {
            info!("Interview completed");
        }

        self.load_owned(user_id, id).await
    }

    /// Analyze a completed session. The first analysis is stored and returned
    /// on every later call.
    #[instrument(skip(self))]
    pub async fn analyze(&self, user_id: &str, id: i32) -> Result<Analysis, LifecycleError> {
        let mut model = self.load_owned(user_id, id).await?;

        if !model.status.can_analyze() {
            if !self.is_expired(&model, Utc::now()) {
                return Err(LifecycleError::NotSubmitted);
            }
            self.finalize_expired(&model).await?;
            model = self.load_owned(user_id, id).await?;
        }

        if let Some(stored) = stored_analysis(&model) {
            return Ok(stored);
        }

        let analysis = self
            .analyzer
            .analyze(&InterviewArtifacts::from(&model))
            .await?;

        let applied = self
            .storage
            .record_analysis(id, &analysis.feedback, analysis.score)
            .await?;
        if !applied {
            // A concurrent request stored its analysis first.
            let model = self.load_owned(user_id, id).await?;
            return Ok(stored_analysis(&model).unwrap_or(analysis));
        }

        info!(score = analysis.score, analyzer = self.analyzer.name(), "Interview analyzed");
        Ok(analysis)
    }

    async fn load_owned(&self, user_id: &str, id: i32) -> Result<interview::Model, LifecycleError> {
        let model = self
            .storage
            .get_interview(id)
            .await?
            .ok_or(LifecycleError::NotFound)?;
        if model.user_id != user_id {
            return Err(LifecycleError::NotOwner);
        }
        Ok(model)
    }

    fn is_expired(&self, model: &interview::Model, now: DateTime<Utc>) -> bool {
        now > model.expires_at + self.grace
    }

    fn elapsed_seconds(&self, model: &interview::Model, now: DateTime<Utc>) -> i32 {
        capped_elapsed(model.created_at, now, self.duration)
    }

    async fn finalize_expired(&self, model: &interview::Model) -> Result<(), LifecycleError> {
        warn!(interview_id = model.id, "Finalizing expired interview");
        self.storage
            .complete_interview(
                model.id,
                InterviewCompletion {
                    feedback: Some(EXPIRED_FEEDBACK.to_string()),
                    duration_seconds: capped_elapsed(
                        model.created_at,
                        model.expires_at,
                        self.duration,
                    ),
                    ..Default::default()
                },
            )
            .await?;
        Ok(())
    }
}

fn stored_analysis(model: &interview::Model) -> Option<Analysis> {
    model.analyzed_at?;
    Some(Analysis {
        feedback: model.analysis_feedback.clone().unwrap_or_default(),
        score: model.score?,
    })
}

/// Seconds between `start` and `end`, within `0..=limit`.
fn capped_elapsed(start: DateTime<Utc>, end: DateTime<Utc>, limit: TimeDelta) -> i32 {
    let elapsed = (end - start).num_seconds();
    let limit = limit.num_seconds().max(0);
    i32::try_from(elapsed.clamp(0, limit)).unwrap_or(i32::MAX)
}
