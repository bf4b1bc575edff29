use std::sync::Arc;

use evaluator::Evaluator;
use sea_orm::DatabaseConnection;

use crate::analyzer::{self, Analyzer, AnalyzerError};
use crate::config::AppConfig;
use crate::lifecycle::InterviewLifecycle;
use crate::storage::{DatabaseStorage, Storage};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub evaluator: Arc<dyn Evaluator>,
    pub lifecycle: Arc<InterviewLifecycle>,
    pub config: AppConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Evaluator(#[from] evaluator::EvaluatorError),
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

impl AppState {
    /// Wire the configured backends around a database connection.
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Result<Self, StateError> {
        let storage: Arc<dyn Storage> = Arc::new(DatabaseStorage::new(db));
        let evaluator = evaluator::from_config(&config.evaluator)?;
        let analyzer = analyzer::from_config(&config.analyzer)?;
        Ok(Self::with_backends(storage, evaluator, analyzer, config))
    }

    pub fn with_backends(
        storage: Arc<dyn Storage>,
        evaluator: Arc<dyn Evaluator>,
        analyzer: Arc<dyn Analyzer>,
        config: AppConfig,
    ) -> Self {
        let lifecycle = Arc::new(InterviewLifecycle::new(
            storage.clone(),
            analyzer,
            &config.interview,
        ));
        Self {
            storage,
            evaluator,
            lifecycle,
            config,
        }
    }
}
