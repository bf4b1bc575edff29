//! Grading of code submissions against a problem's test cases.
//!
//! The [`Evaluator`] trait hides how a submission is judged. Two backends exist:
//! [`MockEvaluator`] decides every case with a fixed probability (seeded from the
//! submission, so repeated submissions get the same verdict) and
//! [`ProcessEvaluator`] runs the code in a child process per case with a time box.

pub mod config;
pub mod error;
pub mod mock;
pub mod process;

use std::sync::Arc;

use async_trait::async_trait;
use common::{TestCase, Verdict};

pub use config::{EvaluatorBackend, EvaluatorConfig, LanguageRuntime};
pub use error::EvaluatorError;
pub use mock::MockEvaluator;
pub use process::ProcessEvaluator;

/// A submission to grade.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub language: String,
    pub code: String,
    /// Declared test cases, in problem order.
    pub test_cases: Vec<TestCase>,
}

#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Whether submissions in `language` can be graded.
    fn supports(&self, language: &str) -> bool;

    async fn evaluate(&self, request: &EvaluationRequest) -> Result<Verdict, EvaluatorError>;
}

/// Build the evaluator selected by `config.backend`.
pub fn from_config(config: &EvaluatorConfig) -> Result<Arc<dyn Evaluator>, EvaluatorError> {
    match config.backend {
        EvaluatorBackend::Mock => Ok(Arc::new(MockEvaluator::from_config(config)?)),
        EvaluatorBackend::Process => Ok(Arc::new(ProcessEvaluator::from_config(config)?)),
    }
}
