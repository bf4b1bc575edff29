use common::{SubmissionStatus, TestCase, Verdict};
use evaluator::{EvaluationRequest, Evaluator};
use tracing::{error, info, instrument, warn};

use crate::entity::problem;
use crate::error::AppError;
use crate::storage::{NewSubmission, Storage, UserProfile};

/// Feedback stored on a submission whose evaluation broke down.
pub const EVALUATION_FAILED_FEEDBACK: &str = "Evaluation failed";

/// Result of grading one submission.
#[derive(Debug)]
pub struct GradeOutcome {
    pub verdict: Verdict,
    /// Set when the submission was stored for a signed-in user.
    pub submission_id: Option<i32>,
}

/// Grades code against a problem and records the verdict for signed-in users.
pub struct Grader<'a> {
    storage: &'a dyn Storage,
    evaluator: &'a dyn Evaluator,
}

impl<'a> Grader<'a> {
    pub fn new(storage: &'a dyn Storage, evaluator: &'a dyn Evaluator) -> Self {
        Self { storage, evaluator }
    }

    #[instrument(skip(self, problem, user, code), fields(problem_id = problem.id, evaluator = self.evaluator.name()))]
    pub async fn grade(
        &self,
        problem: &problem::Model,
        user: Option<&UserProfile>,
        language: &str,
        code: &str,
    ) -> Result<GradeOutcome, AppError> {
        if !self.evaluator.supports(language) {
            return Err(AppError::Validation(format!(
                "Unsupported language: {language}"
            )));
        }

        let test_cases: Vec<TestCase> = serde_json::from_value(problem.test_cases.clone())
            .map_err(|e| {
                AppError::Internal(format!("Problem {} has malformed test cases: {e}", problem.id))
            })?;

        let submission_id = match user {
            Some(user) => {
                self.storage.upsert_user(user).await?;
                let submission = self
                    .storage
                    .create_submission(NewSubmission {
                        user_id: user.id.clone(),
                        problem_id: problem.id,
                        language: language.to_string(),
                        code: code.to_string(),
                    })
                    .await?;
                Some(submission.id)
            }
            None => None,
        };

        let request = EvaluationRequest {
            language: language.to_string(),
            code: code.to_string(),
            test_cases,
        };

        let verdict = match self.evaluator.evaluate(&request).await {
            Ok(verdict) => verdict,
            Err(e) => {
                if let Some(id) = submission_id {
                    let feedback = if e.is_rejection() {
                        e.to_string()
                    } else {
                        EVALUATION_FAILED_FEEDBACK.to_string()
                    };
                    self.storage.record_verdict(id, &failed_verdict(feedback)).await?;
                }
                if !e.is_rejection() {
                    error!("Evaluation failed: {e}");
                }
                return Err(e.into());
            }
        };

        if let Some(id) = submission_id
            && !self.storage.record_verdict(id, &verdict).await?
        {
            warn!(submission_id = id, "Submission was already graded");
        }

        info!(
            status = %verdict.status,
            score = verdict.score,
            cases = verdict.test_results.len(),
            "Submission graded"
        );
        Ok(GradeOutcome {
            verdict,
            submission_id,
        })
    }
}

fn failed_verdict(feedback: String) -> Verdict {
    Verdict {
        status: SubmissionStatus::Failed,
        score: 0.0,
        test_results: Vec::new(),
        feedback,
    }
}
