use serde::{Deserialize, Serialize};

use crate::SubmissionStatus;

/// Feedback returned when every test case passed.
pub const ALL_PASSED_FEEDBACK: &str =
    "Excellent pattern recognition! Your solution is optimal and handles all edge cases.";

/// A declared test case of a problem.
///
/// Stored (and served) as `{"input": ..., "output": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestCase {
    #[schema(example = "[1,2,3], 5")]
    pub input: String,
    #[serde(rename = "output", alias = "expected_output")]
    #[schema(example = "[2,3]")]
    pub expected_output: String,
}

impl TestCase {
    pub fn new(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
        }
    }
}

/// How a single test case ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TestOutcome {
    Passed,
    WrongAnswer,
    /// The program crashed or exited with a non-zero status.
    RuntimeError,
    TimedOut,
    /// Skipped because an earlier case exhausted the time box.
    NotRun,
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Result of running one test case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    pub outcome: TestOutcome,
}

impl TestResult {
    pub fn new(case: &TestCase, actual: impl Into<String>, outcome: TestOutcome) -> Self {
        Self {
            input: case.input.clone(),
            expected: case.expected_output.clone(),
            actual: actual.into(),
            passed: outcome.is_passed(),
            outcome,
        }
    }
}

/// Structured result of grading a submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub status: SubmissionStatus,
    /// Percentage of passed test cases, in `[0, 100]`.
    #[schema(example = 80.0)]
    pub score: f64,
    pub test_results: Vec<TestResult>,
    pub feedback: String,
}

impl Verdict {
    /// Build a verdict from per-case results.
    ///
    /// An empty result list is graded as failed with a score of zero.
    pub fn from_results(test_results: Vec<TestResult>) -> Self {
        let total = test_results.len();
        let passed = test_results.iter().filter(|r| r.passed).count();

        let all_passed = total > 0 && passed == total;
        let score = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64 * 100.0
        };
        let feedback = if all_passed {
            ALL_PASSED_FEEDBACK.to_string()
        } else {
            partial_feedback(passed, total)
        };

        Self {
            status: if all_passed {
                SubmissionStatus::Passed
            } else {
                SubmissionStatus::Failed
            },
            score,
            test_results,
            feedback,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.test_results.iter().filter(|r| r.passed).count()
    }
}

fn partial_feedback(passed: usize, total: usize) -> String {
    format!(
        "You're close! Your solution passed {passed} out of {total} cases. Consider the boundary conditions."
    )
}
