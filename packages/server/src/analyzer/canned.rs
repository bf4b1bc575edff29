use async_trait::async_trait;
use common::InterviewType;

use super::{Analysis, Analyzer, AnalyzerError, InterviewArtifacts};

const DSA_FEEDBACK: &str = "Your communication was clear. You identified the Two Pointer approach correctly. However, you missed the space complexity optimization.";
const SYSTEM_DESIGN_FEEDBACK: &str = "You scoped the requirements before drawing components. Spend more time on data partitioning and failure handling.";
const BEHAVIORAL_FEEDBACK: &str = "Your answers followed a clear situation, action and result structure. Quantify the impact of your actions more often.";
const EMPTY_SESSION_FEEDBACK: &str =
    "No code, notes or whiteboard were captured during this session, so there was nothing to assess.";

/// Fixed feedback per interview type.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedAnalyzer;

#[async_trait]
impl Analyzer for CannedAnalyzer {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn analyze(&self, artifacts: &InterviewArtifacts) -> Result<Analysis, AnalyzerError> {
        if !artifacts.has_content() {
            return Ok(Analysis {
                feedback: EMPTY_SESSION_FEEDBACK.to_string(),
                score: 0,
            });
        }

        let (feedback, score) = match artifacts.interview_type {
            InterviewType::Dsa => (DSA_FEEDBACK, 85),
            InterviewType::SystemDesign => (SYSTEM_DESIGN_FEEDBACK, 78),
            InterviewType::Behavioral => (BEHAVIORAL_FEEDBACK, 80),
        };
        Ok(Analysis {
            feedback: feedback.to_string(),
            score,
        })
    }
}
