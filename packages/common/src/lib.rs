pub mod content;
pub mod interview;
pub mod submission_status;
pub mod verdict;

pub use content::{PatternCategory, PatternDifficulty, ProblemDifficulty};
pub use interview::{InterviewStatus, InterviewType};
pub use submission_status::SubmissionStatus;
pub use verdict::{TestCase, TestOutcome, TestResult, Verdict};
