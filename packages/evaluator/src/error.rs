use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluatorError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Problem has no test cases to run")]
    NoTestCases,

    #[error("Invalid evaluator configuration: {0}")]
    Config(String),

    #[error("Sandbox initialization failed: {0}")]
    Initialization(String),

    #[error("execution error: {0}")]
    Execution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EvaluatorError {
    /// Errors caused by the submission itself rather than the evaluator.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage(_) | Self::NoTestCases)
    }
}
