use std::collections::HashMap;

use serde::Deserialize;

/// Which evaluator implementation grades submissions.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorBackend {
    /// Fixed-probability grading without running the code.
    #[default]
    Mock,
    /// Runs the code in a child process per test case.
    Process,
}

/// How to run source code of one language.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LanguageRuntime {
    /// Executable to spawn, resolved through `PATH`.
    pub program: String,
    /// Arguments; `{source}` is replaced with the path of the written source file.
    #[serde(default)]
    pub args: Vec<String>,
    /// File name the submitted code is written to.
    pub source_file: String,
}

impl LanguageRuntime {
    pub fn new(program: &str, args: &[&str], source_file: &str) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            source_file: source_file.to_string(),
        }
    }
}

/// Evaluator configuration (`[evaluator]` section).
#[derive(Debug, Deserialize, Clone)]
pub struct EvaluatorConfig {
    #[serde(default)]
    pub backend: EvaluatorBackend,
    /// Chance that the mock backend passes a single test case. Default: 0.9.
    #[serde(default = "default_pass_probability")]
    pub pass_probability: f64,
    /// The mock backend pads problems up to this many cases. Default: 5.
    #[serde(default = "default_minimum_cases")]
    pub minimum_cases: usize,
    /// Wall-clock limit for one test case of the process backend. Default: 2000 ms.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Captured output beyond this size is truncated. Default: 4096 bytes.
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,
    /// Runtimes of the process backend, keyed by language name.
    #[serde(default = "default_runtimes")]
    pub runtimes: HashMap<String, LanguageRuntime>,
}

fn default_pass_probability() -> f64 {
    0.9
}
fn default_minimum_cases() -> usize {
    5
}
fn default_timeout_ms() -> u64 {
    2000
}
fn default_max_output_bytes() -> usize {
    4096
}
fn default_runtimes() -> HashMap<String, LanguageRuntime> {
    HashMap::from([
        (
            "javascript".to_string(),
            LanguageRuntime::new("node", &["{source}"], "main.js"),
        ),
        (
            "python".to_string(),
            LanguageRuntime::new("python3", &["{source}"], "main.py"),
        ),
    ])
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            backend: EvaluatorBackend::default(),
            pass_probability: default_pass_probability(),
            minimum_cases: default_minimum_cases(),
            timeout_ms: default_timeout_ms(),
            max_output_bytes: default_max_output_bytes(),
            runtimes: default_runtimes(),
        }
    }
}
