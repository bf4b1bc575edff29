use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use common::{TestCase, TestOutcome, TestResult, Verdict};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use crate::config::{EvaluatorConfig, LanguageRuntime};
use crate::error::EvaluatorError;
use crate::{EvaluationRequest, Evaluator};

const TIME_LIMIT_MESSAGE: &str = "Time limit exceeded";

/// Runs the submitted code once per test case, feeding the case input on stdin
/// and comparing stdout with the expected output.
///
/// Once a case exceeds the time limit the remaining cases are reported as not run.
///
/// Every case runs in a fresh process group that is killed when the case ends,
/// and at most `max_output_bytes` of each output stream is kept. There is no
/// filesystem, network or memory isolation: the program runs with the server's
/// privileges, so expose this backend only behind an OS-level sandbox.
#[derive(Debug, Clone)]
pub struct ProcessEvaluator {
    runtimes: HashMap<String, LanguageRuntime>,
    timeout: Duration,
    max_output_bytes: usize,
}

impl ProcessEvaluator {
    pub fn from_config(config: &EvaluatorConfig) -> Result<Self, EvaluatorError> {
        if config.timeout_ms == 0 {
            return Err(EvaluatorError::Config("timeout_ms must be positive".into()));
        }
        if config.runtimes.is_empty() {
            return Err(EvaluatorError::Config(
                "process backend needs at least one runtime".into(),
            ));
        }
        Ok(Self {
            runtimes: config.runtimes.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            max_output_bytes: config.max_output_bytes,
        })
    }

    async fn run_case(
        &self,
        runtime: &LanguageRuntime,
        workdir: &Path,
        source: &Path,
        case: &TestCase,
    ) -> Result<TestResult, EvaluatorError> {
        let source_arg = source.to_string_lossy();
        let args: Vec<String> = runtime
            .args
            .iter()
            .map(|a| a.replace("{source}", &source_arg))
            .collect();

        let mut command = Command::new(&runtime.program);
        command
            .args(&args)
            .current_dir(workdir)
            .env_clear()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(path) = std::env::var_os("PATH") {
            command.env("PATH", path);
        }

        // Each case runs in its own process group so a timeout can stop
        // anything the program forked.
        #[cfg(unix)]
        command.process_group(0);

        let mut child = command.spawn().map_err(|e| {
            EvaluatorError::Initialization(format!("failed to spawn {}: {e}", runtime.program))
        })?;
        let pid = child.id();

        if let Some(mut stdin) = child.stdin.take() {
            let mut input = case.input.clone().into_bytes();
            input.push(b'\n');
            // The program may exit without reading its input.
            tokio::spawn(async move {
                let _ = stdin.write_all(&input).await;
            });
        }

        let (stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
            (Some(stdout), Some(stderr)) => (stdout, stderr),
            _ => {
                return Err(EvaluatorError::Initialization(
                    "child output was not captured".into(),
                ));
            }
        };

        let limit = self.max_output_bytes;
        let run = async {
            tokio::try_join!(
                child.wait(),
                read_capped(stdout, limit),
                read_capped(stderr, limit),
            )
        };
        let finished = tokio::time::timeout(self.timeout, run).await;

        kill_process_group(pid);
        let _ = child.start_kill();
        let _ = child.wait().await;

        let (status, stdout, stderr) = match finished {
            Ok(output) => output?,
            Err(_) => {
                debug!(input = %case.input, "Test case exceeded the time limit");
                return Ok(TestResult::new(case, TIME_LIMIT_MESSAGE, TestOutcome::TimedOut));
            }
        };
        let output = std::process::Output {
            status,
            stdout,
            stderr,
        };

        if !output.status.success() {
            let stderr = truncate_output(&output.stderr, self.max_output_bytes);
            let actual = if stderr.trim().is_empty() {
                format!("Process exited with {}", output.status)
            } else {
                stderr
            };
            return Ok(TestResult::new(case, actual, TestOutcome::RuntimeError));
        }

        let actual = normalize_output(&truncate_output(&output.stdout, self.max_output_bytes));
        let outcome = if actual == normalize_output(&case.expected_output) {
            TestOutcome::Passed
        } else {
            TestOutcome::WrongAnswer
        };
        Ok(TestResult::new(case, actual, outcome))
    }
}

/// Trim trailing whitespace on every line and drop trailing blank lines.
pub fn normalize_output(output: &str) -> String {
    output
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end_matches('\n')
        .to_string()
}

/// Keep at most `limit` bytes of a stream and discard the rest, so a chatty
/// program neither blocks on a full pipe nor grows server memory.
async fn read_capped<R>(mut reader: R, limit: usize) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    (&mut reader).take(limit as u64).read_to_end(&mut buf).await?;
    tokio::io::copy(&mut reader, &mut tokio::io::sink()).await?;
    Ok(buf)
}

#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    let Some(pgid) = pid.and_then(|p| libc::pid_t::try_from(p).ok()) else {
        return;
    };
    // SAFETY: killpg only sends a signal; an already empty group yields ESRCH.
    unsafe {
        libc::killpg(pgid, libc::SIGKILL);
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}

fn truncate_output(bytes: &[u8], limit: usize) -> String {
    let mut text = String::from_utf8_lossy(bytes).into_owned();
    if text.len() > limit {
        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

#[async_trait]
impl Evaluator for ProcessEvaluator {
    fn name(&self) -> &'static str {
        "process"
    }

    fn supports(&self, language: &str) -> bool {
        self.runtimes.contains_key(language)
    }

    #[instrument(skip(self, request), fields(language = %request.language, cases = request.test_cases.len()))]
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<Verdict, EvaluatorError> {
        let runtime = self
            .runtimes
            .get(&request.language)
            .ok_or_else(|| EvaluatorError::UnsupportedLanguage(request.language.clone()))?;
        if request.test_cases.is_empty() {
            return Err(EvaluatorError::NoTestCases);
        }

        let workdir = tempfile::tempdir()?;
        let source = workdir.path().join(&runtime.source_file);
        tokio::fs::write(&source, &request.code).await?;

        let mut results = Vec::with_capacity(request.test_cases.len());
        let mut timed_out = false;
        for case in &request.test_cases {
            if timed_out {
                results.push(TestResult::new(case, "", TestOutcome::NotRun));
                continue;
            }
            let result = self.run_case(runtime, workdir.path(), &source, case).await?;
            if result.outcome == TestOutcome::TimedOut {
                warn!("Skipping remaining test cases after a timeout");
                timed_out = true;
            }
            results.push(result);
        }

        Ok(Verdict::from_results(results))
    }
}
