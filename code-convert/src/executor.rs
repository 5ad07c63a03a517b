use tokio::time::Duration;
use tracing::debug;

use crate::{
    error::Error,
    languages::runner_for,
    sandbox::Sandbox,
    types::{ExecutionResult, ExecutionStatus, Language},
};

/// Runs translated code through a fresh sandbox.
///
/// Compile failures, non-zero exits, and timeouts are all reported inside the
/// `ExecutionResult`; `Err` is reserved for infrastructure problems (missing
/// toolchain, temp-file or spawn failure) that indicate a misconfigured
/// environment rather than a bug in the submitted code.
#[derive(Default)]
pub struct CodeExecutor {}

impl CodeExecutor {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn execute(
        &self,
        code: &str,
        language: Language,
        timeout: Duration,
    ) -> Result<ExecutionResult, Error> {
        let Some(runner) = runner_for(language) else {
            return Ok(ExecutionResult::unsupported(language));
        };

        let missing: Vec<_> = runner
            .required_tools()
            .iter()
            .filter(|tool| which::which(tool).is_err())
            .map(|s| (*s).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Sandbox(format!(
                "Missing required tools: {}",
                missing.join(", ")
            )));
        }

        let sandbox = Sandbox::create().await?;
        sandbox.write_source(runner.source_file(), code).await?;

        if let Some(build) = runner.compile(&sandbox, timeout).await? {
            if build.timed_out {
                return Ok(ExecutionResult {
                    status: ExecutionStatus::Timeout,
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code: None,
                    timed_out: true,
                });
            }
            debug!("Compilation failed for {}", language);
            return Ok(ExecutionResult {
                status: ExecutionStatus::CompileError,
                stdout: String::new(),
                stderr: build.stderr,
                exit_code: build.exit_code,
                timed_out: false,
            });
        }

        let output = sandbox
            .run(&runner.run_command(), &runner.run_args(), timeout)
            .await?;

        let status = if output.timed_out {
            ExecutionStatus::Timeout
        } else if output.exit_code == Some(0) {
            ExecutionStatus::Success
        } else {
            ExecutionStatus::RuntimeError
        };

        Ok(ExecutionResult {
            status,
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.exit_code,
            timed_out: output.timed_out,
        })
    }
}
