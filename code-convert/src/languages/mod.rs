//! Language-specific runner implementations

mod cpp;
mod python;

pub use cpp::CppRunner;
pub use python::PythonRunner;

use async_trait::async_trait;
use tokio::time::Duration;

use crate::{
    error::Error,
    sandbox::{RunOutput, Sandbox},
    types::Language,
};

/// How to compile and run one language's source inside a sandbox.
#[async_trait]
pub trait LanguageRunner: Send + Sync {
    /// File name the source is written under
    fn source_file(&self) -> &str;

    /// External tools that must be on PATH
    fn required_tools(&self) -> Vec<&str>;

    /// Compile the source if the language needs it. `Ok(Some(output))` means
    /// compilation was attempted and failed (or timed out); the run phase is
    /// skipped and the output carries the compiler diagnostics.
    async fn compile(
        &self,
        sandbox: &Sandbox,
        timeout: Duration,
    ) -> Result<Option<RunOutput>, Error>;

    /// Command for the run phase
    fn run_command(&self) -> String;

    /// Arguments for the run phase
    fn run_args(&self) -> Vec<String>;
}

/// Runner for a language, or `None` when execution is unsupported.
pub fn runner_for(language: Language) -> Option<Box<dyn LanguageRunner>> {
    match language {
        Language::Python => Some(Box::new(PythonRunner::new(None))),
        Language::Cpp => Some(Box::new(CppRunner::new(None, None))),
        Language::Java | Language::JavaScript | Language::Unknown => None,
    }
}

#[cfg(test)]
pub(crate) fn skip_if_not_available(tools: &[&str]) -> bool {
    let missing: Vec<_> = tools
        .iter()
        .filter(|tool| which::which(**tool).is_err())
        .map(|s| (*s).to_string())
        .collect();

    if !missing.is_empty() {
        eprintln!("Skipping test: {} not available", missing.join(", "));
        return true;
    }
    false
}
