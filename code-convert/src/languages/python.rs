use async_trait::async_trait;
use tokio::time::Duration;

use crate::{
    error::Error,
    languages::LanguageRunner,
    sandbox::{RunOutput, Sandbox},
};

pub struct PythonRunner {
    interpreter: String,
}

impl PythonRunner {
    pub fn new(interpreter: Option<String>) -> Self {
        Self {
            interpreter: interpreter.unwrap_or_else(|| "python3".to_string()),
        }
    }
}

#[async_trait]
impl LanguageRunner for PythonRunner {
    fn source_file(&self) -> &str {
        "source.py"
    }

    fn required_tools(&self) -> Vec<&str> {
        vec![self.interpreter.as_str()]
    }

    async fn compile(
        &self,
        _sandbox: &Sandbox,
        _timeout: Duration,
    ) -> Result<Option<RunOutput>, Error> {
        // Interpreted; nothing to build
        Ok(None)
    }

    fn run_command(&self) -> String {
        self.interpreter.clone()
    }

    fn run_args(&self) -> Vec<String> {
        vec!["source.py".to_string()]
    }
}
