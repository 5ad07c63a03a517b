use async_trait::async_trait;
use tokio::time::Duration;

use crate::{
    error::Error,
    languages::LanguageRunner,
    sandbox::{RunOutput, Sandbox},
};

pub struct CppRunner {
    std_version: String,
    compiler: String,
}

impl CppRunner {
    pub fn new(std_version: Option<String>, compiler: Option<String>) -> Self {
        Self {
            std_version: std_version.unwrap_or_else(|| "17".to_string()),
            compiler: compiler.unwrap_or_else(|| "g++".to_string()),
        }
    }
}

#[async_trait]
impl LanguageRunner for CppRunner {
    fn source_file(&self) -> &str {
        "source.cpp"
    }

    fn required_tools(&self) -> Vec<&str> {
        vec![self.compiler.as_str()]
    }

    async fn compile(
        &self,
        sandbox: &Sandbox,
        timeout: Duration,
    ) -> Result<Option<RunOutput>, Error> {
        let args = vec![
            format!("-std=c++{}", self.std_version),
            "-o".to_string(),
            "program".to_string(),
            "source.cpp".to_string(),
        ];

        let output = sandbox.run(&self.compiler, &args, timeout).await?;
        if output.timed_out || output.exit_code != Some(0) {
            return Ok(Some(output));
        }
        Ok(None)
    }

    fn run_command(&self) -> String {
        "./program".to_string()
    }

    fn run_args(&self) -> Vec<String> {
        Vec::new()
    }
}
