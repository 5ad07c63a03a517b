use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::Duration;
use tracing::{debug, error, info};

use crate::{
    convert::Converter,
    detect,
    error::Error,
    executor::CodeExecutor,
    oracle::Oracle,
    types::{ConversionRequest, ConversionResult, ExecutionResult, Language},
};

/// Facade over the detect -> convert -> execute pipeline, consumed by the
/// presentation shell. Each operation is independently invokable.
#[derive(Clone)]
pub struct CodeConvertService {
    converter: Arc<Converter>,
    executor: Arc<CodeExecutor>,
    semaphore: Arc<Semaphore>,
}

impl CodeConvertService {
    pub fn new(oracle: Arc<dyn Oracle>, max_concurrent_executions: usize) -> Self {
        Self {
            converter: Arc::new(Converter::new(oracle)),
            executor: Arc::new(CodeExecutor::new()),
            semaphore: Arc::new(Semaphore::new(max_concurrent_executions)),
        }
    }

    pub fn detect(&self, text: &str) -> Language {
        detect::detect(text)
    }

    pub async fn convert(&self, request: ConversionRequest) -> ConversionResult {
        let result = self.converter.convert(request).await;
        match &result.error_message {
            None => info!("Conversion completed ({})", result.source_language),
            Some(message) => error!("Conversion failed: {}", message),
        }
        result
    }

    pub async fn execute(
        &self,
        code: &str,
        language: Language,
        timeout: Duration,
    ) -> Result<ExecutionResult, Error> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| Error::Sandbox(format!("Failed to acquire execution permit: {}", e)))?;

        debug!("Starting execution for language: {:?}", language);

        let result = self.executor.execute(code, language, timeout).await;
        match &result {
            Ok(r) => info!("Execution finished with status: {}", r.status),
            Err(e) => error!("Execution failed: {}", e),
        }

        result
    }

    pub fn available_slots(&self) -> usize {
        self.semaphore.available_permits()
    }
}
