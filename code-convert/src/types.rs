use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the converter understands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Cpp,
    Java,
    JavaScript,
    #[default]
    Unknown,
}

impl Language {
    /// Whether this label is a concrete language usable as a conversion
    /// source or target.
    pub fn is_convertible(self) -> bool {
        !matches!(self, Language::Unknown)
    }

    /// Whether a local toolchain exists to run translated code.
    pub fn is_executable(self) -> bool {
        matches!(self, Language::Python | Language::Cpp)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "cpp" | "c++" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            "javascript" | "js" => Ok(Language::JavaScript),
            "unknown" => Ok(Language::Unknown),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Code conversion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Source code to translate
    pub source_text: String,
    /// Declared source language; `Unknown` triggers detection
    #[serde(default)]
    pub source_language: Language,
    /// Target language for the translation
    pub target_language: Language,
}

/// Conversion result, immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Translated code; empty when the conversion failed
    pub translated_text: String,
    /// The resolved source language (detected when the request said `Unknown`)
    pub source_language: Language,
    /// Whether the conversion succeeded
    pub succeeded: bool,
    /// Failure description when `succeeded` is false
    pub error_message: Option<String>,
}

impl ConversionResult {
    pub(crate) fn completed(source_language: Language, translated_text: String) -> Self {
        Self {
            translated_text,
            source_language,
            succeeded: true,
            error_message: None,
        }
    }

    pub(crate) fn failed(source_language: Language, message: impl Into<String>) -> Self {
        Self {
            translated_text: String::new(),
            source_language,
            succeeded: false,
            error_message: Some(message.into()),
        }
    }
}

/// Execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Success,
    RuntimeError,
    CompileError,
    Timeout,
    Unsupported,
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::RuntimeError => "runtime_error",
            ExecutionStatus::CompileError => "compile_error",
            ExecutionStatus::Timeout => "timeout",
            ExecutionStatus::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Outcome of one compile/run attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Execution status
    pub status: ExecutionStatus,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error (compiler diagnostics on compile failure)
    pub stderr: String,
    /// Process exit code; `None` on timeout, signal death, or unsupported
    pub exit_code: Option<i32>,
    /// Whether the process was terminated for exceeding the timeout
    pub timed_out: bool,
}

impl ExecutionResult {
    pub(crate) fn unsupported(language: Language) -> Self {
        Self {
            status: ExecutionStatus::Unsupported,
            stdout: String::new(),
            stderr: format!("Execution is not supported for {}", language),
            exit_code: None,
            timed_out: false,
        }
    }
}
