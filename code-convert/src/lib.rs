//! # Code Conversion Service
//!
//! Translates source code between Python, C++, Java, and JavaScript by
//! delegating the translation to an external LLM oracle, and can compile and
//! run the translated code locally for Python and C++.

mod config;
mod convert;
mod detect;
mod error;
mod executor;
mod languages;
mod normalize;
mod oracle;
mod sandbox;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::{OracleConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use convert::Converter;
pub use detect::detect;
pub use error::Error;
pub use executor::CodeExecutor;
pub use oracle::{Oracle, TogetherOracle};
pub use service::CodeConvertService;
pub use types::{
    ConversionRequest, ConversionResult, ExecutionResult, ExecutionStatus, Language,
};

/// Result type for code conversion operations
pub type Result<T> = std::result::Result<T, Error>;
