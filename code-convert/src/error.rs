use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Oracle error: {0}")]
    Oracle(String),

    #[error("Sandbox error: {0}")]
    Sandbox(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
