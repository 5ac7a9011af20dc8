//! Error types for the sign command.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SignError>;

#[derive(Debug, Error)]
pub enum SignError {
    #[error("Invalid configuration:\n{0}")]
    InvalidConfig(String),

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}
