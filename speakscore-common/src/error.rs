//! Common error types for SpeakScore

use thiserror::Error;

/// Common result type for SpeakScore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across SpeakScore crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Assessment record is not valid JSON or has the wrong shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
