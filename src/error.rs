//! Error types for the content oracle
//!
//! Analysis functions never fail. Errors only arise at the boundaries:
//! configuration, fetching, and the strict-equality check.

use thiserror::Error;

/// Main error type for content oracle operations
#[derive(Error, Debug)]
pub enum OracleError {
    /// A caller supplied a value that violates an operation's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The content source could not produce text for a location
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Independent executions of the same computation disagreed
    #[error("Executions disagree: round {round} differs from round 0")]
    Disagreement {
        /// Index of the first round whose output differed
        round: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for content oracle operations
pub type Result<T> = std::result::Result<T, OracleError>;

/// Convert anyhow::Error to OracleError
impl From<anyhow::Error> for OracleError {
    fn from(err: anyhow::Error) -> Self {
        OracleError::Other(err.to_string())
    }
}
