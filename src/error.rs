//! Custom error types for cycleplan
//!
//! The engine and planner themselves are total functions and never fail;
//! errors only arise at the edges (argument parsing, policy file loading).

use thiserror::Error;

/// The main error type for cycleplan operations
#[derive(Error, Debug)]
pub enum CycleplanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input parsing errors (amounts, cycle labels, roles)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors for inputs
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CycleplanError {
    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for CycleplanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CycleplanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<crate::models::money::MoneyParseError> for CycleplanError {
    fn from(err: crate::models::money::MoneyParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<crate::models::cycle::CycleParseError> for CycleplanError {
    fn from(err: crate::models::cycle::CycleParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for cycleplan operations
pub type CycleplanResult<T> = Result<T, CycleplanError>;
