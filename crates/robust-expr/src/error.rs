//! Error types for robust-expr

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Robust core error: {0}")]
    RobustCore(#[from] robust_core::Error),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{function}: expected {expected} arguments, got {got}")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },

    #[error("Missing argument at position {0}")]
    MissingArgument(usize),

    #[error("Type mismatch at argument {index}: expected {expected}, got {got}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error("found wildcard where series expected")]
    WildcardNotAllowed,

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
