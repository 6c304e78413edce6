//! Error types for the dashboard check layer

use dashcheck_core::ReadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("reader error: {0}")]
    Reader(#[from] ReadError),

    #[error("label mismatch for {field}: expected text containing {expected:?}, got {actual:?}")]
    LabelMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("page title mismatch: expected {expected:?}, got {actual:?}")]
    TitleMismatch { expected: String, actual: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CheckResult<T> = Result<T, CheckError>;
