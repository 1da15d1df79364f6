//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Pattern rows have different lengths
    #[error("pattern row {row} has {actual} columns, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Unrecognized pattern character
    #[error("invalid pattern character '{ch}' at ({x}, {y})")]
    InvalidPatternChar { ch: char, x: usize, y: usize },

    /// Invalid fixture parameter
    #[error("invalid fixture parameter: {0}")]
    InvalidParameter(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobscan_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
