// ============================================================================
// churnprep-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for churnprep-core
//
// This module defines the error type used throughout the core library. Every
// pipeline step returns `CoreResult<T>` so the binary has a single place to
// report failures.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for churnprep-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data frame error: {0}")]
    Polars(#[from] PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    #[error("Column '{0}' has no values to bin")]
    EmptyColumn(String),

    #[error("Invalid binning: {0}")]
    InvalidBinning(String),

    #[error("No mapping defined for column '{0}'")]
    MissingMapping(String),

    #[error("Value '{value}' in column '{column}' has no mapping")]
    UnmappedValue { column: String, value: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for churnprep-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
