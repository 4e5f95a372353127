//! Error types for s3pipe
//!
//! The public facade converts every non-fatal error into a sentinel return
//! after logging it; these types exist for the fatal construction path and
//! for the internal guards that feed the logs.

use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

/// Main error type for s3pipe operations
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by the storage service for a single SDK call
    #[error("S3 {operation} failed: {message}")]
    Service {
        /// SDK operation that failed (e.g. `get_object`)
        operation: &'static str,
        /// Service-reported detail
        message: String,
    },

    /// I/O error on a local file during a transfer
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// Local path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fetched CSV content held no data at all
    #[error("CSV object contains no data")]
    EmptyCsv,

    /// CSV decoding failure
    #[error("CSV decode error: {0}")]
    Decode(String),
}

impl PipelineError {
    /// Create a service error from an SDK failure
    pub fn service(operation: &'static str, message: impl ToString) -> Self {
        Self::Service {
            operation,
            message: message.to_string(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ArrowError> for PipelineError {
    fn from(err: ArrowError) -> Self {
        PipelineError::Decode(err.to_string())
    }
}

/// Result type alias for s3pipe operations
pub type Result<T> = std::result::Result<T, PipelineError>;
