//! Failure kinds and process exit codes.

use thiserror::Error;

/// Success: the linter ran and the count is within the threshold (or none was set).
pub const SUCCESS: i32 = 0;

/// Any failure: usage error, threshold exceeded, or the linter could not start.
pub const FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum GateError {
    /// Malformed arguments or an unreadable config file. The linter is not run.
    #[error("{0}")]
    Usage(String),

    #[error("{count} issue(s) exceed threshold {threshold}")]
    ThresholdExceeded { count: usize, threshold: usize },

    #[error("failed to launch linter '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl GateError {
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::Usage(_)
            | GateError::ThresholdExceeded { .. }
            | GateError::Launch { .. } => FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, GateError>;
