//! Error types for API calls and scenario execution.
//!
//! The taxonomy is deliberately flat: the runner never retries, so every
//! error is fatal. What matters is telling an assertion failure (the server
//! answered, but not the way the scenario expects) apart from an
//! infrastructure failure (the request never completed, or the body could
//! not be understood) so the process can exit with a distinct code for each.

use thiserror::Error;

/// Exit code for an unexpected-status (assertion) failure.
pub const EXIT_ASSERTION: i32 = 1;

/// Exit code for a transport or malformed-response failure.
pub const EXIT_INFRASTRUCTURE: i32 = 2;

/// Error from a Taskboard API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server responded with a status other than the one the step expects.
    #[error("{step}: expected HTTP {expected}, got {got}: {body}")]
    UnexpectedStatus {
        step: &'static str,
        expected: u16,
        got: u16,
        body: String,
    },

    /// The request never produced a response (connect failure, timeout, etc).
    #[error("{step}: request failed: {source}")]
    Transport {
        step: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not have the expected shape.
    #[error("{step}: malformed response: {detail}")]
    Shape { step: &'static str, detail: String },
}

impl ApiError {
    /// The scenario step this error occurred in.
    pub fn step(&self) -> &'static str {
        match self {
            ApiError::UnexpectedStatus { step, .. } => step,
            ApiError::Transport { step, .. } => step,
            ApiError::Shape { step, .. } => step,
        }
    }

    /// Map the error to a process exit code.
    ///
    /// Unexpected statuses are assertion failures; everything else is an
    /// infrastructure failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::UnexpectedStatus { .. } => EXIT_ASSERTION,
            ApiError::Transport { .. } | ApiError::Shape { .. } => EXIT_INFRASTRUCTURE,
        }
    }
}
