//! Error type shared by all outline operations.

use thiserror::Error;

/// Failure kinds for outline geometry.
///
/// Every operation here is deterministic, so none of these are worth retrying.
#[derive(Error, Debug)]
pub enum RoiError {
    /// Mismatched coordinate lengths, malformed flat arrays, empty outlines
    /// where at least one point is required, out-of-range parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Vertical line equations, zero divisors and similar.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Index beyond the point count.
    #[error("index {index} out of range for {len} points")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The point count it was checked against.
        len: usize,
    },

    /// Writing an export or log file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RoiError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RoiError::InvalidInput(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        RoiError::DegenerateGeometry(msg.into())
    }
}

/// Result alias for outline operations.
pub type Result<T> = std::result::Result<T, RoiError>;
