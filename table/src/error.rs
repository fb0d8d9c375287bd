//! Error type shared by the generator and the serializers.

use thiserror::Error;

/// Errors raised while building or rendering a PWM table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The microstep count was zero or negative.
    #[error("x must be a positive integer (got {0})")]
    InvalidCount(i64),

    /// A rail value needs more digits than the configured field width.
    #[error("rail value {value} at index {index} does not fit in {width} digit(s)")]
    WidthOverflow {
        /// Table index of the first offending entry.
        index: usize,
        /// The value that overflowed.
        value: u64,
        /// Configured field width.
        width: usize,
    },

    /// JSON serialization failed.
    #[error("failed to serialize table to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableError {
    /// True for the caller-input errors (bad count, value too wide for the field).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidCount(_) | Self::WidthOverflow { .. })
    }
}
