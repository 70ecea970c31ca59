/// Convenience result type used across dataclock.
pub type ChartResult<T> = Result<T, DataClockError>;

/// Top-level error taxonomy.
///
/// Precondition violations get their own variants so callers can match on them;
/// numerically degenerate input (empty series, constant series, zero samples)
/// never produces an error and propagates as non-finite numbers instead.
#[derive(thiserror::Error, Debug)]
pub enum DataClockError {
    /// Series that must share a length do not.
    #[error("length mismatch: {what} (expected {expected}, got {actual})")]
    LengthMismatch {
        /// Which inputs disagreed.
        what: &'static str,
        /// Length of the reference input.
        expected: usize,
        /// Length of the offending input.
        actual: usize,
    },

    /// Fixed-ratio aggregation over a series whose length is not a multiple of the chunk.
    #[error("length {len} is not divisible by {chunk} ({unit})")]
    NotDivisible {
        /// Input length.
        len: usize,
        /// Required chunk size.
        chunk: usize,
        /// Human-readable chunk unit.
        unit: &'static str,
    },

    /// Month aggregation needs a calendar anchor.
    #[error("start date is required to determine month lengths")]
    MissingStartDate,

    /// Invalid user-provided options or documents.
    #[error("validation error: {0}")]
    Validation(String),

    /// Texture resolution failed.
    #[error("texture error: {0}")]
    Texture(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DataClockError {
    /// Build a [`DataClockError::LengthMismatch`] value.
    pub fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Build a [`DataClockError::NotDivisible`] value.
    pub fn not_divisible(len: usize, chunk: usize, unit: &'static str) -> Self {
        Self::NotDivisible { len, chunk, unit }
    }

    /// Build a [`DataClockError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DataClockError::Texture`] value.
    pub fn texture(msg: impl Into<String>) -> Self {
        Self::Texture(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
