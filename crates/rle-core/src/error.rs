//! Error types for run-length decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding a run-length encoded string.
///
/// Encoding is total and has no error type. Positions are 0-based indices
/// into the input's `char` sequence, reported at the exact character where
/// the violation was detected.
#[derive(Error, Debug)]
pub enum RleError {
    /// The input violated the encoding grammar: an unexpected character for
    /// the current parser state, a zero or leading-zero count, or input that
    /// ended in the middle of a unit.
    #[error("invalid encoding at position {position}: {message}")]
    InvalidEncoding { position: usize, message: String },

    /// A sentinel-fenced count was syntactically valid but too large to
    /// represent as a repeat count.
    #[error("count overflow at position {position}: numeral '{numeral}' exceeds the representable repeat count")]
    CountOverflow { position: usize, numeral: String },
}

/// Convenience alias used throughout rle-core.
pub type Result<T> = std::result::Result<T, RleError>;
