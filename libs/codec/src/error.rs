//! Codec-level errors for wire encoding and decoding.
//!
//! Every error is reported synchronously to the caller as a typed failure.
//! Nothing is retried or recovered here; retry policy belongs to the
//! transport layer. Decode never substitutes default values for malformed
//! input.

use thiserror::Error;

/// Wire codec errors with diagnostic context.
///
/// Each variant carries the specific values involved so a failure can be
/// diagnosed from the error alone, without replaying the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A value does not fit the fixed width its wire field declares.
    /// Encode-time only: decoded fields are width-bounded by construction.
    #[error("value {value} does not fit {width}-bit field {field}")]
    Overflow {
        field: &'static str,
        value: u128,
        width: u32,
    },

    /// Insufficient bytes during decode.
    #[error("truncated input: need {need} bytes, got {got} ({context})")]
    TruncatedInput {
        need: usize,
        got: usize,
        context: &'static str,
    },

    /// A declared length field disagrees with the actual encoded content.
    #[error("length mismatch for {field}: declared {declared} bytes, actual {actual}")]
    LengthMismatch {
        field: &'static str,
        declared: usize,
        actual: usize,
    },

    /// Unrecognized partitioning tag byte during decode.
    #[error("invalid partitioning kind {kind}: known kinds are 0 (balanced), 1 (partition id), 2 (messages key)")]
    InvalidPartitioningKind { kind: u8 },

    /// Messages key exceeds the range of the 1-byte wire length field.
    #[error("messages key of {len} bytes exceeds the {max}-byte limit")]
    KeyTooLong { len: usize, max: usize },

    /// Unrecognized user header kind tag during decode.
    #[error("invalid user header kind {kind}: known kinds are 1 (raw) through 15 (double)")]
    InvalidHeaderKind { kind: u8 },

    /// A user header key or string value is not valid UTF-8.
    #[error("invalid utf-8 in {context}")]
    InvalidUtf8 { context: &'static str },
}

impl CodecError {
    /// Create a TruncatedInput error with decode context.
    pub fn truncated(need: usize, got: usize, context: &'static str) -> Self {
        Self::TruncatedInput { need, got, context }
    }

    /// Create a LengthMismatch error for a declared length field.
    pub fn length_mismatch(field: &'static str, declared: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            field,
            declared,
            actual,
        }
    }

    /// Create an Overflow error for a value that cannot fit its wire field.
    pub fn overflow(field: &'static str, value: u128, width: u32) -> Self {
        Self::Overflow {
            field,
            value,
            width,
        }
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
