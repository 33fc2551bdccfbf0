//! Error types for the codec crate

use thiserror::Error;

/// Errors raised while building or (de)coding a resolver batch.
#[derive(Debug, Error)]
pub enum CodecError {
    /// ABI encoding of a call failed.
    #[error("ABI encoding failed for {call}: {reason}")]
    AbiEncode {
        /// The resolver function being encoded
        call: &'static str,
        /// Underlying ABI error message
        reason: String,
    },

    /// ABI decoding of a response failed.
    #[error("ABI decoding failed: {0}")]
    AbiDecode(String),

    /// A requested coin type is not a decimal integer.
    #[error("invalid coin type {0:?}: expected a decimal coin-type number")]
    InvalidCoinType(String),

    /// The batch response does not contain one answer per call. This is a
    /// protocol-level incompatibility with the resolver, not a per-record
    /// miss, and fails the whole resolution.
    #[error("batch answer count mismatch: expected {expected}, got {actual}")]
    AnswerCountMismatch {
        /// Number of calls in the batch
        expected: usize,
        /// Number of answers in the response
        actual: usize,
    },

    /// The batch response did not decode to a `bytes[]` array.
    #[error("batch response is not a bytes array")]
    MalformedBatch,
}
