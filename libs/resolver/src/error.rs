//! Error types for the resolver crate
//!
//! Transport and codec failures bubble to the caller unmodified; nothing in
//! this crate retries them. Unsupported coin types and failed reverse
//! round trips are not errors at all: the former is a silent per-record
//! drop, the latter a successful result with `match: false`.

use codec::CodecError;
use thiserror::Error;

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Failure of an external call capability (contract caller or index query).
///
/// Surfaced unchanged to the resolver's caller. Batched calls are not
/// idempotent-cheap, so a timeout or cancellation is terminal for the
/// resolution; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying RPC or query call failed.
    #[error("rpc call failed: {0}")]
    Rpc(String),

    /// The external capability timed out.
    #[error("external call timed out")]
    Timeout,

    /// The external capability was cancelled.
    #[error("external call cancelled")]
    Cancelled,
}

/// Failure to format raw address bytes for a coin type.
#[derive(Debug, Error)]
pub enum AddressCodecError {
    /// No codec is registered for this coin type. The formatter drops the
    /// record rather than surfacing undecodable bytes.
    #[error("unsupported coin type {0}")]
    UnsupportedCoin(u64),

    /// The bytes do not form a valid address for the coin type.
    #[error("malformed address bytes for coin type {coin_type}: {reason}")]
    InvalidBytes {
        /// The coin type whose codec rejected the bytes
        coin_type: u64,
        /// Why the bytes were rejected
        reason: String,
    },
}

/// Top-level error for a resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// An external call capability failed; never retried here.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Batch building or (de)coding failed. An answer-count mismatch is a
    /// protocol-level incompatibility with the resolver.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The queried address is not a valid 20-byte hex address.
    #[error("invalid address {0:?}")]
    InvalidAddress(String),
}
