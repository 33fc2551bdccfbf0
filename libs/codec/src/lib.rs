//! Resolver lookup codec
//!
//! This crate contains the "Rules" layer of the resolver stack:
//! - Canonical ABI definitions for the resolver functions
//!   (`text(bytes32,string)`, `addr(bytes32,uint256)`, `contenthash(bytes32)`,
//!   `multicall(bytes[])`)
//! - The record call builder that turns a [`types::RecordRequest`] into an
//!   ordered [`types::CallDescriptor`] batch
//! - The multicall batch codec (encode the batch, decode the aligned answers)
//! - EIP-137 namehash
//!
//! ## Ordering Invariant
//!
//! The call list and the decoded answer list always have equal length and
//! positionally correspond. [`multicall::decode_batch`] enforces the count;
//! nothing in this crate reorders a batch.
//!
//! ## What This Crate Does NOT Contain
//! - Record value decoding and filtering (belongs in libs/resolver)
//! - Transport logic of any kind

pub mod abi;
pub mod calls;
pub mod error;
pub mod multicall;
pub mod namehash;

pub use calls::{build_record_calls, CONTENT_HASH_KEY};
pub use error::CodecError;
pub use multicall::{decode_batch, encode_batch};
pub use namehash::namehash;
