//! Contract-call capability
//!
//! The opaque transport behind every on-chain lookup. Implementations own
//! the wire encoding of names, the RPC connection, and any timeout policy;
//! this crate only sees opaque payloads and aligned answer lists.

use crate::error::TransportError;
use async_trait::async_trait;
use types::CallDescriptor;
use web3::types::H160;

/// Result of a reverse-resolution call: the name claimed for the subject
/// plus one raw answer per submitted call descriptor, positionally aligned.
#[derive(Debug, Clone)]
pub struct ReverseOutcome {
    /// The name the reverse registry claims for the subject.
    pub name: String,
    /// Raw answers aligned with the submitted call descriptors.
    pub answers: Vec<Vec<u8>>,
}

/// Capability for calling the resolver contract.
///
/// The exact ABI of the submitted payloads byte-matches the resolver's
/// calling convention (see `codec::abi`); the transport forwards them
/// verbatim and must not reorder answers.
#[async_trait]
pub trait ResolverTransport: Send + Sync {
    /// Resolve a batched payload against the name's resolver and return the
    /// encoded multicall response.
    async fn resolve(
        &self,
        name: &str,
        batch_payload: Vec<u8>,
    ) -> std::result::Result<Vec<u8>, TransportError>;

    /// Run the reverse-resolution call for a reverse-registry subject
    /// (for example `"1234...abcd.addr.reverse"`), returning the claimed
    /// name and the per-call answers.
    async fn reverse(
        &self,
        subject: &str,
        calls: &[CallDescriptor],
    ) -> std::result::Result<ReverseOutcome, TransportError>;

    /// Look up the name bound to an address in the reverse registry, if any.
    async fn primary_name(
        &self,
        address: H160,
    ) -> std::result::Result<Option<String>, TransportError>;
}
