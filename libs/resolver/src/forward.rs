//! Forward resolution: name → profile
//!
//! One batched round trip against the name's resolver. Transport failures
//! propagate unchanged; there is no retry here.

use crate::address::AddressCodec;
use crate::error::Result;
use crate::format::{extract_primary_address, format_records};
use crate::transport::ResolverTransport;
use codec::{build_record_calls, decode_batch, encode_batch, namehash};
use tracing::debug;
use types::{ProfileResult, RecordRequest};

/// Resolve a name to its primary address and requested records via the
/// on-chain batched path.
pub async fn resolve_name(
    transport: &dyn ResolverTransport,
    address_codec: &dyn AddressCodec,
    name: &str,
    request: &RecordRequest,
) -> Result<ProfileResult> {
    let node = namehash(name);
    let calls = build_record_calls(node, request)?;
    debug!(name, calls = calls.len(), "resolving name via batched call");

    let payload = encode_batch(&calls)?;
    let response = transport.resolve(name, payload).await?;
    let answers = decode_batch(calls.len(), &response)?;

    let records = format_records(&calls, &answers, request, address_codec)?;
    let address = extract_primary_address(&calls, &answers, address_codec);

    Ok(ProfileResult {
        name: Some(name.to_string()),
        address,
        records: Some(records),
        reverse_match: None,
    })
}
