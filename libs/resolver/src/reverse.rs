//! Reverse resolution: address → profile
//!
//! Builds the same batched lookup against the address's reverse-registry
//! subject, then verifies the round trip: the claimed name's primary address
//! must equal the queried address before any record is surfaced.

use crate::address::{strip_hex_prefix, AddressCodec};
use crate::error::Result;
use crate::format::{extract_primary_address, format_records, primary_address_bytes};
use crate::transport::ResolverTransport;
use codec::error::CodecError;
use codec::{build_record_calls, namehash};
use tracing::debug;
use types::{ProfileResult, RecordRequest};

/// Reverse-registry suffix appended to the lowercase hex address.
const REVERSE_SUFFIX: &str = "addr.reverse";

/// The reverse-lookup subject for an address.
pub fn reverse_subject(address: &str) -> String {
    format!(
        "{}.{}",
        strip_hex_prefix(address).to_lowercase(),
        REVERSE_SUFFIX
    )
}

/// Resolve an address to its name and requested records via the on-chain
/// batched reverse path.
///
/// When the decoded primary address does not equal the queried address the
/// claim is unverified: the result carries `match: false` and no records,
/// and the formatter never runs.
pub async fn resolve_address(
    transport: &dyn ResolverTransport,
    address_codec: &dyn AddressCodec,
    address: &str,
    request: &RecordRequest,
) -> Result<ProfileResult> {
    let subject = reverse_subject(address);
    let node = namehash(&subject);
    let calls = build_record_calls(node, request)?;
    debug!(address, subject = %subject, calls = calls.len(), "reverse resolving");

    let outcome = transport.reverse(&subject, &calls).await?;
    if outcome.answers.len() != calls.len() {
        return Err(CodecError::AnswerCountMismatch {
            expected: calls.len(),
            actual: outcome.answers.len(),
        }
        .into());
    }

    let verified = primary_address_bytes(&calls, &outcome.answers)
        .map(|raw| addresses_match(&raw, address))
        .unwrap_or(false);
    if !verified {
        debug!(address, name = %outcome.name, "reverse claim failed address match");
        return Ok(ProfileResult::unverified(
            Some(outcome.name),
            Some(address.to_string()),
        ));
    }

    let records = format_records(&calls, &outcome.answers, request, address_codec)?;
    let formatted = extract_primary_address(&calls, &outcome.answers, address_codec);

    Ok(ProfileResult {
        name: Some(outcome.name),
        address: formatted.or_else(|| Some(address.to_string())),
        records: Some(records),
        reverse_match: Some(true),
    })
}

/// Case-insensitive comparison of raw primary-address bytes against the
/// queried address string.
fn addresses_match(raw: &[u8], queried: &str) -> bool {
    hex::encode(raw).eq_ignore_ascii_case(strip_hex_prefix(queried))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_subject_is_lowercase_without_prefix() {
        assert_eq!(
            reverse_subject("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed.addr.reverse"
        );
    }

    #[test]
    fn address_match_is_case_insensitive() {
        let raw = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert!(addresses_match(
            &raw,
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        ));
        assert!(!addresses_match(&raw, "0x0000000000000000000000000000000000000001"));
    }
}
