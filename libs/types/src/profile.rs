//! Resolution results
//!
//! The normalized output of a profile lookup. A `records` field of `None`
//! means "unverifiable" (a failed reverse round trip), never an error; a
//! missing record means "unset or unsupported".

use crate::records::ResolvedRecord;
use serde::{Deserialize, Serialize};

/// The records portion of a resolution result.
///
/// Buckets are populated only for record categories that were actually
/// requested; an unrequested category stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecords {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<ResolvedRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_types: Option<Vec<ResolvedRecord>>,
}

/// A resolved profile for a name or an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResult {
    /// The name, when known (input name, or the name bound to the address).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The primary (coin-60) address, when resolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Resolved records, or `None` when the result is unverifiable.
    pub records: Option<ProfileRecords>,
    /// Reverse-resolution verification outcome. `Some(false)` means the
    /// name's forward-resolved primary address did not equal the queried
    /// address; `records` is `None` in that case. Always `None` for plain
    /// forward lookups.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub reverse_match: Option<bool>,
}

impl ProfileResult {
    /// The immediate "not trustworthy" result for a failed reverse claim.
    pub fn unverified(name: Option<String>, address: Option<String>) -> Self {
        Self {
            name,
            address,
            records: None,
            reverse_match: Some(false),
        }
    }
}
