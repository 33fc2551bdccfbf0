//! Record kinds, call descriptors and resolved records
//!
//! A batched resolver lookup is an ordered list of [`CallDescriptor`]s; the
//! batched response is positionally aligned with that list, so the list must
//! never be reordered between encode and decode.

use serde::{Deserialize, Serialize};

/// The kind of resolver record a call targets.
///
/// Every descriptor and every decoded record carries exactly one of these
/// tags; decoding dispatches on the tag with an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A `text(bytes32,string)` record, keyed by a text key such as "email".
    Text,
    /// An `addr(bytes32,uint256)` record, keyed by a SLIP-44 coin type.
    Addr,
    /// The `contenthash(bytes32)` record for the name.
    ContentHash,
}

/// One entry in a batched resolver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDescriptor {
    /// Record identifier: a text key, a coin-type number as a string, or
    /// the literal `"contentHash"`.
    pub key: String,
    /// Which record family the encoded call targets.
    pub kind: RecordKind,
    /// The ABI-encoded single call, ready to be wrapped in a multicall.
    pub encoded_call: Vec<u8>,
}

impl CallDescriptor {
    pub fn new(key: impl Into<String>, kind: RecordKind, encoded_call: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            kind,
            encoded_call,
        }
    }

    /// True if this descriptor is an address lookup for the given coin type.
    pub fn is_addr_for(&self, coin_type: &str) -> bool {
        self.kind == RecordKind::Addr && self.key == coin_type
    }
}

/// A decoded, filtered record ready to hand back to the caller.
///
/// Unset records never become `ResolvedRecord`s: an empty text value or an
/// all-zero addr/contenthash value is dropped during formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    /// The request key this record answers (text key, coin type, ...).
    pub key: String,
    /// Record family tag.
    pub kind: RecordKind,
    /// Canonical coin name, only present for `kind == Addr`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    /// Decoded representation: the text value, the codec-formatted address,
    /// or the 0x-hex content hash.
    pub value: String,
}
