//! Record request configuration
//!
//! [`RecordRequest`] describes which records a resolution should fetch. Each
//! field is a discriminated union rather than an overloaded boolean/string/
//! array value: the "give me all keys" wildcard form is an explicit variant
//! that the index shortcut concretizes into key lists before any on-chain
//! call is built.

use serde::{Deserialize, Serialize};

/// How the content hash should be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentHashRequest {
    /// Do not fetch or report a content hash.
    Omit,
    /// Fetch the content hash on-chain as part of the batch.
    Fetch,
    /// Treat this value as already resolved; no call is issued for it.
    /// Still validated against the all-zero "unset" sentinel.
    Literal(String),
}

impl ContentHashRequest {
    pub fn is_fetch(&self) -> bool {
        matches!(self, ContentHashRequest::Fetch)
    }
}

/// Selection of text keys or coin types to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeySelection {
    /// Every key the resolver has set. Only meaningful before the index
    /// shortcut runs; the call builder issues no calls for this form.
    All,
    /// An explicit, ordered key list. Duplicates are issued as duplicate
    /// calls, not deduplicated.
    Keys(Vec<String>),
}

/// Which records a resolution should fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    pub content_hash: ContentHashRequest,
    pub texts: Option<KeySelection>,
    pub coin_types: Option<KeySelection>,
}

impl RecordRequest {
    /// The full wildcard request: everything the resolver has set.
    pub fn all() -> Self {
        Self {
            content_hash: ContentHashRequest::Fetch,
            texts: Some(KeySelection::All),
            coin_types: Some(KeySelection::All),
        }
    }

    /// An empty request. The call builder still guarantees the primary
    /// address call, so this resolves just the coin-60 address.
    pub fn empty() -> Self {
        Self {
            content_hash: ContentHashRequest::Omit,
            texts: None,
            coin_types: None,
        }
    }

    /// True when nothing narrows the request: every present field is the
    /// wildcard form. Only such requests qualify for the index shortcut.
    pub fn is_wildcard(&self) -> bool {
        let texts_wild = !matches!(self.texts, Some(KeySelection::Keys(_)));
        let coins_wild = !matches!(self.coin_types, Some(KeySelection::Keys(_)));
        let hash_wild = !matches!(self.content_hash, ContentHashRequest::Literal(_));
        texts_wild && coins_wild && hash_wild
    }
}

impl Default for RecordRequest {
    fn default() -> Self {
        Self::all()
    }
}
