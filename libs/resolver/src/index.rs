//! Off-chain index shortcut
//!
//! A wildcard request ("give me all texts") cannot be batched: the on-chain
//! resolver answers keys, it does not enumerate them. The index query asks
//! an off-chain graph index which record keys exist for a name, and rewrites
//! each wildcard field of the request into the concrete key list. On-chain
//! values stay authoritative: the forward resolver still fetches every
//! record after concretization.

use crate::error::{Result, TransportError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use types::{ContentHashRequest, KeySelection, RecordRequest};

/// Record bundle stored for a name in the off-chain index.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecords {
    /// Text record keys the resolver has set.
    #[serde(default)]
    pub texts: Vec<String>,
    /// Coin types (as decimal strings) the resolver has set.
    #[serde(default)]
    pub coin_types: Vec<String>,
    /// Content hash stored for the name, if any.
    #[serde(default)]
    pub content_hash: Option<String>,
    /// The name's primary address entry in the index.
    #[serde(default)]
    pub addr: Option<IndexAddr>,
}

/// Index-side primary address entry.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexAddr {
    pub id: String,
}

/// Capability for querying the off-chain index.
#[async_trait]
pub trait IndexQuery: Send + Sync {
    /// Fetch the record bundle stored for a name's resolver, or `None` when
    /// the index does not know the name.
    async fn resolver_records(
        &self,
        name: &str,
    ) -> std::result::Result<Option<IndexRecords>, TransportError>;
}

/// Rewrite each wildcard field of a request with the concrete keys the
/// index knows for the name.
///
/// Applies only to wildcard-shaped requests; a narrowed request and a name
/// unknown to the index both pass through untouched. Index transport
/// failures propagate like any other external-call failure.
pub async fn concretize_request(
    index: &dyn IndexQuery,
    name: &str,
    request: &mut RecordRequest,
) -> Result<()> {
    if !request.is_wildcard() {
        return Ok(());
    }

    let Some(bundle) = index.resolver_records(name).await? else {
        debug!(name, "name unknown to index, request left untouched");
        return Ok(());
    };
    debug!(
        name,
        texts = bundle.texts.len(),
        coin_types = bundle.coin_types.len(),
        "concretized wildcard request from index"
    );

    if matches!(request.texts, Some(KeySelection::All)) {
        request.texts = Some(KeySelection::Keys(bundle.texts));
    }
    if matches!(request.coin_types, Some(KeySelection::All)) {
        request.coin_types = Some(KeySelection::Keys(bundle.coin_types));
    }
    if request.content_hash.is_fetch() {
        if let Some(hash) = bundle.content_hash {
            request.content_hash = ContentHashRequest::Literal(hash);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIndex(Option<IndexRecords>);

    #[async_trait]
    impl IndexQuery for FixedIndex {
        async fn resolver_records(
            &self,
            _name: &str,
        ) -> std::result::Result<Option<IndexRecords>, TransportError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn wildcards_become_concrete_key_lists() {
        let index = FixedIndex(Some(IndexRecords {
            texts: vec!["email".into()],
            coin_types: vec!["60".into(), "0".into()],
            content_hash: None,
            addr: None,
        }));
        let mut request = RecordRequest::all();
        concretize_request(&index, "vault.eth", &mut request).await.unwrap();
        assert_eq!(
            request.coin_types,
            Some(KeySelection::Keys(vec!["60".into(), "0".into()]))
        );
        assert_eq!(request.texts, Some(KeySelection::Keys(vec!["email".into()])));
        // No index content hash: still fetched on-chain.
        assert!(request.content_hash.is_fetch());
    }

    #[tokio::test]
    async fn narrowed_requests_are_never_rewritten() {
        let index = FixedIndex(Some(IndexRecords {
            texts: vec!["email".into()],
            ..Default::default()
        }));
        let mut request = RecordRequest {
            content_hash: ContentHashRequest::Omit,
            texts: Some(KeySelection::Keys(vec!["url".into()])),
            coin_types: None,
        };
        let before = request.clone();
        concretize_request(&index, "vault.eth", &mut request).await.unwrap();
        assert_eq!(request, before);
    }

    #[tokio::test]
    async fn unknown_name_leaves_request_untouched() {
        let index = FixedIndex(None);
        let mut request = RecordRequest::all();
        concretize_request(&index, "ghost.eth", &mut request).await.unwrap();
        assert_eq!(request, RecordRequest::all());
    }

    #[tokio::test]
    async fn index_content_hash_becomes_a_literal() {
        let index = FixedIndex(Some(IndexRecords {
            content_hash: Some("0xe3010170".into()),
            ..Default::default()
        }));
        let mut request = RecordRequest::all();
        concretize_request(&index, "vault.eth", &mut request).await.unwrap();
        assert_eq!(
            request.content_hash,
            ContentHashRequest::Literal("0xe3010170".into())
        );
    }

    #[test]
    fn bundle_deserializes_from_graph_shape() {
        let bundle: IndexRecords = serde_json::from_str(
            r#"{"texts":["email"],"coinTypes":["60"],"contentHash":null,"addr":{"id":"0xabc"}}"#,
        )
        .unwrap();
        assert_eq!(bundle.texts, vec!["email"]);
        assert_eq!(bundle.coin_types, vec!["60"]);
        assert_eq!(bundle.addr.unwrap().id, "0xabc");
    }
}
