//! Record call builder
//!
//! Turns a [`RecordRequest`] into the ordered [`CallDescriptor`] batch sent
//! to the resolver. Order is significant: the batched response is aligned to
//! this list position by position.

use crate::abi;
use crate::error::CodecError;
use ethabi::{Token, Uint};
use types::{CallDescriptor, KeySelection, RecordKind, RecordRequest, ETH_COIN_TYPE};
use web3::types::H256;

/// Descriptor key used for the content-hash call.
pub const CONTENT_HASH_KEY: &str = "contentHash";

/// Build the ordered call batch for a request against a name's node.
///
/// Text calls come first in request order, then coin-address calls, then the
/// optional content-hash call. The primary (coin-60) address call is always
/// present: callers rely on it as the canonical resolved address, so it is
/// appended when no explicit coin-60 request already put it in the batch.
/// Presence is decided by scanning descriptor keys; a descriptor list is
/// never "falsy".
///
/// Duplicate explicit keys are issued as duplicate calls, not deduplicated.
/// The wildcard [`KeySelection::All`] form contributes no calls here; it is
/// concretized by the index shortcut before a batch is built.
pub fn build_record_calls(
    node: H256,
    request: &RecordRequest,
) -> Result<Vec<CallDescriptor>, CodecError> {
    let mut calls = Vec::new();

    if let Some(KeySelection::Keys(keys)) = &request.texts {
        for key in keys {
            calls.push(CallDescriptor::new(
                key.clone(),
                RecordKind::Text,
                encode_text_call(node, key)?,
            ));
        }
    }

    if let Some(KeySelection::Keys(coin_types)) = &request.coin_types {
        for coin_type in coin_types {
            calls.push(CallDescriptor::new(
                coin_type.clone(),
                RecordKind::Addr,
                encode_addr_call(node, parse_coin_type(coin_type)?)?,
            ));
        }
    }

    if request.content_hash.is_fetch() {
        calls.push(CallDescriptor::new(
            CONTENT_HASH_KEY,
            RecordKind::ContentHash,
            encode_contenthash_call(node)?,
        ));
    }

    if !calls.iter().any(|call| call.is_addr_for(ETH_COIN_TYPE)) {
        calls.push(CallDescriptor::new(
            ETH_COIN_TYPE,
            RecordKind::Addr,
            encode_addr_call(node, 60)?,
        ));
    }

    Ok(calls)
}

/// Parse a coin-type request key into its numeric form.
pub fn parse_coin_type(key: &str) -> Result<u64, CodecError> {
    key.parse::<u64>()
        .map_err(|_| CodecError::InvalidCoinType(key.to_string()))
}

fn encode_text_call(node: H256, key: &str) -> Result<Vec<u8>, CodecError> {
    abi::text_function()
        .encode_input(&[
            Token::FixedBytes(node.as_bytes().to_vec()),
            Token::String(key.to_string()),
        ])
        .map_err(|e| CodecError::AbiEncode {
            call: "text",
            reason: e.to_string(),
        })
}

fn encode_addr_call(node: H256, coin_type: u64) -> Result<Vec<u8>, CodecError> {
    abi::addr_function()
        .encode_input(&[
            Token::FixedBytes(node.as_bytes().to_vec()),
            Token::Uint(Uint::from(coin_type)),
        ])
        .map_err(|e| CodecError::AbiEncode {
            call: "addr",
            reason: e.to_string(),
        })
}

fn encode_contenthash_call(node: H256) -> Result<Vec<u8>, CodecError> {
    abi::contenthash_function()
        .encode_input(&[Token::FixedBytes(node.as_bytes().to_vec())])
        .map_err(|e| CodecError::AbiEncode {
            call: "contenthash",
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ContentHashRequest;

    fn node() -> H256 {
        H256([0x11; 32])
    }

    fn count_primary(calls: &[CallDescriptor]) -> usize {
        calls.iter().filter(|c| c.is_addr_for(ETH_COIN_TYPE)).count()
    }

    #[test]
    fn empty_request_still_carries_primary_address() {
        let calls = build_record_calls(node(), &RecordRequest::empty()).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(count_primary(&calls), 1);
    }

    #[test]
    fn explicit_coin_60_is_not_appended_twice() {
        let request = RecordRequest {
            content_hash: ContentHashRequest::Omit,
            texts: None,
            coin_types: Some(KeySelection::Keys(vec!["60".into()])),
        };
        let calls = build_record_calls(node(), &request).unwrap();
        assert_eq!(count_primary(&calls), 1);
    }

    #[test]
    fn duplicate_explicit_requests_issue_duplicate_calls() {
        let request = RecordRequest {
            content_hash: ContentHashRequest::Omit,
            texts: Some(KeySelection::Keys(vec!["email".into(), "email".into()])),
            coin_types: Some(KeySelection::Keys(vec!["60".into(), "60".into()])),
        };
        let calls = build_record_calls(node(), &request).unwrap();
        // Two texts, two explicit coin-60 calls, no third guaranteed one.
        assert_eq!(calls.len(), 4);
        assert_eq!(count_primary(&calls), 2);
    }

    #[test]
    fn batch_order_is_texts_then_coins_then_contenthash() {
        let request = RecordRequest {
            content_hash: ContentHashRequest::Fetch,
            texts: Some(KeySelection::Keys(vec!["email".into(), "url".into()])),
            coin_types: Some(KeySelection::Keys(vec!["0".into()])),
        };
        let calls = build_record_calls(node(), &request).unwrap();
        let shape: Vec<(&str, RecordKind)> = calls
            .iter()
            .map(|c| (c.key.as_str(), c.kind))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("email", RecordKind::Text),
                ("url", RecordKind::Text),
                ("0", RecordKind::Addr),
                ("contentHash", RecordKind::ContentHash),
                ("60", RecordKind::Addr),
            ]
        );
    }

    #[test]
    fn wildcard_selections_contribute_no_calls() {
        let calls = build_record_calls(node(), &RecordRequest::all()).unwrap();
        // All/Fetch with no concrete keys: contenthash + guaranteed primary.
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].kind, RecordKind::ContentHash);
        assert_eq!(count_primary(&calls), 1);
    }

    #[test]
    fn text_key_with_same_spelling_as_coin_does_not_satisfy_primary() {
        let request = RecordRequest {
            content_hash: ContentHashRequest::Omit,
            texts: Some(KeySelection::Keys(vec!["60".into()])),
            coin_types: None,
        };
        let calls = build_record_calls(node(), &request).unwrap();
        assert_eq!(count_primary(&calls), 1);
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn non_numeric_coin_type_is_rejected() {
        let request = RecordRequest {
            content_hash: ContentHashRequest::Omit,
            texts: None,
            coin_types: Some(KeySelection::Keys(vec!["sixty".into()])),
        };
        assert!(matches!(
            build_record_calls(node(), &request),
            Err(CodecError::InvalidCoinType(_))
        ));
    }

    #[test]
    fn encoded_text_call_carries_selector_and_node() {
        let calls = build_record_calls(
            node(),
            &RecordRequest {
                content_hash: ContentHashRequest::Omit,
                texts: Some(KeySelection::Keys(vec!["email".into()])),
                coin_types: None,
            },
        )
        .unwrap();
        let encoded = &calls[0].encoded_call;
        assert_eq!(&encoded[..4], &[0x59, 0xd1, 0xd4, 0x3c]);
        assert_eq!(&encoded[4..36], node().as_bytes());
    }
}
