//! Record formatter
//!
//! Turns the raw answer bytes of a batch into the typed, filtered records of
//! a profile. Each answer is decoded by its descriptor's kind with one
//! exhaustive match per kind; values that represent "unset" (empty text,
//! all-zero addr/contenthash bytes) are dropped rather than surfaced.

use crate::address::AddressCodec;
use crate::error::{AddressCodecError, ResolveError};
use codec::abi;
use codec::error::CodecError;
use ethabi::{Function, Token};
use tracing::{debug, warn};
use types::{
    coin_label, CallDescriptor, ContentHashRequest, ProfileRecords, RecordKind, RecordRequest,
    ResolvedRecord, ETH_COIN_TYPE,
};

/// Assemble the records portion of a profile from decoded batch answers.
///
/// `answers` must align positionally with `calls`; a length mismatch is the
/// same protocol break as a miscounted batch response. Output buckets are
/// populated only for record categories the request asked for.
pub fn format_records(
    calls: &[CallDescriptor],
    answers: &[Vec<u8>],
    request: &RecordRequest,
    address_codec: &dyn AddressCodec,
) -> Result<ProfileRecords, ResolveError> {
    if answers.len() != calls.len() {
        return Err(CodecError::AnswerCountMismatch {
            expected: calls.len(),
            actual: answers.len(),
        }
        .into());
    }

    let decoded: Vec<Option<ResolvedRecord>> = calls
        .iter()
        .zip(answers)
        .map(|(call, answer)| decode_record(call, answer, address_codec))
        .collect();

    let content_hash = match &request.content_hash {
        ContentHashRequest::Omit => None,
        ContentHashRequest::Literal(literal) => validate_literal_hash(literal),
        ContentHashRequest::Fetch => decoded
            .iter()
            .flatten()
            .find(|record| record.kind == RecordKind::ContentHash)
            .map(|record| record.value.clone()),
    };

    let texts = request.texts.as_ref().map(|_| {
        decoded
            .iter()
            .flatten()
            .filter(|record| record.kind == RecordKind::Text)
            .cloned()
            .collect()
    });

    let coin_types = request.coin_types.as_ref().map(|_| {
        decoded
            .iter()
            .flatten()
            .filter(|record| record.kind == RecordKind::Addr)
            .cloned()
            .collect()
    });

    Ok(ProfileRecords {
        content_hash,
        texts,
        coin_types,
    })
}

/// Decode one answer by its descriptor kind. `None` means "unset, dropped".
fn decode_record(
    call: &CallDescriptor,
    answer: &[u8],
    address_codec: &dyn AddressCodec,
) -> Option<ResolvedRecord> {
    match call.kind {
        RecordKind::Text => {
            let value = decode_string_answer(&abi::text_function(), answer, &call.key)?;
            if value.is_empty() {
                return None;
            }
            Some(ResolvedRecord {
                key: call.key.clone(),
                kind: RecordKind::Text,
                coin: None,
                value,
            })
        }
        RecordKind::Addr => {
            let raw = decode_bytes_answer(&abi::addr_function(), answer, &call.key)?;
            if is_all_zero(&raw) {
                return None;
            }
            let coin_type = call.key.parse::<u64>().ok()?;
            match address_codec.encode(coin_type, &raw) {
                Ok(formatted) => Some(ResolvedRecord {
                    key: call.key.clone(),
                    kind: RecordKind::Addr,
                    coin: Some(coin_label(coin_type)),
                    value: formatted,
                }),
                Err(AddressCodecError::UnsupportedCoin(_)) => {
                    debug!(coin_type, "no codec for coin type, dropping record");
                    None
                }
                Err(err) => {
                    warn!(coin_type, %err, "address bytes rejected by codec, dropping record");
                    None
                }
            }
        }
        RecordKind::ContentHash => {
            let raw = decode_bytes_answer(&abi::contenthash_function(), answer, &call.key)?;
            if is_all_zero(&raw) {
                return None;
            }
            Some(ResolvedRecord {
                key: call.key.clone(),
                kind: RecordKind::ContentHash,
                coin: None,
                value: format!("0x{}", hex::encode(raw)),
            })
        }
    }
}

/// Raw primary-address bytes from the coin-60 slot the call builder
/// guarantees. `None` when the slot decoded to zero or garbage.
pub(crate) fn primary_address_bytes(
    calls: &[CallDescriptor],
    answers: &[Vec<u8>],
) -> Option<Vec<u8>> {
    let position = calls
        .iter()
        .position(|call| call.is_addr_for(ETH_COIN_TYPE))?;
    let raw = decode_bytes_answer(&abi::addr_function(), &answers[position], ETH_COIN_TYPE)?;
    if is_all_zero(&raw) {
        None
    } else {
        Some(raw)
    }
}

/// The formatted primary address from the guaranteed coin-60 slot.
pub fn extract_primary_address(
    calls: &[CallDescriptor],
    answers: &[Vec<u8>],
    address_codec: &dyn AddressCodec,
) -> Option<String> {
    let raw = primary_address_bytes(calls, answers)?;
    address_codec.encode(60, &raw).ok()
}

/// A pre-supplied literal hash is kept only when it is not the all-zero
/// "unset" sentinel.
fn validate_literal_hash(literal: &str) -> Option<String> {
    if let Ok(bytes) = hex::decode(crate::address::strip_hex_prefix(literal)) {
        if is_all_zero(&bytes) {
            return None;
        }
    }
    Some(literal.to_string())
}

fn is_all_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

fn decode_string_answer(function: &Function, answer: &[u8], key: &str) -> Option<String> {
    let mut tokens = decode_answer(function, answer, key)?;
    match tokens.pop() {
        Some(Token::String(value)) => Some(value),
        _ => None,
    }
}

fn decode_bytes_answer(function: &Function, answer: &[u8], key: &str) -> Option<Vec<u8>> {
    let mut tokens = decode_answer(function, answer, key)?;
    match tokens.pop() {
        Some(Token::Bytes(bytes)) => Some(bytes),
        _ => None,
    }
}

fn decode_answer(function: &Function, answer: &[u8], key: &str) -> Option<Vec<Token>> {
    match function.decode_output(answer) {
        Ok(tokens) => Some(tokens),
        Err(err) => {
            // Resolvers answer unsupported records with empty or garbage
            // bytes; that is "unset", not a protocol break.
            debug!(key, %err, "undecodable answer, treating record as unset");
            None
        }
    }
}
