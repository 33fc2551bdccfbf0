//! Multicall batch codec
//!
//! Wraps an ordered call batch into one `multicall(bytes[])` payload and
//! unwraps the batched response into one answer per call. Count and order
//! are preserved end to end; a count mismatch fails the whole batch.

use crate::abi;
use crate::error::CodecError;
use ethabi::Token;
use types::CallDescriptor;

/// Encode the ordered call batch into a single multicall payload.
pub fn encode_batch(calls: &[CallDescriptor]) -> Result<Vec<u8>, CodecError> {
    let data: Vec<Token> = calls
        .iter()
        .map(|call| Token::Bytes(call.encoded_call.clone()))
        .collect();
    abi::multicall_function()
        .encode_input(&[Token::Array(data)])
        .map_err(|e| CodecError::AbiEncode {
            call: "multicall",
            reason: e.to_string(),
        })
}

/// Decode a multicall response into one raw answer per original call.
///
/// `expected` is the length of the call batch the response answers; any
/// other answer count is a protocol-level mismatch and fails the batch.
pub fn decode_batch(expected: usize, response: &[u8]) -> Result<Vec<Vec<u8>>, CodecError> {
    let mut tokens = abi::multicall_function()
        .decode_output(response)
        .map_err(|e| CodecError::AbiDecode(e.to_string()))?;

    let items = match (tokens.pop(), tokens.is_empty()) {
        (Some(Token::Array(items)), true) => items,
        _ => return Err(CodecError::MalformedBatch),
    };

    if items.len() != expected {
        return Err(CodecError::AnswerCountMismatch {
            expected,
            actual: items.len(),
        });
    }

    items
        .into_iter()
        .map(|item| match item {
            Token::Bytes(bytes) => Ok(bytes),
            _ => Err(CodecError::MalformedBatch),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::RecordKind;

    fn descriptor(key: &str, payload: &[u8]) -> CallDescriptor {
        CallDescriptor::new(key, RecordKind::Text, payload.to_vec())
    }

    fn batch_response(answers: Vec<Vec<u8>>) -> Vec<u8> {
        ethabi::encode(&[Token::Array(
            answers.into_iter().map(Token::Bytes).collect(),
        )])
    }

    #[test]
    fn encode_carries_multicall_selector() {
        let calls = vec![descriptor("email", &[0xde, 0xad])];
        let payload = encode_batch(&calls).unwrap();
        assert_eq!(&payload[..4], &[0xac, 0x96, 0x50, 0xd8]);
    }

    #[test]
    fn answers_stay_aligned_with_calls() {
        let answers = vec![vec![0x01], vec![0x02, 0x02], vec![]];
        let response = batch_response(answers.clone());
        let decoded = decode_batch(3, &response).unwrap();
        assert_eq!(decoded, answers);

        // Reordered answers decode in their new order; alignment is purely
        // positional.
        let reordered = batch_response(vec![vec![0x02, 0x02], vec![0x01], vec![]]);
        let decoded = decode_batch(3, &reordered).unwrap();
        assert_eq!(decoded[0], vec![0x02, 0x02]);
        assert_eq!(decoded[1], vec![0x01]);
    }

    #[test]
    fn count_mismatch_is_fatal() {
        let response = batch_response(vec![vec![0x01], vec![0x02]]);
        let err = decode_batch(3, &response).unwrap_err();
        assert!(matches!(
            err,
            CodecError::AnswerCountMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn garbage_response_is_a_decode_error() {
        assert!(matches!(
            decode_batch(1, &[0xff; 7]),
            Err(CodecError::AbiDecode(_))
        ));
    }
}
