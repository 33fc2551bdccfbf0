//! Address codec capability and the default EVM codec
//!
//! Formats raw on-chain address bytes into a human-readable string, keyed by
//! SLIP-44 coin type. Unsupported coin types are reported distinctly from
//! malformed bytes so the formatter can drop the former silently.

use crate::error::{AddressCodecError, ResolveError};
use sha3::{Digest, Keccak256};
use types::coins::EVM_COIN_TYPE_BIT;
use web3::types::H160;

/// Capability for formatting a coin's raw address bytes.
pub trait AddressCodec: Send + Sync {
    /// Format `raw` as the human-readable address for `coin_type`.
    fn encode(&self, coin_type: u64, raw: &[u8]) -> Result<String, AddressCodecError>;
}

/// Default codec: Ethereum-family addresses only.
///
/// Handles ETH (60), ETC (61) and ENSIP-11 EVM chain coin types (bit 31
/// set) as EIP-55 checksummed hex. Every other coin type is unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmAddressCodec;

impl AddressCodec for EvmAddressCodec {
    fn encode(&self, coin_type: u64, raw: &[u8]) -> Result<String, AddressCodecError> {
        if coin_type != 60 && coin_type != 61 && coin_type & EVM_COIN_TYPE_BIT == 0 {
            return Err(AddressCodecError::UnsupportedCoin(coin_type));
        }
        if raw.len() != 20 {
            return Err(AddressCodecError::InvalidBytes {
                coin_type,
                reason: format!("expected 20 bytes, got {}", raw.len()),
            });
        }
        Ok(to_checksum_hex(raw))
    }
}

/// EIP-55 mixed-case checksum encoding of a 20-byte address.
fn to_checksum_hex(raw: &[u8]) -> String {
    let lower = hex::encode(raw);
    let digest = Keccak256::digest(lower.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, ch) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Strip an optional `0x`/`0X` prefix from a hex string.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parse a queried address string into its 20-byte form.
pub fn parse_address(input: &str) -> Result<H160, ResolveError> {
    let bytes = hex::decode(strip_hex_prefix(input))
        .map_err(|_| ResolveError::InvalidAddress(input.to_string()))?;
    if bytes.len() != 20 {
        return Err(ResolveError::InvalidAddress(input.to_string()));
    }
    Ok(H160::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Vector from EIP-55.
    #[test]
    fn checksums_the_eip55_vector() {
        let raw = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let formatted = EvmAddressCodec.encode(60, &raw).unwrap();
        assert_eq!(formatted, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn evm_chain_coin_types_are_supported() {
        let raw = [0x42u8; 20];
        // 0x80000089: ENSIP-11 coin type for chain id 137.
        assert!(EvmAddressCodec.encode(0x8000_0089, &raw).is_ok());
        assert!(EvmAddressCodec.encode(61, &raw).is_ok());
    }

    #[test]
    fn unsupported_and_malformed_are_distinct() {
        assert!(matches!(
            EvmAddressCodec.encode(0, &[0u8; 25]),
            Err(AddressCodecError::UnsupportedCoin(0))
        ));
        assert!(matches!(
            EvmAddressCodec.encode(60, &[0u8; 32]),
            Err(AddressCodecError::InvalidBytes { coin_type: 60, .. })
        ));
    }

    #[test]
    fn parses_prefixed_and_bare_addresses() {
        let bare = "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        let prefixed = format!("0x{bare}");
        assert_eq!(
            parse_address(bare).unwrap(),
            parse_address(&prefixed).unwrap()
        );
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("not-an-address").is_err());
    }
}
