//! EIP-137 namehash
//!
//! Deterministic hash of a dotted name used as the resolver storage key:
//! `namehash("") == 0`, `namehash(l ++ "." ++ rest) ==
//! keccak256(namehash(rest) ++ keccak256(l))`.

use sha3::{Digest, Keccak256};
use web3::types::H256;

/// Hash a dotted name into its 32-byte resolver node.
pub fn namehash(name: &str) -> H256 {
    let mut node = [0u8; 32];
    if name.is_empty() {
        return H256(node);
    }
    for label in name.rsplit('.') {
        let label_hash = Keccak256::digest(label.as_bytes());
        let mut hasher = Keccak256::new();
        hasher.update(node);
        hasher.update(label_hash);
        node.copy_from_slice(&hasher.finalize());
    }
    H256(node)
}
