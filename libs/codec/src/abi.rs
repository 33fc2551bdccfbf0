//! Canonical resolver function ABIs
//!
//! Single source of truth for the resolver calling convention. Selectors are
//! derived from the canonical Solidity signatures and verified by test:
//! `text(bytes32,string)` = 0x59d1d43c, `addr(bytes32,uint256)` = 0xf1cb7e06,
//! `contenthash(bytes32)` = 0xbc1c58d1, `multicall(bytes[])` = 0xac9650d8.

use ethabi::{Function, Param, ParamType, StateMutability};

fn view_function(name: &str, inputs: Vec<Param>, outputs: Vec<Param>) -> Function {
    #[allow(deprecated)]
    Function {
        name: name.to_string(),
        inputs,
        outputs,
        constant: None,
        state_mutability: StateMutability::View,
    }
}

fn param(name: &str, kind: ParamType) -> Param {
    Param {
        name: name.to_string(),
        kind,
        internal_type: None,
    }
}

/// `text(bytes32 node, string key) returns (string)`
pub fn text_function() -> Function {
    view_function(
        "text",
        vec![
            param("node", ParamType::FixedBytes(32)),
            param("key", ParamType::String),
        ],
        vec![param("", ParamType::String)],
    )
}

/// `addr(bytes32 node, uint256 coinType) returns (bytes)`
pub fn addr_function() -> Function {
    view_function(
        "addr",
        vec![
            param("node", ParamType::FixedBytes(32)),
            param("coinType", ParamType::Uint(256)),
        ],
        vec![param("", ParamType::Bytes)],
    )
}

/// `contenthash(bytes32 node) returns (bytes)`
pub fn contenthash_function() -> Function {
    view_function(
        "contenthash",
        vec![param("node", ParamType::FixedBytes(32))],
        vec![param("", ParamType::Bytes)],
    )
}

/// `multicall(bytes[] data) returns (bytes[])`
pub fn multicall_function() -> Function {
    view_function(
        "multicall",
        vec![param("data", ParamType::Array(Box::new(ParamType::Bytes)))],
        vec![param("", ParamType::Array(Box::new(ParamType::Bytes)))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_resolver_contract() {
        assert_eq!(text_function().short_signature(), [0x59, 0xd1, 0xd4, 0x3c]);
        assert_eq!(addr_function().short_signature(), [0xf1, 0xcb, 0x7e, 0x06]);
        assert_eq!(
            contenthash_function().short_signature(),
            [0xbc, 0x1c, 0x58, 0xd1]
        );
        assert_eq!(
            multicall_function().short_signature(),
            [0xac, 0x96, 0x50, 0xd8]
        );
    }
}
