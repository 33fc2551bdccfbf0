//! SLIP-44 coin-type registry
//!
//! Maps numeric coin types to the canonical coin names attached to resolved
//! address records. The table covers the coins commonly set on resolvers;
//! supported-but-unnamed coin types fall back to their numeric label.

/// Coin type of the primary (Ethereum) address record.
pub const ETH_COIN_TYPE: &str = "60";

/// EVM chain coin types have bit 31 set (ENSIP-11).
pub const EVM_COIN_TYPE_BIT: u64 = 0x8000_0000;

/// Canonical name for a SLIP-44 coin type, if registered.
pub fn coin_name(coin_type: u64) -> Option<&'static str> {
    let name = match coin_type {
        0 => "BTC",
        2 => "LTC",
        3 => "DOGE",
        60 => "ETH",
        61 => "ETC",
        144 => "XRP",
        145 => "BCH",
        501 => "SOL",
        714 => "BNB",
        966 => "MATIC",
        _ => return None,
    };
    Some(name)
}

/// Display label for a coin type: the registered name, or the numeric
/// coin type itself when no name is registered.
pub fn coin_label(coin_type: u64) -> String {
    match coin_name(coin_type) {
        Some(name) => name.to_string(),
        None => coin_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_labels() {
        assert_eq!(coin_name(60), Some("ETH"));
        assert_eq!(coin_name(0), Some("BTC"));
        assert_eq!(coin_name(12345), None);
        assert_eq!(coin_label(966), "MATIC");
        assert_eq!(coin_label(2147483785), "2147483785");
    }
}
