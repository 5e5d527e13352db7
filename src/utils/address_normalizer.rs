//! 地址格式化工具
//!
//! 规范形式：EVM 为 EIP-55 校验和形式，Bech32 系为小写，其余保持原样。

use once_cell::sync::Lazy;
use regex::Regex;

pub use crate::validators::to_checksum_address;
use crate::{
    domain::{Coin, CoinGroup},
    validators::{validator_for, BASE58_CLASS},
};

/// 规范形式为小写的前缀
const LOWERCASE_PREFIXES: [&str; 4] = ["bc1", "ltc1", "addr1", "cosmos"];

/// 与验证器语法一致的独有格式
const UNIQUE_FORMAT_COINS: [Coin; 4] = [Coin::Trx, Coin::Sol, Coin::Xrp, Coin::Dot];

static BITCOIN_LEGACY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^[13LMbc]{BASE58_CLASS}{{25,}}$")).unwrap());
static BITCOIN_SEGWIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(bc1|ltc1)[a-z0-9]{39,}$").unwrap());

fn matches_format(coin: Coin, address: &str) -> bool {
    validator_for(coin).is_valid_pattern(address)
}

/// 地址转为规范形式
///
/// 指定币种时交给该币种的验证器处理；未指定或币种不受支持时按前缀推断。
pub fn normalize(address: &str, coin: Option<&str>) -> String {
    let trimmed = address.trim();

    if let Some(coin) = coin.and_then(Coin::from_symbol) {
        return validator_for(coin).normalize(trimmed);
    }

    if matches_format(Coin::Eth, trimmed) {
        return to_checksum_address(trimmed);
    }

    let lower = trimmed.to_ascii_lowercase();
    if LOWERCASE_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        return lower;
    }

    trimmed.to_string()
}

/// 粗略判断地址是否属于某个分组（只做格式匹配，不做解码）
///
/// 未知分组返回 `false`。
pub fn is_address_in_group(address: &str, group: &str) -> bool {
    let Ok(group) = group.parse::<CoinGroup>() else {
        return false;
    };
    let address = address.trim();

    match group {
        CoinGroup::Evm => matches_format(Coin::Eth, address),
        CoinGroup::Bitcoin => {
            BITCOIN_LEGACY_PATTERN.is_match(address)
                || address.starts_with("bitcoincash:")
                || BITCOIN_SEGWIT_PATTERN.is_match(&address.to_ascii_lowercase())
        }
        CoinGroup::Unique => {
            UNIQUE_FORMAT_COINS
                .into_iter()
                .any(|coin| matches_format(coin, address))
                || address.starts_with("addr1")
        }
        CoinGroup::Cosmos => address.starts_with("cosmos"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_evm() {
        let normalized = normalize("  0x742d35cc6634c0532925a3b844bc9e7595f1e6c0 ", None);
        assert_eq!(normalized, "0x742D35CC6634c0532925A3b844bC9e7595F1e6C0");
        assert_eq!(normalize(&normalized, None), normalized);
    }

    #[test]
    fn test_normalize_lowercase_families() {
        assert_eq!(
            normalize("BC1QXY2KGDYGJRSQTZQ2N0YRF2493P83KKFJHX0WLH", None),
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"
        );
        assert_eq!(
            normalize("COSMOS1VX8KNPLLRJ7N963P9TTD80W47KPACRHUTS497X", None),
            "cosmos1vx8knpllrj7n963p9ttd80w47kpacrhuts497x"
        );
    }

    #[test]
    fn test_normalize_keeps_base58() {
        assert_eq!(
            normalize("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", None),
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"
        );
        assert_eq!(
            normalize("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU", Some("SOL")),
            "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"
        );
    }

    #[test]
    fn test_normalize_with_coin() {
        assert_eq!(
            normalize("0x742d35cc6634c0532925a3b844bc9e7595f1e6c0", Some("bnb")),
            "0x742D35CC6634c0532925A3b844bC9e7595F1e6C0"
        );
        // 不受支持的币种按前缀推断
        assert_eq!(
            normalize("0x742d35cc6634c0532925a3b844bc9e7595f1e6c0", Some("DOGE")),
            "0x742D35CC6634c0532925A3b844bC9e7595F1e6C0"
        );
    }

    #[test]
    fn test_group_grammar_follows_validators() {
        for coin in UNIQUE_FORMAT_COINS {
            assert!(is_address_in_group(coin.example_address(), "UNIQUE"), "{coin}");
        }
        for &coin in crate::domain::coins_in_group(CoinGroup::Evm) {
            assert!(is_address_in_group(coin.example_address(), "EVM"), "{coin}");
        }
        assert!(!is_address_in_group("0x742d35cc6634c0532925a3b844bc9e7595f1e6", "EVM"));
    }

    #[test]
    fn test_is_address_in_group() {
        assert!(is_address_in_group(
            "0x742d35cc6634c0532925a3b844bc9e7595f1e6c0",
            "EVM"
        ));
        assert!(is_address_in_group(
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            "bitcoin"
        ));
        assert!(is_address_in_group(
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
            "BITCOIN"
        ));
        assert!(is_address_in_group(
            "TN3W4H6rK2ce4vX9YnFQHwKENnHjoxb3m9",
            "UNIQUE"
        ));
        assert!(is_address_in_group(
            "cosmos1vx8knpllrj7n963p9ttd80w47kpacrhuts497x",
            "COSMOS"
        ));
        assert!(!is_address_in_group(
            "0x742d35cc6634c0532925a3b844bc9e7595f1e6c0",
            "COSMOS"
        ));
        assert!(!is_address_in_group("anything", "SOLANA"));
    }
}
