//! 地址检测服务
//!
//! 在不知道币种的情况下推断地址可能属于哪些币种，并按置信度排序。
//!
//! 评估顺序：
//! 1. 独有格式（TRX / SOL / XRP / ADA / DOT / ATOM），匹配并验证通过即为独有置信度
//! 2. EVM 十六进制格式，只验证一次，所有 EVM 链同一置信度
//! 3. Bitcoin 系子格式，按子格式给出基础置信度，再逐个验证 BTC / BCH / LTC
//!
//! 同一币种取最高置信度；排序稳定，同分保持评估顺序。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::DetectionConfig,
    domain::{coins_in_group, AddressType, Coin, CoinGroup, CoinPossibility, DetectionResult},
    infrastructure::log_redact::Redacted,
    validators::{validator_for, BASE58_CLASS},
};

/// Bitcoin 系子格式对应的置信度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitcoinTier {
    /// CashAddr / Taproot，只属于单一币种
    Exclusive,
    /// `bc1` / `ltc1`
    Bech32,
    /// Base58 P2PKH / P2SH
    Legacy,
}

struct FormatRule<T> {
    name: &'static str,
    pattern: Regex,
    target: T,
}

macro_rules! rule {
    ($name:expr, $target:expr, $pattern:expr) => {
        FormatRule {
            name: $name,
            pattern: Regex::new(&$pattern).unwrap(),
            target: $target,
        }
    };
}

/// 独有格式的检测语法
enum Grammar {
    /// 与该币种验证器的格式预检一致
    Validator,
    /// 检测专用语法（比验证器更窄）
    Pattern(Regex),
}

struct UniqueRule {
    name: &'static str,
    coin: Coin,
    grammar: Grammar,
}

impl UniqueRule {
    const fn shared(name: &'static str, coin: Coin) -> Self {
        Self {
            name,
            coin,
            grammar: Grammar::Validator,
        }
    }

    fn matches(&self, address: &str) -> bool {
        match &self.grammar {
            Grammar::Validator => validator_for(self.coin).is_valid_pattern(address),
            Grammar::Pattern(pattern) => pattern.is_match(address),
        }
    }
}

static UNIQUE_RULES: Lazy<[UniqueRule; 6]> = Lazy::new(|| {
    [
        UniqueRule::shared("tron", Coin::Trx),
        UniqueRule::shared("solana", Coin::Sol),
        UniqueRule::shared("ripple", Coin::Xrp),
        UniqueRule::shared("cardano", Coin::Ada),
        UniqueRule::shared("polkadot", Coin::Dot),
        UniqueRule {
            name: "cosmos",
            coin: Coin::Atom,
            grammar: Grammar::Pattern(
                Regex::new("^(cosmos1|cosmosvaloper1|cosmosvalcons1)[a-z0-9]{38}$").unwrap(),
            ),
        },
    ]
});

/// 独占子格式排在通用 `bc1` 之前，Taproot 地址才能拿到独占置信度
static BITCOIN_RULES: Lazy<[FormatRule<BitcoinTier>; 6]> = Lazy::new(|| {
    [
        rule!(
            "cashaddr",
            BitcoinTier::Exclusive,
            "^bitcoincash:[qpzry9x8gf2tvdw0s3jn54khce6mua7l]{42,}$"
        ),
        rule!("taproot", BitcoinTier::Exclusive, "^bc1p[a-z0-9]{58}$"),
        rule!("bech32_btc", BitcoinTier::Bech32, "^bc1[a-z0-9]{39,59}$"),
        rule!("bech32_ltc", BitcoinTier::Bech32, "^ltc1[a-z0-9]{39,59}$"),
        rule!("p2pkh", BitcoinTier::Legacy, format!("^[13LM]{BASE58_CLASS}{{25,34}}$")),
        rule!("p2sh", BitcoinTier::Legacy, format!("^[3M2]{BASE58_CLASS}{{25,34}}$")),
    ]
});

static DEFAULT_DETECTOR: Lazy<AddressDetector> = Lazy::new(AddressDetector::default);

/// 地址检测器
#[derive(Debug, Clone, Default)]
pub struct AddressDetector {
    config: DetectionConfig,
}

impl AddressDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义置信度；任一权重不在 `[0, 1]` 内时返回错误
    pub fn with_config(config: DetectionConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    fn tier_confidence(&self, tier: BitcoinTier) -> f64 {
        match tier {
            BitcoinTier::Exclusive => self.config.bitcoin_exclusive,
            BitcoinTier::Bech32 => self.config.bitcoin_bech32,
            BitcoinTier::Legacy => self.config.bitcoin_legacy,
        }
    }

    /// 检测地址可能属于的币种
    pub fn detect(&self, address: &str) -> DetectionResult {
        let address = address.trim();
        if address.is_empty() {
            return DetectionResult::default();
        }

        let mut candidates = Candidates::default();

        for rule in UNIQUE_RULES.iter() {
            if !rule.matches(address) {
                continue;
            }
            let result = validator_for(rule.coin).validate(address);
            tracing::trace!(
                rule = rule.name,
                address = %Redacted(address),
                valid = result.valid,
                "独有格式匹配"
            );
            if result.valid {
                candidates.record(rule.coin, self.config.unique, result.address_type());
            }
        }

        let evm = validator_for(Coin::Eth);
        if evm.is_valid_pattern(address) {
            let result = evm.validate(address);
            tracing::trace!(address = %Redacted(address), valid = result.valid, "EVM 格式匹配");
            if result.valid {
                for &coin in coins_in_group(CoinGroup::Evm) {
                    candidates.record(coin, self.config.evm, result.address_type());
                }
            }
        }

        if let Some(rule) = BITCOIN_RULES
            .iter()
            .find(|rule| rule.pattern.is_match(address))
        {
            let confidence = self.tier_confidence(rule.target);
            for &coin in coins_in_group(CoinGroup::Bitcoin) {
                let result = validator_for(coin).validate(address);
                tracing::trace!(
                    rule = rule.name,
                    coin = %coin,
                    address = %Redacted(address),
                    valid = result.valid,
                    "Bitcoin 系格式匹配"
                );
                if result.valid {
                    candidates.record(coin, confidence, result.address_type());
                }
            }
        }

        let result = candidates.into_result();
        tracing::debug!(
            address = %Redacted(address),
            candidates = result.possible_coins.len(),
            best_guess = ?result.best_guess,
            "地址检测完成"
        );
        result
    }
}

/// 候选集合：按首次出现顺序保存，同一币种只保留最高置信度
#[derive(Default)]
struct Candidates {
    entries: Vec<CoinPossibility>,
}

impl Candidates {
    fn record(&mut self, coin: Coin, confidence: f64, address_type: Option<AddressType>) {
        let candidate = CoinPossibility {
            coin,
            confidence,
            address_type,
        };
        if let Some(existing) = self.entries.iter_mut().find(|entry| entry.coin == coin) {
            if confidence > existing.confidence {
                *existing = candidate;
            }
            return;
        }
        self.entries.push(candidate);
    }

    fn into_result(mut self) -> DetectionResult {
        // sort_by 是稳定排序
        self.entries
            .sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let best_guess = self.entries.first().map(|entry| entry.coin);
        DetectionResult {
            possible_coins: self.entries,
            best_guess,
            group: best_guess.map(Coin::group),
        }
    }
}

/// 使用默认置信度检测地址
pub fn detect(address: &str) -> DetectionResult {
    DEFAULT_DETECTOR.detect(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(result: &DetectionResult) -> Vec<Coin> {
        result.possible_coins.iter().map(|p| p.coin).collect()
    }

    #[test]
    fn test_empty_input() {
        for input in ["", "   ", "\n\t"] {
            let result = detect(input);
            assert!(result.is_empty());
            assert!(result.best_guess.is_none());
            assert!(result.group.is_none());
        }
    }

    #[test]
    fn test_unrecognized_input() {
        let result = detect("definitely not an address");
        assert!(result.is_empty());
        assert!(result.best_guess.is_none());
    }

    #[test]
    fn test_tron_is_unique() {
        let result = detect("TN3W4H6rK2ce4vX9YnFQHwKENnHjoxb3m9");
        assert_eq!(coins(&result), vec![Coin::Trx]);
        assert_eq!(result.possible_coins[0].confidence, 1.0);
        assert_eq!(result.best_guess, Some(Coin::Trx));
        assert_eq!(result.group, Some(CoinGroup::Unique));
    }

    #[test]
    fn test_evm_offers_every_chain() {
        let result = detect("0x742d35cc6634c0532925a3b844bc9e7595f1e6c0");
        assert_eq!(coins(&result), coins_in_group(CoinGroup::Evm).to_vec());
        assert!(result.possible_coins.iter().all(|p| p.confidence == 0.9));
        assert!(result
            .possible_coins
            .iter()
            .all(|p| p.address_type == Some(AddressType::Account)));
        assert_eq!(result.best_guess, Some(Coin::Eth));
        assert_eq!(result.group, Some(CoinGroup::Evm));
    }

    #[test]
    fn test_legacy_bitcoin_is_ambiguous() {
        let result = detect("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        assert_eq!(coins(&result), vec![Coin::Btc, Coin::Bch]);
        assert!(result.possible_coins.iter().all(|p| p.confidence == 0.85));
        assert_eq!(result.best_guess, Some(Coin::Btc));
        assert_eq!(result.group, Some(CoinGroup::Bitcoin));
    }

    #[test]
    fn test_segwit_confidence() {
        let result = detect("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh");
        assert_eq!(coins(&result), vec![Coin::Btc]);
        assert_eq!(result.possible_coins[0].confidence, 0.95);
        assert_eq!(result.possible_coins[0].address_type, Some(AddressType::P2wpkh));

        let result = detect("ltc1qw508d6qejxtdg4y5r3zarvary0c5xw7kgmn4n9");
        assert_eq!(coins(&result), vec![Coin::Ltc]);
        assert_eq!(result.possible_coins[0].confidence, 0.95);
    }

    #[test]
    fn test_taproot_is_exclusive() {
        let result = detect("bc1p5d7rjq7g6rdk2yhzks9smlaqtedr4dekq08ge8ztwac72sfr9rusxg3297");
        assert_eq!(coins(&result), vec![Coin::Btc]);
        assert_eq!(result.possible_coins[0].confidence, 1.0);
        assert_eq!(result.possible_coins[0].address_type, Some(AddressType::Taproot));
    }

    #[test]
    fn test_cashaddr_is_exclusive() {
        let result = detect("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a");
        assert_eq!(coins(&result), vec![Coin::Bch]);
        assert_eq!(result.possible_coins[0].confidence, 1.0);
    }

    #[test]
    fn test_custom_weights() {
        let detector = AddressDetector::with_config(DetectionConfig {
            bitcoin_legacy: 0.5,
            ..DetectionConfig::default()
        })
        .unwrap();
        let result = detector.detect("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        assert!(result.possible_coins.iter().all(|p| p.confidence == 0.5));
    }

    #[test]
    fn test_out_of_range_weights_rejected() {
        for weight in [-0.1, 1.5, f64::NAN] {
            let err = AddressDetector::with_config(DetectionConfig {
                evm: weight,
                ..DetectionConfig::default()
            })
            .unwrap_err();
            assert!(err.to_string().contains("detection.evm"), "{err}");
        }
    }

    #[test]
    fn test_candidates_keep_max_confidence_in_first_seen_order() {
        let mut candidates = Candidates::default();
        candidates.record(Coin::Btc, 0.85, Some(AddressType::P2pkh));
        candidates.record(Coin::Eth, 0.9, None);
        candidates.record(Coin::Btc, 0.95, Some(AddressType::P2wpkh));
        candidates.record(Coin::Eth, 0.5, None);
        candidates.record(Coin::Sol, 0.9, None);

        let result = candidates.into_result();
        assert_eq!(coins(&result), vec![Coin::Btc, Coin::Eth, Coin::Sol]);
        assert_eq!(result.possible_coins[0].address_type, Some(AddressType::P2wpkh));
        assert_eq!(result.confidence_of(Coin::Eth), Some(0.9));
    }
}
