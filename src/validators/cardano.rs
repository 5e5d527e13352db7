//! Cardano 地址验证
//!
//! - Shelley：Bech32，HRP 为 `addr`（主网）或 `addr_test`（测试网）
//! - Byron：Base58，`Ae2` / `DdzFF` 前缀，只做格式检查

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AddressValidator, BASE58_CLASS};
use crate::{
    domain::{AddressMetadata, AddressType, Network, ValidationResult},
    encoding::{bech32_decode, Bech32Variant, DecodeMode},
    error::Result,
};

static SHELLEY_MAINNET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^addr1[a-z0-9]{50,}$").unwrap());

static SHELLEY_TESTNET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^addr_test1[a-z0-9]{50,}$").unwrap());

static BYRON_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(Ae2|DdzFF){BASE58_CLASS}{{51,}}$")).unwrap());

const MAINNET_HRP: &str = "addr";

#[derive(Debug, Clone, Copy, Default)]
pub struct CardanoValidator;

impl AddressValidator for CardanoValidator {
    fn name(&self) -> &'static str {
        "cardano"
    }

    fn is_valid_pattern(&self, address: &str) -> bool {
        SHELLEY_MAINNET_PATTERN.is_match(address)
            || SHELLEY_TESTNET_PATTERN.is_match(address)
            || BYRON_PATTERN.is_match(address)
    }

    fn verify(&self, address: &str) -> Result<ValidationResult> {
        if BYRON_PATTERN.is_match(address) {
            // Byron 地址只做格式校验
            return Ok(ValidationResult::valid(
                AddressMetadata::new(AddressType::Byron)
                    .with_checksum(true)
                    .with_network(Network::Mainnet),
            ));
        }

        let decoded = bech32_decode(address, DecodeMode::Expect(Bech32Variant::Bech32))?;
        let network = if decoded.hrp == MAINNET_HRP {
            Network::Mainnet
        } else {
            Network::Testnet
        };

        Ok(ValidationResult::valid(
            AddressMetadata::new(AddressType::Shelley)
                .with_checksum(true)
                .with_network(network),
        ))
    }

    fn normalize(&self, address: &str) -> String {
        if BYRON_PATTERN.is_match(address) {
            address.to_string()
        } else {
            address.to_ascii_lowercase()
        }
    }
}
