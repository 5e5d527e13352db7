//! Cosmos Hub 地址验证（Bech32）
//!
//! HRP 决定地址类型：`cosmos` 账户、`cosmosvaloper` 验证人、`cosmosvalcons` 共识节点。

use once_cell::sync::Lazy;
use regex::Regex;

use super::AddressValidator;
use crate::{
    domain::{AddressMetadata, AddressType, Network, ValidationResult},
    encoding::{bech32_decode, Bech32Variant, DecodeMode},
    error::Result,
};

static ACCOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^cosmos1[a-z0-9]{38,59}$").unwrap());

static VALOPER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^cosmosvaloper1[a-z0-9]{38,59}$").unwrap());

static VALCONS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^cosmosvalcons1[a-z0-9]{38,100}$").unwrap());

/// 20 字节账户 ID 对应 32 个 5-bit 分组
const MIN_DATA_GROUPS: usize = 32;

fn address_type_for_hrp(hrp: &str) -> Option<AddressType> {
    match hrp {
        "cosmos" => Some(AddressType::Account),
        "cosmosvaloper" => Some(AddressType::Validator),
        "cosmosvalcons" => Some(AddressType::Consensus),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CosmosValidator;

impl AddressValidator for CosmosValidator {
    fn name(&self) -> &'static str {
        "cosmos"
    }

    fn is_valid_pattern(&self, address: &str) -> bool {
        ACCOUNT_PATTERN.is_match(address)
            || VALOPER_PATTERN.is_match(address)
            || VALCONS_PATTERN.is_match(address)
    }

    fn verify(&self, address: &str) -> Result<ValidationResult> {
        let decoded = bech32_decode(address, DecodeMode::Expect(Bech32Variant::Bech32))?;

        let Some(address_type) = address_type_for_hrp(&decoded.hrp) else {
            return Ok(ValidationResult::invalid(format!(
                "Invalid Cosmos prefix: {}",
                decoded.hrp
            )));
        };
        if decoded.data.len() < MIN_DATA_GROUPS {
            return Ok(ValidationResult::invalid("Invalid address data length"));
        }

        Ok(ValidationResult::valid(
            AddressMetadata::new(address_type)
                .with_checksum(true)
                .with_network(Network::Mainnet),
        ))
    }

    fn normalize(&self, address: &str) -> String {
        address.to_ascii_lowercase()
    }
}
