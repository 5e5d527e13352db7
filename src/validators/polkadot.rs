//! Polkadot SS58 地址验证
//!
//! 只检查 Base58 解码与网络前缀字节，不计算 SS58 blake2b 校验和。

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AddressValidator, BASE58_CLASS};
use crate::{
    domain::{AddressMetadata, AddressType, Network, ValidationResult},
    encoding::base58_decode,
    error::Result,
};

static SS58_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{BASE58_CLASS}{{46,48}}$")).unwrap());

const MIN_DECODED_LEN: usize = 3;

fn network_for_prefix(prefix: u8) -> Option<Network> {
    match prefix {
        0 => Some(Network::Polkadot),
        2 => Some(Network::Kusama),
        42 => Some(Network::Generic),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PolkadotValidator;

impl AddressValidator for PolkadotValidator {
    fn name(&self) -> &'static str {
        "polkadot"
    }

    fn is_valid_pattern(&self, address: &str) -> bool {
        SS58_PATTERN.is_match(address)
    }

    fn verify(&self, address: &str) -> Result<ValidationResult> {
        let decoded = base58_decode(address)?;
        if decoded.len() < MIN_DECODED_LEN {
            return Ok(ValidationResult::invalid("Address too short"));
        }

        let Some(network) = network_for_prefix(decoded[0]) else {
            return Ok(ValidationResult::invalid(format!(
                "Invalid SS58 prefix: {}",
                decoded[0]
            )));
        };

        Ok(ValidationResult::valid(
            AddressMetadata::new(AddressType::Ss58)
                .with_checksum(true)
                .with_network(network),
        ))
    }
}
