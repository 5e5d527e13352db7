//! Ripple (XRP) 地址验证
//!
//! 使用 Ripple 字母表的 Base58Check，payload 为 1 字节版本（0x00）+ 20 字节账户 ID。

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AddressValidator, BASE58_CLASS};
use crate::{
    domain::{AddressMetadata, AddressType, Network, ValidationResult},
    encoding::Base58Alphabet,
    error::Result,
};

static RIPPLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^r{BASE58_CLASS}{{24,34}}$")).unwrap());

const ACCOUNT_VERSION: u8 = 0x00;
const PAYLOAD_LEN: usize = 21;
const MIN_LEN: usize = 25;
const MAX_LEN: usize = 35;

#[derive(Debug, Clone, Copy, Default)]
pub struct RippleValidator;

impl AddressValidator for RippleValidator {
    fn name(&self) -> &'static str {
        "ripple"
    }

    fn is_valid_pattern(&self, address: &str) -> bool {
        RIPPLE_PATTERN.is_match(address)
    }

    fn verify(&self, address: &str) -> Result<ValidationResult> {
        let alphabet = Base58Alphabet::RIPPLE;
        if !address.chars().all(|c| alphabet.contains(c)) {
            return Ok(ValidationResult::invalid(
                "Invalid character in Ripple address",
            ));
        }
        if !(MIN_LEN..=MAX_LEN).contains(&address.len()) {
            return Ok(ValidationResult::invalid("Invalid Ripple address length"));
        }

        let payload = alphabet.check_decode(address)?;
        if payload.len() != PAYLOAD_LEN || payload[0] != ACCOUNT_VERSION {
            return Ok(ValidationResult::invalid("Invalid Ripple account ID"));
        }

        Ok(ValidationResult::valid(
            AddressMetadata::new(AddressType::Account)
                .with_checksum(true)
                .with_network(Network::Mainnet),
        ))
    }
}
