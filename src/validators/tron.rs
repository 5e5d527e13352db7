//! Tron 地址验证
//!
//! Base58Check 编码，payload 21 字节，首字节固定 0x41。

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AddressValidator, BASE58_CLASS};
use crate::{
    domain::{AddressMetadata, AddressType, Network, ValidationResult},
    encoding::base58_check_decode,
    error::Result,
};

static TRON_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^T{BASE58_CLASS}{{33}}$")).unwrap());

const TRON_VERSION: u8 = 0x41;
const PAYLOAD_LEN: usize = 21;

#[derive(Debug, Clone, Copy, Default)]
pub struct TronValidator;

impl AddressValidator for TronValidator {
    fn name(&self) -> &'static str {
        "tron"
    }

    fn is_valid_pattern(&self, address: &str) -> bool {
        TRON_PATTERN.is_match(address)
    }

    fn verify(&self, address: &str) -> Result<ValidationResult> {
        let payload = base58_check_decode(address)?;
        if payload.len() != PAYLOAD_LEN {
            return Ok(ValidationResult::invalid(format!(
                "Invalid Tron address length: {} bytes",
                payload.len()
            )));
        }
        if payload[0] != TRON_VERSION {
            return Ok(ValidationResult::invalid("Invalid Tron address prefix"));
        }

        Ok(ValidationResult::valid(
            AddressMetadata::new(AddressType::Account)
                .with_checksum(true)
                .with_network(Network::Mainnet),
        ))
    }
}
