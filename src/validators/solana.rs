//! Solana 地址验证（Base58 编码的 32 字节公钥，无校验和）

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AddressValidator, BASE58_CLASS};
use crate::{
    domain::{AddressMetadata, AddressType, Network, ValidationResult},
    encoding::base58_decode,
    error::Result,
};

static SOLANA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{BASE58_CLASS}{{32,44}}$")).unwrap());

const PUBKEY_LEN: usize = 32;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaValidator;

impl AddressValidator for SolanaValidator {
    fn name(&self) -> &'static str {
        "solana"
    }

    fn is_valid_pattern(&self, address: &str) -> bool {
        SOLANA_PATTERN.is_match(address)
    }

    fn verify(&self, address: &str) -> Result<ValidationResult> {
        let decoded = base58_decode(address)?;
        if decoded.len() != PUBKEY_LEN {
            return Ok(ValidationResult::invalid(format!(
                "Invalid address length: Solana addresses must be {PUBKEY_LEN} bytes, got {}",
                decoded.len()
            )));
        }

        Ok(ValidationResult::valid(
            AddressMetadata::new(AddressType::Account)
                .with_checksum(false)
                .with_network(Network::Mainnet),
        ))
    }
}
