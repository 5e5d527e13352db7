//! EVM 地址验证（EIP-55 Checksum）
//!
//! 全小写或全大写地址视为未带校验和，格式正确即有效。
//! 大小写混合的地址按 EIP-55 比对；比对失败仍判为有效，
//! 但 `checksum` 与 `checksumValid` 均为 `false` 并附带警告。

use once_cell::sync::Lazy;
use regex::Regex;

use super::AddressValidator;
use crate::{
    crypto::keccak256,
    domain::{AddressMetadata, AddressType, Network, ValidationResult},
    error::Result,
    infrastructure::log_redact::Redacted,
};

static EVM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap());

pub const CHECKSUM_MISMATCH_WARNING: &str = "EIP-55 checksum mismatch";

/// 计算 EIP-55 校验和形式
///
/// 输入须为 `0x` + 40 位十六进制（大小写不限），否则原样返回。
pub fn to_checksum_address(address: &str) -> String {
    if !EVM_PATTERN.is_match(address) {
        return address.to_string();
    }

    let lower = address[2..].to_ascii_lowercase();
    let hash = keccak256(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, ch) in lower.chars().enumerate() {
        let hash_byte = hash[i / 2];
        let hash_nibble = if i % 2 == 0 {
            hash_byte >> 4
        } else {
            hash_byte & 0x0f
        };

        if ch.is_ascii_alphabetic() && hash_nibble >= 8 {
            checksummed.push(ch.to_ascii_uppercase());
        } else {
            checksummed.push(ch);
        }
    }
    checksummed
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EvmValidator;

impl AddressValidator for EvmValidator {
    fn name(&self) -> &'static str {
        "evm"
    }

    fn is_valid_pattern(&self, address: &str) -> bool {
        EVM_PATTERN.is_match(address)
    }

    fn verify(&self, address: &str) -> Result<ValidationResult> {
        let hex_part = &address[2..];
        let has_upper = hex_part.bytes().any(|b| (b'A'..=b'F').contains(&b));
        let has_lower = hex_part.bytes().any(|b| (b'a'..=b'f').contains(&b));
        let checksummed = to_checksum_address(address);

        let metadata = AddressMetadata::new(AddressType::Account).with_network(Network::Mainnet);

        if !(has_upper && has_lower) {
            return Ok(ValidationResult::valid(
                metadata
                    .with_checksum(false)
                    .with_normalized_address(checksummed),
            ));
        }

        if checksummed == address {
            return Ok(ValidationResult::valid(
                metadata
                    .with_checksum(true)
                    .with_checksum_valid(true)
                    .with_normalized_address(checksummed),
            ));
        }

        tracing::warn!(
            address = %Redacted(address),
            "EVM 地址 EIP-55 校验和不匹配"
        );
        Ok(ValidationResult::valid(
            metadata
                .with_checksum(false)
                .with_checksum_valid(false)
                .with_normalized_address(checksummed),
        )
        .with_message("Valid address format (checksum mismatch)")
        .with_warning(CHECKSUM_MISMATCH_WARNING))
    }

    fn normalize(&self, address: &str) -> String {
        to_checksum_address(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_address_vectors() {
        // EIP-55 规范中的测试向量
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            assert_eq!(to_checksum_address(&expected.to_lowercase()), expected);
            assert_eq!(to_checksum_address(expected), expected);
        }
    }

    #[test]
    fn test_checksum_address_passthrough_for_invalid_input() {
        assert_eq!(to_checksum_address("0x123"), "0x123");
        assert_eq!(to_checksum_address("hello"), "hello");
    }

    #[test]
    fn test_valid_checksum() {
        let result = EvmValidator.validate("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert!(result.valid);
        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.checksum, Some(true));
        assert_eq!(metadata.checksum_valid, Some(true));
        assert_eq!(metadata.address_type, Some(AddressType::Account));
        assert!(result.warnings.is_none());
    }

    #[test]
    fn test_lowercase_has_no_checksum() {
        let result = EvmValidator.validate("0x742d35cc6634c0532925a3b844bc9e7595f1e6c0");
        assert!(result.valid);
        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.checksum, Some(false));
        assert_eq!(metadata.checksum_valid, None);
        assert_eq!(
            metadata.normalized_address.as_deref(),
            Some("0x742D35CC6634c0532925A3b844bC9e7595F1e6C0")
        );
    }

    #[test]
    fn test_uppercase_has_no_checksum() {
        let result = EvmValidator.validate("0x742D35CC6634C0532925A3B844BC9E7595F1E6C0");
        assert!(result.valid);
        assert_eq!(result.metadata.unwrap().checksum, Some(false));
    }

    #[test]
    fn test_checksum_mismatch_is_still_valid() {
        let result = EvmValidator.validate("0x742d35Cc6634C0532925a3b844Bc9e7595f1e6C0");
        assert!(result.valid);
        assert_eq!(
            result.message.as_deref(),
            Some("Valid address format (checksum mismatch)")
        );
        assert_eq!(
            result.warnings,
            Some(vec![CHECKSUM_MISMATCH_WARNING.to_string()])
        );
        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.checksum, Some(false));
        assert_eq!(metadata.checksum_valid, Some(false));
        assert_eq!(
            metadata.normalized_address.as_deref(),
            Some("0x742D35CC6634c0532925A3b844bC9e7595F1e6C0")
        );
    }

    #[test]
    fn test_invalid_format() {
        for address in [
            "742d35cc6634c0532925a3b844bc9e7595f1e6c0",
            "0x742d35cc6634c0532925a3b844bc9e7595f1e6c",
            "0x742d35cc6634c0532925a3b844bc9e7595f1e6cg",
            "0X742d35cc6634c0532925a3b844bc9e7595f1e6c0",
        ] {
            let result = EvmValidator.validate(address);
            assert!(!result.valid, "{address}");
            assert_eq!(result.message.as_deref(), Some("Invalid address format"));
        }
    }
}
