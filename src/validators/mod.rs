//! 地址验证器
//!
//! 每个地址族一个实现。验证分两步：先做快速格式预检（正则），
//! 通过后再做完整解码与校验。验证器无状态，按币种缓存复用。

pub mod bitcoin;
pub mod cardano;
pub mod cosmos;
pub mod evm;
pub mod factory;
pub mod polkadot;
pub mod ripple;
pub mod solana;
pub mod tron;

pub use bitcoin::{BitcoinParams, BitcoinValidator};
pub use cardano::CardanoValidator;
pub use cosmos::CosmosValidator;
pub use evm::{to_checksum_address, EvmValidator};
pub use factory::{create_validator, validator_for, ValidatorFactory};
pub use polkadot::PolkadotValidator;
pub use ripple::RippleValidator;
pub use solana::SolanaValidator;
pub use tron::TronValidator;

use crate::{
    domain::ValidationResult, error::Result, infrastructure::log_redact::Redacted,
};

/// Base58（Bitcoin 字母表）字符类，供各验证器正则复用
pub(crate) const BASE58_CLASS: &str = "[1-9A-HJ-NP-Za-km-z]";

/// 地址验证器 trait
pub trait AddressValidator: Send + Sync {
    /// 地址族名称（日志用）
    fn name(&self) -> &'static str;

    /// 快速格式预检，不做任何解码
    fn is_valid_pattern(&self, address: &str) -> bool;

    /// 完整解码与校验，调用前已通过 [`is_valid_pattern`](Self::is_valid_pattern)
    ///
    /// 语义层面的拒绝直接返回 `Ok(ValidationResult::invalid(..))`，
    /// 解码失败以 `Err` 返回，由 [`validate`](Self::validate) 统一转换。
    fn verify(&self, address: &str) -> Result<ValidationResult>;

    /// 验证地址（不会失败，所有错误都转换为 `valid = false`）
    fn validate(&self, address: &str) -> ValidationResult {
        if address.is_empty() {
            return ValidationResult::invalid("Address is required");
        }

        if !self.is_valid_pattern(address) {
            tracing::debug!(
                family = self.name(),
                address = %Redacted(address),
                "地址格式预检未通过"
            );
            return ValidationResult::invalid("Invalid address format");
        }

        match self.verify(address) {
            Ok(result) => {
                tracing::debug!(
                    family = self.name(),
                    address = %Redacted(address),
                    valid = result.valid,
                    "地址验证完成"
                );
                result
            }
            Err(err) => {
                tracing::debug!(
                    family = self.name(),
                    address = %Redacted(address),
                    error = %err,
                    code = err.code(),
                    "地址解码失败"
                );
                err.into()
            }
        }
    }

    /// 规范形式，默认原样返回
    fn normalize(&self, address: &str) -> String {
        address.to_string()
    }
}
