//! 地址验证服务
//!
//! 对外入口：按币种符号选择验证器并返回验证结果，从不返回错误。

use crate::{
    domain::{Coin, ValidationResult},
    error::{AddressError, Result},
    infrastructure::log_redact::Redacted,
    validators::validator_for,
};

/// 验证指定币种的地址
///
/// 币种符号不区分大小写，地址首尾空白会被去除。
/// 所有失败都以 `valid = false` 加 `message` 的形式返回。
pub fn validate(address: &str, coin: &str) -> ValidationResult {
    match resolve_coin(address, coin) {
        Ok(coin) => validate_as(address, coin),
        Err(err) => {
            tracing::debug!(
                coin = coin,
                address = %Redacted(address),
                code = err.code(),
                "地址验证请求被拒绝"
            );
            err.into()
        }
    }
}

/// 以已解析的币种验证地址
pub fn validate_as(address: &str, coin: Coin) -> ValidationResult {
    validator_for(coin).validate(address.trim())
}

fn resolve_coin(address: &str, coin: &str) -> Result<Coin> {
    if address.is_empty() {
        return Err(AddressError::InvalidInput(
            "Address is required and must be a string".into(),
        ));
    }
    if coin.is_empty() {
        return Err(AddressError::InvalidInput(
            "Coin symbol is required and must be a string".into(),
        ));
    }
    coin.parse()
}

/// 地址是否有效（便捷方法）
pub fn is_valid(address: &str, coin: &str) -> bool {
    validate(address, coin).valid
}
