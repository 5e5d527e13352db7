//! Domain 模块
//!
//! 币种注册表与验证结果模型

pub mod coin;
pub mod validation;

// 重新导出常用类型
pub use coin::{
    coin_info, coins_by_group, coins_in_group, example_address, supported_coins, AddressFamily,
    BitcoinVariant, Coin, CoinGroup, CoinInfo,
};
pub use validation::{
    AddressMetadata, AddressType, CoinPossibility, DetectionResult, Network, ValidationResult,
};
