//! chainaddr - 离线多链地址验证与币种检测
//!
//! 纯函数、无网络调用：按各链公开规范解码并校验地址，
//! 或在不知道币种时给出按置信度排序的候选币种。
//!
//! ```
//! let result = chainaddr::validate("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh", "BTC");
//! assert!(result.valid);
//!
//! let detected = chainaddr::detect("TN3W4H6rK2ce4vX9YnFQHwKENnHjoxb3m9");
//! assert_eq!(detected.best_guess, Some(chainaddr::Coin::Trx));
//! ```

pub mod config;
pub mod crypto;
pub mod domain;
pub mod encoding;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;
pub mod validators;

// 重新导出常用类型
pub use domain::{
    coin_info, coins_by_group, example_address, supported_coins, AddressMetadata, AddressType,
    Coin, CoinGroup, CoinInfo, CoinPossibility, DetectionResult, Network, ValidationResult,
};
pub use error::{AddressError, CodecError, ErrorKind};
pub use service::{detect, validate, AddressDetector};
pub use utils::{is_address_in_group, normalize, to_checksum_address};

pub mod prelude {
    pub use crate::{
        config::{Config, DetectionConfig, LoggingConfig},
        domain::{Coin, CoinGroup, DetectionResult, ValidationResult},
        error::{AddressError, CodecError},
        service::{detect, validate, AddressDetector},
        validators::{validator_for, AddressValidator},
    };
}
