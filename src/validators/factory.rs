//! 验证器工厂与缓存
//!
//! 每个币种的验证器只构造一次，之后所有调用共享同一实例。

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use once_cell::sync::Lazy;

use super::{
    AddressValidator, BitcoinValidator, CardanoValidator, CosmosValidator, EvmValidator,
    PolkadotValidator, RippleValidator, SolanaValidator, TronValidator,
};
use crate::domain::{AddressFamily, Coin};

static VALIDATOR_CACHE: Lazy<RwLock<HashMap<Coin, Arc<dyn AddressValidator>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 按地址族构造验证器
pub struct ValidatorFactory;

impl ValidatorFactory {
    pub fn create(coin: Coin) -> Arc<dyn AddressValidator> {
        match coin.family() {
            AddressFamily::Bitcoin(variant) => Arc::new(BitcoinValidator::new(variant)),
            AddressFamily::Evm => Arc::new(EvmValidator),
            AddressFamily::Tron => Arc::new(TronValidator),
            AddressFamily::Solana => Arc::new(SolanaValidator),
            AddressFamily::Ripple => Arc::new(RippleValidator),
            AddressFamily::Cardano => Arc::new(CardanoValidator),
            AddressFamily::Polkadot => Arc::new(PolkadotValidator),
            AddressFamily::Cosmos => Arc::new(CosmosValidator),
        }
    }
}

/// 构造新的验证器实例（不经过缓存）
pub fn create_validator(coin: Coin) -> Arc<dyn AddressValidator> {
    ValidatorFactory::create(coin)
}

/// 获取币种对应的缓存验证器
pub fn validator_for(coin: Coin) -> Arc<dyn AddressValidator> {
    // 验证器无状态，锁中毒不影响其可用性
    if let Some(validator) = VALIDATOR_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&coin)
    {
        return Arc::clone(validator);
    }

    let mut cache = VALIDATOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let validator = cache.entry(coin).or_insert_with(|| {
        tracing::debug!(coin = %coin, "创建地址验证器");
        ValidatorFactory::create(coin)
    });
    Arc::clone(validator)
}
