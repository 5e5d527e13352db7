//! 验证 / 检测结果模型
//!
//! 序列化字段使用 camelCase，未设置的可选字段不输出。

use serde::{Deserialize, Serialize};

use super::coin::{Coin, CoinGroup};
use crate::error::AddressError;

/// 地址子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    P2pkh,
    P2sh,
    P2wpkh,
    P2wsh,
    Taproot,
    Cashaddr,
    /// 账户地址（EVM / Tron / Ripple / Cosmos）
    Account,
    Validator,
    Consensus,
    Byron,
    Shelley,
    Ss58,
}

impl AddressType {
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::P2pkh => "p2pkh",
            AddressType::P2sh => "p2sh",
            AddressType::P2wpkh => "p2wpkh",
            AddressType::P2wsh => "p2wsh",
            AddressType::Taproot => "taproot",
            AddressType::Cashaddr => "cashaddr",
            AddressType::Account => "account",
            AddressType::Validator => "validator",
            AddressType::Consensus => "consensus",
            AddressType::Byron => "byron",
            AddressType::Shelley => "shelley",
            AddressType::Ss58 => "ss58",
        }
    }
}

/// 网络标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    /// SS58 前缀 0
    Polkadot,
    /// SS58 前缀 2
    Kusama,
    /// SS58 前缀 42
    Generic,
}

/// 地址元数据
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressMetadata {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
    /// 该格式是否带有内置校验和
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<bool>,
    /// 仅在大小写混合的 EVM 地址上设置
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum_valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_address: Option<String>,
}

impl AddressMetadata {
    pub fn new(address_type: AddressType) -> Self {
        Self {
            address_type: Some(address_type),
            ..Self::default()
        }
    }

    pub fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = Some(checksum);
        self
    }

    pub fn with_checksum_valid(mut self, valid: bool) -> Self {
        self.checksum_valid = Some(valid);
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    pub fn with_normalized_address(mut self, address: impl Into<String>) -> Self {
        self.normalized_address = Some(address.into());
        self
    }
}

/// 单次验证结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AddressMetadata>,
}

impl ValidationResult {
    pub fn valid(metadata: AddressMetadata) -> Self {
        Self {
            valid: true,
            metadata: Some(metadata),
            ..Self::default()
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings
            .get_or_insert_with(Vec::new)
            .push(warning.into());
        self
    }

    pub fn address_type(&self) -> Option<AddressType> {
        self.metadata.as_ref().and_then(|m| m.address_type)
    }

    pub fn normalized_address(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.normalized_address.as_deref())
    }
}

impl From<AddressError> for ValidationResult {
    fn from(err: AddressError) -> Self {
        ValidationResult::invalid(err.to_string())
    }
}

/// 检测候选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPossibility {
    pub coin: Coin,
    /// 置信度，取值 [0, 1]
    pub confidence: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
}

/// 检测结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// 按置信度降序
    pub possible_coins: Vec<CoinPossibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_guess: Option<Coin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<CoinGroup>,
}

impl DetectionResult {
    pub fn is_empty(&self) -> bool {
        self.possible_coins.is_empty()
    }

    pub fn contains(&self, coin: Coin) -> bool {
        self.possible_coins.iter().any(|p| p.coin == coin)
    }

    pub fn confidence_of(&self, coin: Coin) -> Option<f64> {
        self.possible_coins
            .iter()
            .find(|p| p.coin == coin)
            .map(|p| p.confidence)
    }
}
