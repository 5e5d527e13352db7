//! 币种注册表
//!
//! 固定枚举的受支持币种、所属分组以及地址族映射。注册表只读，进程内静态初始化。

use std::{collections::BTreeMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// 币种分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoinGroup {
    /// Bitcoin 系（BTC / BCH / LTC）
    Bitcoin,
    /// EVM 兼容链，共享同一地址格式
    Evm,
    /// 各自独有格式
    Unique,
    Cosmos,
}

impl CoinGroup {
    pub const ALL: [CoinGroup; 4] = [
        CoinGroup::Bitcoin,
        CoinGroup::Evm,
        CoinGroup::Unique,
        CoinGroup::Cosmos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CoinGroup::Bitcoin => "BITCOIN",
            CoinGroup::Evm => "EVM",
            CoinGroup::Unique => "UNIQUE",
            CoinGroup::Cosmos => "COSMOS",
        }
    }
}

impl fmt::Display for CoinGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoinGroup {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoinGroup::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AddressError::InvalidInput(format!("Unknown coin group: {s}")))
    }
}

/// Bitcoin 系变体，决定版本字节与前缀配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitcoinVariant {
    Bitcoin,
    BitcoinCash,
    Litecoin,
}

/// 地址族：同一地址族共享一种验证器实现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Bitcoin(BitcoinVariant),
    Evm,
    Tron,
    Solana,
    Ripple,
    Cardano,
    Polkadot,
    Cosmos,
}

/// 受支持的币种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Coin {
    Btc,
    Bch,
    Ltc,
    Eth,
    Bnb,
    Matic,
    Avax,
    Arb,
    Op,
    Kaia,
    Ftm,
    Trx,
    Sol,
    Xrp,
    Ada,
    Dot,
    Atom,
}

/// 币种静态信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinInfo {
    pub name: &'static str,
    pub group: CoinGroup,
}

impl Coin {
    /// 注册表顺序（检测结果同分时按此顺序排列）
    pub const ALL: [Coin; 17] = [
        Coin::Btc,
        Coin::Bch,
        Coin::Ltc,
        Coin::Eth,
        Coin::Bnb,
        Coin::Matic,
        Coin::Avax,
        Coin::Arb,
        Coin::Op,
        Coin::Kaia,
        Coin::Ftm,
        Coin::Trx,
        Coin::Sol,
        Coin::Xrp,
        Coin::Ada,
        Coin::Dot,
        Coin::Atom,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Coin::Btc => "BTC",
            Coin::Bch => "BCH",
            Coin::Ltc => "LTC",
            Coin::Eth => "ETH",
            Coin::Bnb => "BNB",
            Coin::Matic => "MATIC",
            Coin::Avax => "AVAX",
            Coin::Arb => "ARB",
            Coin::Op => "OP",
            Coin::Kaia => "KAIA",
            Coin::Ftm => "FTM",
            Coin::Trx => "TRX",
            Coin::Sol => "SOL",
            Coin::Xrp => "XRP",
            Coin::Ada => "ADA",
            Coin::Dot => "DOT",
            Coin::Atom => "ATOM",
        }
    }

    pub fn info(self) -> CoinInfo {
        let (name, group) = match self {
            Coin::Btc => ("Bitcoin", CoinGroup::Bitcoin),
            Coin::Bch => ("Bitcoin Cash", CoinGroup::Bitcoin),
            Coin::Ltc => ("Litecoin", CoinGroup::Bitcoin),
            Coin::Eth => ("Ethereum", CoinGroup::Evm),
            Coin::Bnb => ("BNB Smart Chain", CoinGroup::Evm),
            Coin::Matic => ("Polygon", CoinGroup::Evm),
            Coin::Avax => ("Avalanche", CoinGroup::Evm),
            Coin::Arb => ("Arbitrum", CoinGroup::Evm),
            Coin::Op => ("Optimism", CoinGroup::Evm),
            Coin::Kaia => ("Kaia", CoinGroup::Evm),
            Coin::Ftm => ("Fantom", CoinGroup::Evm),
            Coin::Trx => ("Tron", CoinGroup::Unique),
            Coin::Sol => ("Solana", CoinGroup::Unique),
            Coin::Xrp => ("Ripple", CoinGroup::Unique),
            Coin::Ada => ("Cardano", CoinGroup::Unique),
            Coin::Dot => ("Polkadot", CoinGroup::Unique),
            Coin::Atom => ("Cosmos", CoinGroup::Cosmos),
        };
        CoinInfo { name, group }
    }

    pub fn group(self) -> CoinGroup {
        self.info().group
    }

    pub fn family(self) -> AddressFamily {
        match self {
            Coin::Btc => AddressFamily::Bitcoin(BitcoinVariant::Bitcoin),
            Coin::Bch => AddressFamily::Bitcoin(BitcoinVariant::BitcoinCash),
            Coin::Ltc => AddressFamily::Bitcoin(BitcoinVariant::Litecoin),
            Coin::Eth
            | Coin::Bnb
            | Coin::Matic
            | Coin::Avax
            | Coin::Arb
            | Coin::Op
            | Coin::Kaia
            | Coin::Ftm => AddressFamily::Evm,
            Coin::Trx => AddressFamily::Tron,
            Coin::Sol => AddressFamily::Solana,
            Coin::Xrp => AddressFamily::Ripple,
            Coin::Ada => AddressFamily::Cardano,
            Coin::Dot => AddressFamily::Polkadot,
            Coin::Atom => AddressFamily::Cosmos,
        }
    }

    /// 已知有效的示例地址
    pub fn example_address(self) -> &'static str {
        match self {
            Coin::Btc => "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            Coin::Bch => "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
            Coin::Ltc => "ltc1qw508d6qejxtdg4y5r3zarvary0c5xw7kgmn4n9",
            Coin::Eth
            | Coin::Bnb
            | Coin::Matic
            | Coin::Avax
            | Coin::Arb
            | Coin::Op
            | Coin::Kaia
            | Coin::Ftm => "0x742d35Cc6634C0532925a3b844Bc9e7595f1e6C0",
            Coin::Trx => "TN3W4H6rK2ce4vX9YnFQHwKENnHjoxb3m9",
            Coin::Sol => "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
            Coin::Xrp => "rEb8TK3gBgk5auZkwc6sHnwrGVJH8DuaLh",
            Coin::Ada => "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x",
            Coin::Dot => "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5",
            Coin::Atom => "cosmos1vx8knpllrj7n963p9ttd80w47kpacrhuts497x",
        }
    }

    /// 按符号查找（不区分大小写）
    pub fn from_symbol(symbol: &str) -> Option<Coin> {
        Coin::ALL
            .into_iter()
            .find(|coin| coin.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Coin {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coin::from_symbol(s).ok_or_else(|| AddressError::UnsupportedCoin(s.to_string()))
    }
}

/// 分组 → 币种列表（组内保持注册表顺序）
static COINS_BY_GROUP: Lazy<BTreeMap<CoinGroup, Vec<Coin>>> = Lazy::new(|| {
    let mut groups: BTreeMap<CoinGroup, Vec<Coin>> = BTreeMap::new();
    for coin in Coin::ALL {
        groups.entry(coin.group()).or_default().push(coin);
    }
    groups
});

/// 所有受支持的币种符号
pub fn supported_coins() -> Vec<&'static str> {
    Coin::ALL.iter().map(|coin| coin.symbol()).collect()
}

/// 查询币种信息，未知符号返回 `None`
pub fn coin_info(symbol: &str) -> Option<CoinInfo> {
    Coin::from_symbol(symbol).map(Coin::info)
}

/// 示例地址，未知符号返回 `None`
pub fn example_address(symbol: &str) -> Option<&'static str> {
    Coin::from_symbol(symbol).map(Coin::example_address)
}

pub fn coins_by_group() -> &'static BTreeMap<CoinGroup, Vec<Coin>> {
    &COINS_BY_GROUP
}

pub fn coins_in_group(group: CoinGroup) -> &'static [Coin] {
    COINS_BY_GROUP
        .get(&group)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
