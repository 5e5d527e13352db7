//! Bitcoin 系地址验证（BTC / BCH / LTC）
//!
//! 支持的格式：
//! - Legacy Base58Check：P2PKH / P2SH，按版本字节区分
//! - SegWit Bech32 / Bech32m：P2WPKH / P2WSH / Taproot
//! - CashAddr（仅 BCH，只检查前缀与字符集）

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AddressValidator, BASE58_CLASS};
use crate::{
    domain::{AddressMetadata, AddressType, BitcoinVariant, Network, ValidationResult},
    encoding::{base58_check_decode, segwit_decode},
    error::Result,
};

static P2PKH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^[13LM]{BASE58_CLASS}{{25,34}}$")).unwrap());

static P2SH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^[32M]{BASE58_CLASS}{{25,34}}$")).unwrap());

static SEGWIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(bc1[a-z0-9]{6,87}|ltc1[a-z0-9]{6,87})$").unwrap());

static TAPROOT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^bc1p[a-z0-9]{58}$").unwrap());

static CASHADDR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^bitcoincash:[qpzry9x8gf2tvdw0s3jn54khce6mua7l]{42,}$").unwrap()
});

const LEGACY_PAYLOAD_LEN: usize = 21;

/// 单个币种的前缀配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitcoinParams {
    pub p2pkh_versions: &'static [u8],
    pub p2sh_versions: &'static [u8],
    /// SegWit HRP，`None` 表示不支持 SegWit
    pub segwit_hrp: Option<&'static str>,
    pub supports_taproot: bool,
    pub cashaddr_prefix: Option<&'static str>,
}

impl BitcoinParams {
    pub const BITCOIN: Self = Self {
        p2pkh_versions: &[0x00],
        p2sh_versions: &[0x05],
        segwit_hrp: Some("bc"),
        supports_taproot: true,
        cashaddr_prefix: None,
    };

    pub const BITCOIN_CASH: Self = Self {
        p2pkh_versions: &[0x00],
        p2sh_versions: &[0x05],
        segwit_hrp: None,
        supports_taproot: false,
        cashaddr_prefix: Some("bitcoincash:"),
    };

    /// 0x32 为新版 P2SH 前缀（M...），0x05 为兼容旧版（3...）
    pub const LITECOIN: Self = Self {
        p2pkh_versions: &[0x30],
        p2sh_versions: &[0x32, 0x05],
        segwit_hrp: Some("ltc"),
        supports_taproot: false,
        cashaddr_prefix: None,
    };

    pub fn for_variant(variant: BitcoinVariant) -> &'static Self {
        match variant {
            BitcoinVariant::Bitcoin => &Self::BITCOIN,
            BitcoinVariant::BitcoinCash => &Self::BITCOIN_CASH,
            BitcoinVariant::Litecoin => &Self::LITECOIN,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BitcoinValidator {
    params: &'static BitcoinParams,
}

impl BitcoinValidator {
    pub fn new(variant: BitcoinVariant) -> Self {
        Self {
            params: BitcoinParams::for_variant(variant),
        }
    }

    pub fn params(&self) -> &'static BitcoinParams {
        self.params
    }

    fn segwit_hrp_of(&self, address: &str) -> Option<&'static str> {
        self.params.segwit_hrp.filter(|hrp| {
            address
                .strip_prefix(*hrp)
                .is_some_and(|rest| rest.starts_with('1'))
        })
    }

    fn mainnet(address_type: AddressType) -> ValidationResult {
        ValidationResult::valid(
            AddressMetadata::new(address_type)
                .with_checksum(true)
                .with_network(Network::Mainnet),
        )
    }

    fn verify_cashaddr(&self, address: &str) -> Result<ValidationResult> {
        // 只做前缀与字符集检查，不计算 CashAddr polymod
        if !CASHADDR_PATTERN.is_match(address) {
            return Ok(ValidationResult::invalid("Invalid CashAddr format"));
        }
        Ok(Self::mainnet(AddressType::Cashaddr))
    }

    fn verify_segwit(&self, address: &str, hrp: &str) -> Result<ValidationResult> {
        let witness = segwit_decode(address)?;
        if witness.hrp != hrp {
            return Ok(ValidationResult::invalid(format!(
                "Invalid HRP: expected {hrp}, got {}",
                witness.hrp
            )));
        }

        let address_type = match (witness.version, witness.program.len()) {
            (0, 20) => AddressType::P2wpkh,
            (0, 32) => AddressType::P2wsh,
            (1, 32) if self.params.supports_taproot => AddressType::Taproot,
            _ => {
                return Ok(ValidationResult::invalid(
                    "Invalid SegWit version or program length",
                ))
            }
        };
        Ok(Self::mainnet(address_type))
    }

    fn verify_legacy(&self, address: &str) -> Result<ValidationResult> {
        let payload = base58_check_decode(address)?;
        if payload.len() != LEGACY_PAYLOAD_LEN {
            return Ok(ValidationResult::invalid(format!(
                "Invalid address length: {} bytes",
                payload.len()
            )));
        }

        let version = payload[0];
        let address_type = if self.params.p2pkh_versions.contains(&version) {
            AddressType::P2pkh
        } else if self.params.p2sh_versions.contains(&version) {
            AddressType::P2sh
        } else {
            return Ok(ValidationResult::invalid("Invalid address version"));
        };
        Ok(Self::mainnet(address_type))
    }
}

impl AddressValidator for BitcoinValidator {
    fn name(&self) -> &'static str {
        "bitcoin"
    }

    fn is_valid_pattern(&self, address: &str) -> bool {
        if self.params.cashaddr_prefix.is_some() && CASHADDR_PATTERN.is_match(address) {
            return true;
        }
        if self.segwit_hrp_of(address).is_some() {
            return SEGWIT_PATTERN.is_match(address);
        }
        if self.params.supports_taproot && TAPROOT_PATTERN.is_match(address) {
            return true;
        }
        P2PKH_PATTERN.is_match(address) || P2SH_PATTERN.is_match(address)
    }

    fn verify(&self, address: &str) -> Result<ValidationResult> {
        if let Some(prefix) = self.params.cashaddr_prefix {
            if address.starts_with(prefix) {
                return self.verify_cashaddr(address);
            }
        }
        if let Some(hrp) = self.segwit_hrp_of(address) {
            return self.verify_segwit(address, hrp);
        }
        self.verify_legacy(address)
    }

    fn normalize(&self, address: &str) -> String {
        // Bech32 / CashAddr 规范形式为小写，Base58 区分大小写
        let lower = address.to_ascii_lowercase();
        let is_case_insensitive = self
            .params
            .segwit_hrp
            .is_some_and(|hrp| lower.starts_with(&format!("{hrp}1")))
            || self
                .params
                .cashaddr_prefix
                .is_some_and(|prefix| lower.starts_with(prefix));
        if is_case_insensitive {
            lower
        } else {
            address.to_string()
        }
    }
}
