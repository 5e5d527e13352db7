//! 错误类型
//!
//! 编解码层返回 [`CodecError`]，验证器边界统一转换为 [`AddressError`]。
//! 公开的 `validate` / `detect` 不会向调用方抛出任何错误，只返回数据。

use serde::Serialize;
use thiserror::Error;

/// 编解码错误（Base58 / Bech32 / SegWit）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid Base58Check: too short")]
    TooShort,

    #[error("Invalid Base58Check: checksum mismatch")]
    ChecksumMismatch,

    #[error("Mixed-case Bech32 string")]
    MixedCase,

    #[error("Missing or misplaced Bech32 separator")]
    InvalidSeparator,

    #[error("Invalid Bech32 length: {0}")]
    InvalidLength(usize),

    #[error("Invalid Bech32 checksum")]
    InvalidChecksum,

    #[error("Witness version {version} requires {expected} encoding")]
    EncodingMismatch {
        version: u8,
        expected: &'static str,
    },

    #[error("Invalid witness version: {0}")]
    InvalidWitnessVersion(u8),

    #[error("Invalid witness program length: {0}")]
    InvalidProgramLength(usize),

    #[error("Non-canonical padding in bit conversion")]
    InvalidPadding,

    #[error("Value {value} does not fit in {bits} bits")]
    InvalidDataValue { value: u8, bits: u32 },

    #[error("Empty data part")]
    EmptyData,
}

/// 错误分类（稳定标识，便于调用方归类处理）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedCoin,
    PatternMismatch,
    CodecError,
    ChecksumMismatch,
}

/// 地址验证错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// 空地址或空币种
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unsupported coin: {0}")]
    UnsupportedCoin(String),

    /// 未通过快速格式预检
    #[error("Invalid address format")]
    PatternMismatch,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Checksum mismatch: {0}")]
    ChecksumMismatch(String),
}

impl AddressError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::InvalidInput(_) => ErrorKind::InvalidInput,
            AddressError::UnsupportedCoin(_) => ErrorKind::UnsupportedCoin,
            AddressError::PatternMismatch => ErrorKind::PatternMismatch,
            AddressError::Codec(CodecError::ChecksumMismatch)
            | AddressError::Codec(CodecError::InvalidChecksum)
            | AddressError::ChecksumMismatch(_) => ErrorKind::ChecksumMismatch,
            AddressError::Codec(_) => ErrorKind::CodecError,
        }
    }

    /// 错误代码字符串
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::UnsupportedCoin => "unsupported_coin",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::CodecError => "codec_error",
            ErrorKind::ChecksumMismatch => "checksum_mismatch",
        }
    }
}

pub type Result<T, E = AddressError> = std::result::Result<T, E>;
