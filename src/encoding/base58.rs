//! Base58 / Base58Check 编解码
//!
//! 大整数进制转换：字节串视为大端无符号整数，逐位除 58 取余。
//! 前导 0x00 字节无法由整数转换表示，按位置补回字母表首字符。

use std::iter;

use crate::{crypto::double_sha256, error::CodecError};

const CHECKSUM_LEN: usize = 4;
const INVALID: u8 = 0xff;

/// Base58 字母表（58 个符号 + ASCII 反查表）
#[derive(Debug, Clone, Copy)]
pub struct Base58Alphabet {
    symbols: [u8; 58],
    digits: [u8; 128],
}

impl Base58Alphabet {
    /// Bitcoin 字母表（不含 `0 O I l`）
    pub const BITCOIN: Self =
        Self::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

    /// Ripple 字母表（同一字符集的不同排列，首字符为 `r`）
    pub const RIPPLE: Self =
        Self::new(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

    pub const fn new(symbols: &[u8; 58]) -> Self {
        let mut digits = [INVALID; 128];
        let mut i = 0;
        while i < 58 {
            digits[symbols[i] as usize] = i as u8;
            i += 1;
        }
        Self {
            symbols: *symbols,
            digits,
        }
    }

    /// 零值符号（代表一个前导 0x00 字节）
    pub fn zero_symbol(&self) -> char {
        self.symbols[0] as char
    }

    pub fn contains(&self, ch: char) -> bool {
        self.digit(ch).is_some()
    }

    fn digit(&self, ch: char) -> Option<u8> {
        let code = ch as u32;
        if code >= 128 {
            return None;
        }
        match self.digits[code as usize] {
            INVALID => None,
            d => Some(d),
        }
    }

    pub fn encode(&self, input: &[u8]) -> String {
        // 小端存放的 58 进制数字
        let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);
        for &byte in input {
            let mut carry = u32::from(byte);
            for digit in digits.iter_mut() {
                carry += u32::from(*digit) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                digits.push((carry % 58) as u8);
                carry /= 58;
            }
        }

        let leading_zeros = input.iter().take_while(|&&b| b == 0).count();
        let mut encoded = String::with_capacity(leading_zeros + digits.len());
        encoded.extend(iter::repeat(self.zero_symbol()).take(leading_zeros));
        encoded.extend(
            digits
                .iter()
                .rev()
                .map(|&d| self.symbols[d as usize] as char),
        );
        encoded
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, CodecError> {
        // 小端存放的字节
        let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
        for (position, character) in input.chars().enumerate() {
            let digit = self
                .digit(character)
                .ok_or(CodecError::InvalidCharacter {
                    character,
                    position,
                })?;
            let mut carry = u32::from(digit);
            for byte in bytes.iter_mut() {
                carry += u32::from(*byte) * 58;
                *byte = carry as u8;
                carry >>= 8;
            }
            while carry > 0 {
                bytes.push(carry as u8);
                carry >>= 8;
            }
        }

        let zero = self.zero_symbol();
        let leading_zeros = input.chars().take_while(|&c| c == zero).count();
        bytes.extend(iter::repeat(0).take(leading_zeros));
        bytes.reverse();
        Ok(bytes)
    }

    /// 附加 `sha256(sha256(payload))` 前 4 字节后编码
    pub fn check_encode(&self, payload: &[u8]) -> String {
        let checksum = double_sha256(payload);
        let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
        data.extend_from_slice(payload);
        data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
        self.encode(&data)
    }

    /// 解码并校验 4 字节校验和，返回去掉校验和的 payload
    pub fn check_decode(&self, input: &str) -> Result<Vec<u8>, CodecError> {
        let mut decoded = self.decode(input)?;
        if decoded.len() < CHECKSUM_LEN + 1 {
            return Err(CodecError::TooShort);
        }

        let split = decoded.len() - CHECKSUM_LEN;
        let expected = double_sha256(&decoded[..split]);
        if decoded[split..] != expected[..CHECKSUM_LEN] {
            return Err(CodecError::ChecksumMismatch);
        }

        decoded.truncate(split);
        Ok(decoded)
    }
}

pub fn base58_encode(input: &[u8]) -> String {
    Base58Alphabet::BITCOIN.encode(input)
}

pub fn base58_decode(input: &str) -> Result<Vec<u8>, CodecError> {
    Base58Alphabet::BITCOIN.decode(input)
}

pub fn base58_check_encode(payload: &[u8]) -> String {
    Base58Alphabet::BITCOIN.check_encode(payload)
}

pub fn base58_check_decode(input: &str) -> Result<Vec<u8>, CodecError> {
    Base58Alphabet::BITCOIN.check_decode(input)
}
