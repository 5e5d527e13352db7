//! Bech32 / Bech32m / SegWit 编解码（BIP-173、BIP-350）
//!
//! 校验和是 GF(32) 上的 BCH 码：对展开后的 HRP 与 5 位数据做 polymod，
//! Bech32 的结果常量为 1，Bech32m 为 0x2bc830a3。

use std::iter;

use crate::error::CodecError;

/// 32 个数据符号
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];
const CHECKSUM_LEN: usize = 6;
const MAX_LEN: usize = 130;
const SEPARATOR: char = '1';

/// 校验和变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bech32Variant {
    Bech32,
    Bech32m,
}

impl Bech32Variant {
    const fn constant(self) -> u32 {
        match self {
            Bech32Variant::Bech32 => 1,
            Bech32Variant::Bech32m => 0x2bc830a3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bech32Variant::Bech32 => "bech32",
            Bech32Variant::Bech32m => "bech32m",
        }
    }
}

/// 解码时期望的校验和变体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    Expect(Bech32Variant),
    /// 先试 Bech32，再试 Bech32m
    Auto,
}

/// 解码结果：数据部分已去掉末尾 6 个校验符号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Data {
    pub hrp: String,
    pub data: Vec<u8>,
    pub variant: Bech32Variant,
}

/// SegWit 见证程序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessProgram {
    pub hrp: String,
    pub version: u8,
    pub program: Vec<u8>,
}

fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> impl Iterator<Item = u8> + '_ {
    hrp.bytes()
        .map(|b| b >> 5)
        .chain(iter::once(0))
        .chain(hrp.bytes().map(|b| b & 31))
}

fn verify_checksum(hrp: &str, data: &[u8], variant: Bech32Variant) -> bool {
    polymod(hrp_expand(hrp).chain(data.iter().copied())) == variant.constant()
}

fn create_checksum(hrp: &str, data: &[u8], variant: Bech32Variant) -> [u8; CHECKSUM_LEN] {
    let values = hrp_expand(hrp)
        .chain(data.iter().copied())
        .chain([0u8; CHECKSUM_LEN]);
    let modulus = polymod(values) ^ variant.constant();

    let mut checksum = [0u8; CHECKSUM_LEN];
    for (i, slot) in checksum.iter_mut().enumerate() {
        *slot = ((modulus >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

fn charset_index(ch: char) -> Option<u8> {
    CHARSET
        .iter()
        .position(|&c| c as char == ch)
        .map(|i| i as u8)
}

/// 编码 HRP 与 5 位数据
pub fn bech32_encode(hrp: &str, data: &[u8], variant: Bech32Variant) -> Result<String, CodecError> {
    if hrp.is_empty() {
        return Err(CodecError::InvalidSeparator);
    }
    if let Some((position, character)) = hrp
        .chars()
        .enumerate()
        .find(|(_, c)| !(33..=126).contains(&(*c as u32)))
    {
        return Err(CodecError::InvalidCharacter {
            character,
            position,
        });
    }
    if let Some(&value) = data.iter().find(|&&v| v >= 32) {
        return Err(CodecError::InvalidDataValue { value, bits: 5 });
    }

    let hrp = hrp.to_ascii_lowercase();
    let total_len = hrp.len() + 1 + data.len() + CHECKSUM_LEN;
    if total_len > MAX_LEN {
        return Err(CodecError::InvalidLength(total_len));
    }

    let checksum = create_checksum(&hrp, data, variant);
    let mut encoded = String::with_capacity(total_len);
    encoded.push_str(&hrp);
    encoded.push(SEPARATOR);
    encoded.extend(
        data.iter()
            .chain(checksum.iter())
            .map(|&v| CHARSET[v as usize] as char),
    );
    Ok(encoded)
}

/// 解码 Bech32 字符串
///
/// 拒绝大小写混合；要求分隔符不在首位、其后至少 6 个字符、总长度不超过 130。
pub fn bech32_decode(input: &str, mode: DecodeMode) -> Result<Bech32Data, CodecError> {
    if let Some((position, character)) = input
        .chars()
        .enumerate()
        .find(|(_, c)| !(33..=126).contains(&(*c as u32)))
    {
        return Err(CodecError::InvalidCharacter {
            character,
            position,
        });
    }

    let has_lower = input.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = input.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(CodecError::MixedCase);
    }

    if input.len() > MAX_LEN {
        return Err(CodecError::InvalidLength(input.len()));
    }

    let lowered = input.to_ascii_lowercase();
    let pos = match lowered.rfind(SEPARATOR) {
        Some(pos) if pos >= 1 && pos + CHECKSUM_LEN + 1 <= lowered.len() => pos,
        _ => return Err(CodecError::InvalidSeparator),
    };

    let hrp = &lowered[..pos];
    let data = lowered[pos + 1..]
        .chars()
        .enumerate()
        .map(|(i, character)| {
            charset_index(character).ok_or(CodecError::InvalidCharacter {
                character,
                position: pos + 1 + i,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let variant = match mode {
        DecodeMode::Expect(variant) if verify_checksum(hrp, &data, variant) => variant,
        DecodeMode::Expect(_) => return Err(CodecError::InvalidChecksum),
        DecodeMode::Auto => [Bech32Variant::Bech32, Bech32Variant::Bech32m]
            .into_iter()
            .find(|&variant| verify_checksum(hrp, &data, variant))
            .ok_or(CodecError::InvalidChecksum)?,
    };

    let payload_len = data.len() - CHECKSUM_LEN;
    let mut data = data;
    data.truncate(payload_len);

    Ok(Bech32Data {
        hrp: hrp.to_string(),
        data,
        variant,
    })
}

/// 通用位流重打包（如 5 位 ↔ 8 位）
///
/// `pad = false` 为严格模式：剩余位数 ≥ `from_bits` 或剩余位非零都视为非规范填充。
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, CodecError> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_value: u32 = (1 << to_bits) - 1;
    let max_acc: u32 = (1 << (from_bits + to_bits)) - 1;
    let mut result = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for &value in data {
        let v = u32::from(value);
        if v >> from_bits != 0 {
            return Err(CodecError::InvalidDataValue {
                value,
                bits: from_bits,
            });
        }
        acc = ((acc << from_bits) | v) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(CodecError::InvalidPadding);
    }

    Ok(result)
}

/// 编码 SegWit 地址：v0 使用 Bech32，v1 及以上使用 Bech32m
pub fn segwit_encode(hrp: &str, version: u8, program: &[u8]) -> Result<String, CodecError> {
    check_witness_program(version, program.len())?;

    let variant = if version == 0 {
        Bech32Variant::Bech32
    } else {
        Bech32Variant::Bech32m
    };
    let mut data = Vec::with_capacity(1 + program.len() * 8 / 5 + 1);
    data.push(version);
    data.extend(convert_bits(program, 8, 5, true)?);
    bech32_encode(hrp, &data, variant)
}

/// 解码 SegWit 地址
pub fn segwit_decode(address: &str) -> Result<WitnessProgram, CodecError> {
    let Bech32Data { hrp, data, variant } = bech32_decode(address, DecodeMode::Auto)?;

    let (&version, words) = data.split_first().ok_or(CodecError::EmptyData)?;
    if version > 16 {
        return Err(CodecError::InvalidWitnessVersion(version));
    }

    let expected = if version == 0 {
        Bech32Variant::Bech32
    } else {
        Bech32Variant::Bech32m
    };
    if variant != expected {
        return Err(CodecError::EncodingMismatch {
            version,
            expected: expected.as_str(),
        });
    }

    let program = convert_bits(words, 5, 8, false)?;
    check_witness_program(version, program.len())?;

    Ok(WitnessProgram {
        hrp,
        version,
        program,
    })
}

fn check_witness_program(version: u8, len: usize) -> Result<(), CodecError> {
    if version > 16 {
        return Err(CodecError::InvalidWitnessVersion(version));
    }
    if !(2..=40).contains(&len) {
        return Err(CodecError::InvalidProgramLength(len));
    }
    match version {
        0 if len != 20 && len != 32 => Err(CodecError::InvalidProgramLength(len)),
        1 if len != 32 => Err(CodecError::InvalidProgramLength(len)),
        _ => Ok(()),
    }
}
