//! 地址编码：Base58 / Base58Check 与 Bech32 / Bech32m / SegWit

pub mod base58;
pub mod bech32;

pub use base58::{
    base58_check_decode, base58_check_encode, base58_decode, base58_encode, Base58Alphabet,
};
pub use bech32::{
    bech32_decode, bech32_encode, convert_bits, segwit_decode, segwit_encode, Bech32Data,
    Bech32Variant, DecodeMode, WitnessProgram,
};
