//! 编解码性质测试
//!
//! 往返一致性、校验和敏感性与规范化幂等性。

use chainaddr::{
    encoding::{
        base58_check_decode, base58_decode, base58_encode, bech32_decode, segwit_decode,
        segwit_encode, Base58Alphabet, DecodeMode,
    },
    normalize,
};

const BASE58_SYMBOLS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BECH32_SYMBOLS: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// 简单的确定性伪随机序列（xorshift）
fn pseudo_random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as u8
        })
        .collect()
}

#[test]
fn test_base58_round_trip() {
    for seed in 1..64u64 {
        let len = (seed as usize * 7) % 80;
        let mut data = pseudo_random_bytes(seed, len);
        // 一部分样本带前导零
        if seed % 3 == 0 {
            data.splice(0..0, std::iter::repeat(0).take((seed % 5) as usize));
        }
        let encoded = base58_encode(&data);
        assert_eq!(base58_decode(&encoded).unwrap(), data, "seed={seed}");
    }
}

#[test]
fn test_ripple_alphabet_round_trip() {
    let alphabet = Base58Alphabet::RIPPLE;
    for seed in 1..32u64 {
        let mut payload = vec![0u8];
        payload.extend(pseudo_random_bytes(seed, 20));
        let encoded = alphabet.check_encode(&payload);
        assert!(encoded.starts_with('r'));
        assert_eq!(alphabet.check_decode(&encoded).unwrap(), payload);
    }
}

#[test]
fn test_segwit_round_trip() {
    let cases: Vec<(&str, u8, usize)> = vec![
        ("bc", 0, 20),
        ("bc", 0, 32),
        ("bc", 1, 32),
        ("ltc", 0, 20),
        ("tb", 2, 2),
        ("bc", 16, 40),
    ];
    for (i, (hrp, version, len)) in cases.into_iter().enumerate() {
        let program = pseudo_random_bytes(i as u64 + 11, len);
        let address = segwit_encode(hrp, version, &program).unwrap();
        let decoded = segwit_decode(&address).unwrap();
        assert_eq!(decoded.hrp, hrp);
        assert_eq!(decoded.version, version);
        assert_eq!(decoded.program, program);
    }
}

/// Base58Check：任意一位替换都会导致解码失败
#[test]
fn test_base58check_single_substitution_detected() {
    let address = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
    for (i, original) in address.char_indices() {
        for replacement in BASE58_SYMBOLS.chars().filter(|&c| c != original) {
            let mut mutated = address.to_string();
            mutated.replace_range(i..i + 1, &replacement.to_string());
            assert!(base58_check_decode(&mutated).is_err(), "{mutated}");
        }
    }
}

#[test]
fn test_ripple_single_substitution_detected() {
    let address = "rEb8TK3gBgk5auZkwc6sHnwrGVJH8DuaLh";
    let alphabet = Base58Alphabet::RIPPLE;
    for (i, original) in address.char_indices() {
        for replacement in BASE58_SYMBOLS.chars().filter(|&c| c != original) {
            let mut mutated = address.to_string();
            mutated.replace_range(i..i + 1, &replacement.to_string());
            assert!(alphabet.check_decode(&mutated).is_err(), "{mutated}");
        }
    }
}

/// Bech32：数据部分任意一位替换都会导致校验失败
#[test]
fn test_bech32_single_substitution_detected() {
    let address = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";
    let data_start = address.rfind('1').unwrap() + 1;
    for (i, original) in address.char_indices().skip(data_start) {
        for replacement in BECH32_SYMBOLS.chars().filter(|&c| c != original) {
            let mut mutated = address.to_string();
            mutated.replace_range(i..i + 1, &replacement.to_string());
            assert!(
                bech32_decode(&mutated, DecodeMode::Auto).is_err(),
                "{mutated}"
            );
        }
    }
}

#[test]
fn test_normalize_idempotent() {
    let samples = [
        "0x742d35cc6634c0532925a3b844bc9e7595f1e6c0",
        "0x742D35CC6634C0532925A3B844BC9E7595F1E6C0",
        "BC1QXY2KGDYGJRSQTZQ2N0YRF2493P83KKFJHX0WLH",
        "ltc1qw508d6qejxtdg4y5r3zarvary0c5xw7kgmn4n9",
        "COSMOS1VX8KNPLLRJ7N963P9TTD80W47KPACRHUTS497X",
        "  addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x ",
    ];
    for sample in samples {
        let once = normalize(sample, None);
        assert_eq!(normalize(&once, None), once, "{sample}");
    }
}
