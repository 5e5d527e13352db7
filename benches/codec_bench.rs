//! 编解码性能基准测试
//! 使用criterion进行性能测试

use chainaddr::{
    crypto::{keccak256, sha256},
    encoding::{base58_check_decode, base58_encode, segwit_decode},
    to_checksum_address,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_hashes(c: &mut Criterion) {
    let data = [0x5au8; 64];
    c.bench_function("sha256_64_bytes", |b| b.iter(|| sha256(black_box(&data))));
    c.bench_function("keccak256_64_bytes", |b| {
        b.iter(|| keccak256(black_box(&data)))
    });
}

fn bench_base58(c: &mut Criterion) {
    let payload = [0x11u8; 25];
    c.bench_function("base58_encode_25_bytes", |b| {
        b.iter(|| base58_encode(black_box(&payload)))
    });
    c.bench_function("base58_check_decode_address", |b| {
        b.iter(|| base58_check_decode(black_box("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa")))
    });
}

fn bench_bech32(c: &mut Criterion) {
    c.bench_function("segwit_decode_p2wpkh", |b| {
        b.iter(|| segwit_decode(black_box("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh")))
    });
}

fn bench_eip55(c: &mut Criterion) {
    c.bench_function("eip55_checksum", |b| {
        b.iter(|| to_checksum_address(black_box("0x742d35cc6634c0532925a3b844bc9e7595f1e6c0")))
    });
}

criterion_group!(benches, bench_hashes, bench_base58, bench_bech32, bench_eip55);
criterion_main!(benches);
