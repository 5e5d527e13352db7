//! Keccak-256（以太坊使用的原始 Keccak，填充规则 0x01，非 SHA3-256）

use sha3::{Digest, Keccak256};

/// 计算 Keccak-256 摘要
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
