//! 哈希原语

pub mod keccak;
pub mod sha256;

pub use keccak::keccak256;
pub use sha256::{double_sha256, sha256};
