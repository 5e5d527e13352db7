//! 服务层：地址验证与地址检测

pub mod address_service;
pub mod detection_service;

pub use address_service::{is_valid, validate, validate_as};
pub use detection_service::{detect, AddressDetector};
