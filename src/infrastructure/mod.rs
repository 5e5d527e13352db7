//! 基础设施：日志初始化与日志脱敏

pub mod log_redact;
pub mod logging;

pub use log_redact::{redact_address, Redacted};
pub use logging::{init_default_logging, init_logging};
