//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

/// 地址检测置信度权重
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// 独有格式（TRX / SOL / XRP / ADA / DOT / ATOM）
    pub unique: f64,
    /// EVM 地址，同一地址在所有 EVM 链上都有效
    pub evm: f64,
    /// CashAddr / Taproot
    pub bitcoin_exclusive: f64,
    /// `bc1` / `ltc1` SegWit
    pub bitcoin_bech32: f64,
    /// Base58 P2PKH / P2SH，BTC 与 BCH 共享版本字节
    pub bitcoin_legacy: f64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            unique: 1.0,
            evm: 0.9,
            bitcoin_exclusive: 1.0,
            bitcoin_bech32: 0.95,
            bitcoin_legacy: 0.85,
        }
    }
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {value:?}")),
        Err(_) => Ok(default),
    }
}

impl DetectionConfig {
    /// 读取 `DETECT_CONFIDENCE_*` 环境变量覆盖默认权重
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            unique: env_f64("DETECT_CONFIDENCE_UNIQUE", defaults.unique)?,
            evm: env_f64("DETECT_CONFIDENCE_EVM", defaults.evm)?,
            bitcoin_exclusive: env_f64(
                "DETECT_CONFIDENCE_BITCOIN_EXCLUSIVE",
                defaults.bitcoin_exclusive,
            )?,
            bitcoin_bech32: env_f64("DETECT_CONFIDENCE_BITCOIN_BECH32", defaults.bitcoin_bech32)?,
            bitcoin_legacy: env_f64("DETECT_CONFIDENCE_BITCOIN_LEGACY", defaults.bitcoin_legacy)?,
        })
    }

    fn weights(&self) -> [(&'static str, f64); 5] {
        [
            ("unique", self.unique),
            ("evm", self.evm),
            ("bitcoin_exclusive", self.bitcoin_exclusive),
            ("bitcoin_bech32", self.bitcoin_bech32),
            ("bitcoin_legacy", self.bitcoin_legacy),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.weights() {
            if !(0.0..=1.0).contains(&weight) {
                anyhow::bail!("detection.{name} must be within [0, 1], got {weight}");
            }
        }
        Ok(())
    }
}

impl Config {
    /// 从环境变量加载配置（存在 `.env` 时先加载）
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            logging: LoggingConfig::default(),
            detection: DetectionConfig::from_env()?,
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        self.detection.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_detection_defaults() {
        let config = DetectionConfig::default();
        assert_eq!(config.unique, 1.0);
        assert_eq!(config.evm, 0.9);
        assert_eq!(config.bitcoin_exclusive, 1.0);
        assert_eq!(config.bitcoin_bech32, 0.95);
        assert_eq!(config.bitcoin_legacy, 0.85);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_detection_from_env() {
        std::env::set_var("DETECT_CONFIDENCE_BITCOIN_LEGACY", "0.5");
        let config = DetectionConfig::from_env().unwrap();
        std::env::remove_var("DETECT_CONFIDENCE_BITCOIN_LEGACY");
        assert_eq!(config.bitcoin_legacy, 0.5);
        assert_eq!(config.evm, 0.9);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[logging]
level = "debug"
format = "json"

[detection]
evm = 0.8
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.detection.evm, 0.8);
        // 未写出的权重使用默认值
        assert_eq!(config.detection.bitcoin_bech32, 0.95);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = Config::from_file("/nonexistent/chainaddr.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[detection\nevm = ").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            logging: LoggingConfig {
                level: "info".into(),
                format: "text".into(),
            },
            detection: DetectionConfig::default(),
        };
        assert!(config.validate().is_ok());

        config.detection.evm = 1.5;
        assert!(config.validate().is_err());

        config.detection.evm = 0.9;
        config.logging.format = "xml".into();
        assert!(config.validate().is_err());

        config.logging.format = "json".into();
        config.logging.level = "verbose".into();
        assert!(config.validate().is_err());
    }
}
