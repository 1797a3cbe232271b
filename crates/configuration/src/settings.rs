use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the whole application.
///
/// Every section has defaults, so an empty or missing `stockroom.toml` is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub logging: Logging,
}

/// Parameters for the four-way stock classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Reorder point assumed when an inventory line's product cannot be found.
    pub fallback_reorder_point: u32,
    /// Fraction of the reorder point at or below which stock is critical.
    /// 0.5 means half the reorder point.
    pub critical_ratio: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            fallback_reorder_point: 10,
            critical_ratio: dec!(0.5),
        }
    }
}

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// An `EnvFilter` directive such as `"info"` or `"analytics=debug"`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Full,
            directory: None,
            file_prefix: "stockroom.log".to_string(),
        }
    }
}
