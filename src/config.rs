//! Configuration module
//!
//! Tariffs, the rate sheet, and extra country aliases can be overridden from
//! a TOML file (`~/.config/dmx-pricing/config.toml` by default). Every
//! section is optional; missing values fall back to the built-in tariff.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [pricing]
//! currency = "NGN"
//! default_markup_percent = 25
//!
//! [booking]
//! vat_rate = 0.075
//! fragile_fee = 750
//!
//! [zones.aliases]
//! "eire" = 1
//! "south africa" = "2"
//!
//! [[rates]]
//! weight_kg = 0.5
//! zone1 = 29372.63
//! zone2 = 15200
//! zone3 = 34760.8
//! zone4 = 31245.2
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

use crate::domain::{
    BookingTariff, CountryZoneMap, PricingError, PricingResult, RateRow, RateTable, ZoneId,
    DEFAULT_PROFIT_MARKUP_PERCENT,
};

/// Environment variable naming an alternate config file
pub const CONFIG_ENV_VAR: &str = "DMX_PRICING_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    #[validate(nested)]
    pub pricing: PricingConfig,
    #[validate(nested)]
    pub booking: BookingTariff,
    pub zones: ZonesConfig,
    /// Replaces the built-in rate sheet when non-empty
    pub rates: Vec<RateRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PricingConfig {
    /// ISO 4217 code used when formatting amounts
    #[validate(length(min = 3, max = 3, message = "currency must be a 3-letter code"))]
    pub currency: String,
    /// Markup used when a quote does not name one. Negative values give a
    /// discount.
    pub default_markup_percent: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "NGN".to_string(),
            default_markup_percent: DEFAULT_PROFIT_MARKUP_PERCENT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZonesConfig {
    /// Extra country aliases, added on top of the built-in list
    pub aliases: HashMap<String, ZoneId>,
}

impl AppConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "Pricing configuration loaded");
        Ok(config)
    }

    /// Parse and validate config from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Built-in aliases plus the configured extras.
    pub fn zone_map(&self) -> PricingResult<CountryZoneMap> {
        let mut map = CountryZoneMap::with_defaults();
        for (alias, zone) in &self.zones.aliases {
            if let Some(previous) = map.insert(alias, *zone)? {
                debug!(alias = %alias, from = %previous, to = %zone, "Country alias reassigned");
            }
        }
        Ok(map)
    }

    /// The configured rate sheet, or the built-in one when none is set.
    pub fn rate_table(&self) -> PricingResult<RateTable> {
        if self.rates.is_empty() {
            Ok(RateTable::with_defaults())
        } else {
            RateTable::new(self.rates.clone())
        }
    }
}

/// `~/.config/dmx-pricing/config.toml`, or `./dmx-pricing/config.toml` when
/// the platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dmx-pricing")
        .join("config.toml")
}

/// Config path from `DMX_PRICING_CONFIG`, falling back to
/// [`default_config_path`].
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path())
}

// ── Tests ──────────────────────────────────────────────────────
