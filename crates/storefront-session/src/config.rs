//! # Store Configuration
//!
//! Configuration management for the storefront session.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. TOML Config File (highest priority)                                 │
//! │     explicit path passed to StoreConfig::load, or                       │
//! │     ~/.config/storefront/storefront.toml (Linux)                        │
//! │     ~/Library/Application Support/com.storefront.shop/... (macOS)       │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                    │
//! │     $100.00 free-shipping threshold, $10.00 shipping, 8% tax            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [store]
//! name = "Threadline"
//! currency_symbol = "$"
//!
//! [pricing]
//! free_shipping_threshold_cents = 10000  # strictly above this ships free
//! flat_shipping_cents = 1000
//! tax_rate_bps = 800                     # 8%
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_core::money::Money;
use storefront_core::pricing::{
    PricingPolicy, FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS, SALES_TAX_BPS,
};
use storefront_core::types::TaxRate;
use storefront_core::validation::{validate_price_cents, validate_tax_rate_bps};
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

// =============================================================================
// Store Settings
// =============================================================================

/// Presentation settings for the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store name shown in the header.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Symbol prefixed to formatted amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Storefront".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Pricing Settings
// =============================================================================

/// Shipping and tax settings, in cents and basis points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Subtotals strictly above this ship free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold_cents: i64,

    /// Shipping charged at or below the threshold.
    #[serde(default = "default_flat_shipping")]
    pub flat_shipping_cents: i64,

    /// Sales tax in basis points (800 = 8%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate_bps: u32,
}

fn default_free_shipping_threshold() -> i64 {
    FREE_SHIPPING_THRESHOLD_CENTS
}

fn default_flat_shipping() -> i64 {
    FLAT_SHIPPING_CENTS
}

fn default_tax_rate() -> u32 {
    SALES_TAX_BPS
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            free_shipping_threshold_cents: default_free_shipping_threshold(),
            flat_shipping_cents: default_flat_shipping(),
            tax_rate_bps: default_tax_rate(),
        }
    }
}

// =============================================================================
// Store Config
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub pricing: PricingSettings,
}

impl StoreConfig {
    /// Loads configuration from file and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml); a missing file is not an error
    pub fn load(config_path: Option<PathBuf>) -> SessionResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> SessionResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SessionError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Store config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SessionResult<()> {
        let pricing = &self.pricing;

        validate_price_cents(
            "free_shipping_threshold_cents",
            pricing.free_shipping_threshold_cents,
        )
        .and_then(|_| validate_price_cents("flat_shipping_cents", pricing.flat_shipping_cents))
        .and_then(|_| validate_tax_rate_bps(pricing.tax_rate_bps))
        .map_err(|e| SessionError::InvalidConfig(e.to_string()))?;

        if self.store.name.trim().is_empty() {
            return Err(SessionError::InvalidConfig(
                "store name must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// The pricing policy described by this config.
    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            free_shipping_threshold: Money::from_cents(self.pricing.free_shipping_threshold_cents),
            flat_shipping: Money::from_cents(self.pricing.flat_shipping_cents),
            tax_rate: TaxRate::from_bps(self.pricing.tax_rate_bps),
        }
    }

    /// Formats an amount with the configured currency symbol (`$63.98`).
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.store.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "shop")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("storefront-config-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config_matches_standard_policy() {
        let config = StoreConfig::default();
        assert_eq!(config.pricing_policy(), PricingPolicy::standard());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: StoreConfig = toml::from_str(
            r#"
            [pricing]
            tax_rate_bps = 825
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.tax_rate_bps, 825);
        assert_eq!(config.pricing.flat_shipping_cents, 1000);
        assert_eq!(config.store.name, "Storefront");
    }

    #[test]
    fn test_config_validation() {
        let mut config = StoreConfig::default();

        config.pricing.tax_rate_bps = 10_001;
        assert!(config.validate().is_err());

        config.pricing.tax_rate_bps = 800;
        config.pricing.flat_shipping_cents = -1;
        assert!(config.validate().is_err());

        config.pricing.flat_shipping_cents = 0;
        config.store.name = "  ".to_string();
        assert!(matches!(config.validate(), Err(SessionError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = StoreConfig::load(Some(temp_path("missing.toml"))).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip.toml");
        let mut config = StoreConfig::default();
        config.store.name = "Threadline".to_string();
        config.pricing.free_shipping_threshold_cents = 5_000;

        config.save(Some(path.clone())).unwrap();
        let loaded = StoreConfig::load(Some(path.clone())).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let path = temp_path("broken.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[pricing]\ntax_rate_bps = \"lots\"\n").unwrap();

        assert!(matches!(
            StoreConfig::load(Some(path.clone())),
            Err(SessionError::ConfigParse(_))
        ));
        assert_eq!(StoreConfig::load_or_default(Some(path.clone())), StoreConfig::default());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_format_money() {
        let mut config = StoreConfig::default();
        assert_eq!(config.format_money(Money::from_cents(6398)), "$63.98");

        config.store.currency_symbol = "€".to_string();
        assert_eq!(config.format_money(Money::from_cents(1000)), "€10.00");
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&StoreConfig::default()).unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[pricing]"));
    }
}
