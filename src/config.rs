use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable the demo binaries read for an optional settings file.
pub const CONFIG_ENV_VAR: &str = "OOP_FOUNDATIONS_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Policy sections
// =============================================================================

/// Limits and pricing rules an `Order` enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPolicy {
    pub max_items: usize,
    pub max_discount_percent: Decimal,
    pub free_shipping_threshold: Decimal,
    pub flat_shipping_fee: Decimal,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            max_items: 50,
            max_discount_percent: dec!(50),
            free_shipping_threshold: dec!(100),
            flat_shipping_fee: dec!(10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartPolicy {
    pub default_capacity: usize,
}

impl Default for CartPolicy {
    fn default() -> Self {
        Self { default_capacity: 10 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

// =============================================================================
// Top-level settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub order: OrderPolicy,
    pub cart: CartPolicy,
    pub logging: LoggingConfig,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Format is picked from the extension; anything unknown is sniffed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    /// Falls back to defaults when no path is given or the file does not exist.
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads the path named by [`CONFIG_ENV_VAR`], if any.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR).map(std::path::PathBuf::from);
        Self::load_or_default(path.as_deref())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order.max_items == 0 {
            return Err(ConfigError::invalid("order.max_items", "must be at least 1"));
        }
        if self.order.max_discount_percent < Decimal::ZERO
            || self.order.max_discount_percent > dec!(100)
        {
            return Err(ConfigError::invalid(
                "order.max_discount_percent",
                "must be between 0 and 100",
            ));
        }
        if self.order.free_shipping_threshold < Decimal::ZERO {
            return Err(ConfigError::invalid(
                "order.free_shipping_threshold",
                "cannot be negative",
            ));
        }
        if self.order.flat_shipping_fee < Decimal::ZERO {
            return Err(ConfigError::invalid(
                "order.flat_shipping_fee",
                "cannot be negative",
            ));
        }
        if self.cart.default_capacity == 0 {
            return Err(ConfigError::invalid(
                "cart.default_capacity",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.order.max_items, 50);
        assert_eq!(settings.order.flat_shipping_fee, dec!(10));
        assert_eq!(settings.cart.default_capacity, 10);
        assert_eq!(settings.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let settings = Settings::from_toml_str(
            r#"
            [order]
            max_items = 5
            flat_shipping_fee = "7.50"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.order.max_items, 5);
        assert_eq!(settings.order.flat_shipping_fee, dec!(7.50));
        assert_eq!(settings.order.max_discount_percent, dec!(50));
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_json_settings() {
        let settings = Settings::from_json_str(r#"{"cart": {"default_capacity": 3}}"#).unwrap();
        assert_eq!(settings.cart.default_capacity, 3);
    }

    #[test]
    fn test_validation_rejects_zero_capacity() {
        let err = Settings::from_toml_str("[cart]\ndefault_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "cart.default_capacity"));
    }

    #[test]
    fn test_validation_rejects_discount_ceiling() {
        let err = Settings::from_toml_str("[order]\nmax_discount_percent = \"150\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_json_reports_position() {
        let err = Settings::from_json_str("{\n  \"cart\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[order]\nmax_items = 2").unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.order.max_items, 2);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let settings = Settings::load_or_default(Some(&missing)).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }
}
