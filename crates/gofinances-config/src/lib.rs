//! Configuration management for the gofinances dashboard
//!
//! This module handles loading, validation, and management of
//! dashboard configuration from YAML files.

pub mod error;

use gofinances_utils::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::ConfigError;
pub use gofinances_utils::SymbolPosition;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Upstream transactions API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the transactions listing
    #[serde(default = "default_transactions_path")]
    pub transactions_path: String,
    /// Request timeout in seconds; `None` waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            transactions_path: default_transactions_path(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_transactions_path() -> String {
    "/transactions".to_string()
}

/// Currency and date presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
    /// Decimal separator
    #[serde(default = "default_decimal_sep")]
    pub decimal_separator: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Currency symbol position ("before" or "after")
    #[serde(default)]
    pub symbol_position: SymbolPosition,
    /// Text between symbol and number
    #[serde(default = "default_symbol_spacing")]
    pub symbol_spacing: String,
    /// UTC offset in minutes used for dates
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            thousands_separator: default_thousands_sep(),
            decimal_separator: default_decimal_sep(),
            decimal_places: default_decimal_places(),
            symbol_position: SymbolPosition::Before,
            symbol_spacing: default_symbol_spacing(),
            utc_offset_minutes: 0,
        }
    }
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_thousands_sep() -> String {
    ".".to_string()
}

fn default_decimal_sep() -> String {
    ",".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_symbol_spacing() -> String {
    "\u{a0}".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Presentation settings
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
            message: e.to_string(),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "Base URL must start with http:// or https://".to_string(),
            });
        }

        if !self.api.transactions_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "api.transactions_path".to_string(),
                reason: "Path must start with '/'".to_string(),
            });
        }

        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "Timeout must be greater than 0, or omitted to wait indefinitely".to_string(),
            });
        }

        if self.locale.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "locale.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        // FixedOffset accepts strictly less than a day
        if !(-1439..=1439).contains(&self.locale.utc_offset_minutes) {
            return Err(ConfigError::InvalidValue {
                field: "locale.utc_offset_minutes".to_string(),
                reason: "Offset must be within -1439..=1439 minutes".to_string(),
            });
        }

        if self.locale.decimal_separator.is_empty() {
            return Err(ConfigError::MissingField {
                field: "locale.decimal_separator".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Full URL of the transactions listing
    pub fn transactions_url(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.transactions_path
        )
    }

    /// Locale used by the formatting helpers
    pub fn locale(&self) -> Locale {
        Locale {
            currency_symbol: self.locale.currency_symbol.clone(),
            thousands_separator: self.locale.thousands_separator.clone(),
            decimal_separator: self.locale.decimal_separator.clone(),
            decimal_places: self.locale.decimal_places,
            symbol_position: self.locale.symbol_position,
            symbol_spacing: self.locale.symbol_spacing.clone(),
            utc_offset_minutes: self.locale.utc_offset_minutes,
        }
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
