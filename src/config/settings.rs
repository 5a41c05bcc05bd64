//! User settings for Budget Buddy
//!
//! Display preferences and the logging level. The currency only changes the
//! symbol amounts are printed with; no conversion is ever performed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::storage::write_json_atomic;

/// Display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Nzd,
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Self::Usd, Self::Eur, Self::Gbp, Self::Cad, Self::Aud, Self::Nzd]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Nzd => "NZD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Cad => "C$",
            Self::Aud => "A$",
            Self::Nzd => "NZ$",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
            Self::Cad => "Canadian Dollar",
            Self::Aud => "Australian Dollar",
            Self::Nzd => "New Zealand Dollar",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BudgetError::Config(format!("Unsupported currency: {}", s)))
    }
}

/// Interface language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl FromStr for Language {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "español" | "espanol" | "spanish" => Ok(Self::Es),
            other => Err(BudgetError::Config(format!("Unsupported language: {}", other))),
        }
    }
}

/// User settings for Budget Buddy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub dark_mode: bool,

    /// Default tracing level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            language: Language::default(),
            dark_mode: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Currency symbol amounts are displayed with
    pub fn currency_symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| BudgetError::Config(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, Currency::Usd);
        assert_eq!(settings.currency_symbol(), "$");
        assert_eq!(settings.language, Language::En);
        assert!(!settings.dark_mode);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency: Currency::Nzd,
            language: Language::Es,
            dark_mode: true,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.currency_symbol(), "NZ$");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency": "GBP"}"#).unwrap();
        assert_eq!(settings.currency, Currency::Gbp);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("JPY".parse::<Currency>().is_err());
    }
}
