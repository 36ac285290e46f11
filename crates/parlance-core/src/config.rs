//! TOML configuration for the parlance binary.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::ParlanceError;
use crate::locale::Locale;

/// Top-level parlance configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parlance: ParlanceConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParlanceConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ParlanceConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Translation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Locale used when neither the caller nor the recipient supplies one.
    /// Set once at startup; the translator reads it for the whole process.
    #[serde(default = "default_locale")]
    pub default_locale: Locale,
    /// Directory of `<locale>.toml` catalog files.
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            catalog_dir: default_catalog_dir(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_locale() -> Locale {
    Locale::new("en", None)
}

fn default_catalog_dir() -> String {
    "catalogs".to_string()
}

/// Load configuration from `path`, using defaults when the file is missing.
pub fn load(path: &str) -> Result<Config, ParlanceError> {
    let path = Path::new(path);
    if !path.exists() {
        info!("config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ParlanceError::Config(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&content)
        .map_err(|e| ParlanceError::Config(format!("failed to parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.parlance.log_level, "info");
        assert_eq!(cfg.i18n.default_locale, Locale::new("en", None));
        assert_eq!(cfg.i18n.catalog_dir, "catalogs");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [i18n]
            default_locale = "pt-BR"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.i18n.default_locale, Locale::new("pt", Some("BR")));
        assert_eq!(cfg.i18n.catalog_dir, "catalogs");
        assert_eq!(cfg.parlance.log_level, "info");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.i18n.default_locale, Locale::new("en", None));
    }

    #[test]
    fn test_bad_locale_tag_fails_parse() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [i18n]
            default_locale = "123"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let cfg = load("/nonexistent/parlance-config.toml").unwrap();
        assert_eq!(cfg.i18n.catalog_dir, "catalogs");
    }
}
