//! TOML configuration file.

use crate::catalog::{Coupon, CouponCatalog};
use crate::config::rules::{DrivingRules, Rules, UserInputRules, UsernameRules};
use crate::config::settings::Settings;
use crate::core::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration.
///
/// Every section is optional. A missing `coupons` list keeps the built-in
/// catalog; a present one replaces it entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Bounds for `is_valid_username`.
    pub username: UsernameRules,
    /// Thresholds for `validate_user_input`.
    pub user_input: UserInputRules,
    /// Table for `can_drive`.
    pub driving: DrivingRules,
    /// Coupon catalog override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupons: Option<Vec<Coupon>>,
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Split into the validated rules and catalog.
    pub fn into_settings(self) -> ConfigResult<Settings> {
        let rules = Rules {
            username: self.username,
            user_input: self.user_input,
            driving: self.driving,
        };
        rules.validate()?;

        let catalog = match self.coupons {
            Some(coupons) => CouponCatalog::new(coupons)?,
            None => {
                log::debug!("config has no coupons, using built-in catalog");
                CouponCatalog::builtin()
            }
        };

        Ok(Settings::new(rules, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CatalogError;
    use std::io::Write;

    const SAMPLE: &str = r#"
[username]
min_length = 4
max_length = 12

[user_input]
min_age = 21

[driving.minimum_ages]
US = 16
UK = 17
DE = 18

[[coupons]]
code = "WELCOME"
discount = 0.25
"#;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());

        let settings = config.into_settings().unwrap();
        assert_eq!(settings.rules(), &Rules::default());
        assert_eq!(settings.catalog(), &CouponCatalog::builtin());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.username.min_length, 4);
        assert_eq!(config.user_input.min_age, 21.0);
        assert_eq!(config.user_input.max_username_length, 255);
        assert_eq!(config.driving.countries(), vec!["US", "UK", "DE"]);

        let settings = config.into_settings().unwrap();
        assert_eq!(settings.catalog().codes(), vec!["WELCOME"]);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = Config::from_toml_str("[username]\nminimum = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let config = Config::from_toml_str("coupons = []").unwrap();
        assert!(matches!(
            config.into_settings(),
            Err(ConfigError::Catalog(CatalogError::Empty))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.driving.minimum_age("DE"), Some(18));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
