//! Process-wide rules and coupon catalog.

use crate::catalog::CouponCatalog;
use crate::config::loader::Config;
use crate::config::rules::Rules;
use crate::core::error::{ConfigError, ConfigResult};
use crate::core::outcome::Outcome;
use crate::core::types::Value;
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Rules and catalog used by the free validation functions.
///
/// The global instance is set at most once per process, either explicitly
/// through [`Settings::install`] or implicitly with the defaults on first
/// use, and is immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    rules: Rules,
    catalog: CouponCatalog,
}

impl Settings {
    /// Create settings from already validated parts.
    pub fn new(rules: Rules, catalog: CouponCatalog) -> Self {
        Self { rules, catalog }
    }

    /// Load and validate settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Config::load(path)?.into_settings()
    }

    /// Get the global settings, initializing them with the defaults if
    /// nothing was installed.
    pub fn global() -> &'static Settings {
        SETTINGS.get_or_init(|| {
            log::debug!("no settings installed, using built-in defaults");
            Settings::default()
        })
    }

    /// Make these the global settings.
    ///
    /// Fails with [`ConfigError::AlreadyInitialized`] once the global
    /// settings exist, including when [`Settings::global`] already fell
    /// back to the defaults.
    pub fn install(self) -> ConfigResult<&'static Settings> {
        SETTINGS.set(self).map_err(|_| {
            log::warn!("settings already initialized, ignoring new settings");
            ConfigError::AlreadyInitialized
        })?;
        Ok(Self::global())
    }

    /// Validation thresholds.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Coupon catalog.
    pub fn catalog(&self) -> &CouponCatalog {
        &self.catalog
    }

    /// Apply a coupon code against this catalog.
    pub fn calculate_discount(&self, price: &Value, code: &Value) -> Outcome<f64> {
        self.catalog.calculate_discount(price, code)
    }

    /// Check a username against these bounds.
    pub fn is_valid_username(&self, username: &Value) -> bool {
        self.rules.username.accepts(username)
    }

    /// Run the composite user-input check.
    pub fn validate_user_input(&self, username: &Value, age: &Value) -> Outcome<String> {
        self.rules.user_input.validate(username, age)
    }

    /// Decide driving eligibility.
    pub fn can_drive(&self, age: &Value, country_code: &Value) -> Outcome<bool> {
        self.rules.driving.can_drive(age, country_code)
    }
}
