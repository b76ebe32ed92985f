//! Validation thresholds.
//!
//! The constants are the defaults; each rule struct deserializes from the
//! matching config section and falls back to them field by field.

use crate::core::error::{ConfigError, ConfigResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shortest name accepted by `is_valid_username`.
pub const MIN_LENGTH: usize = 5;
/// Longest name accepted by `is_valid_username`.
pub const MAX_LENGTH: usize = 15;
/// Shortest username accepted by `validate_user_input`.
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Longest username accepted by `validate_user_input`.
pub const MAX_USERNAME_LENGTH: usize = 255;
/// Youngest age accepted by `validate_user_input`.
pub const MIN_AGE: f64 = 18.0;
/// Minimum driving age in the United States.
pub const US_DRIVING_AGE: u32 = 16;
/// Minimum driving age in the United Kingdom.
pub const UK_DRIVING_AGE: u32 = 17;

/// Length bounds for the standalone username predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsernameRules {
    /// Minimum length, inclusive.
    pub min_length: usize,
    /// Maximum length, inclusive.
    pub max_length: usize,
}

impl Default for UsernameRules {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

/// Thresholds for the composite user-input check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserInputRules {
    /// Minimum username length, inclusive.
    pub min_username_length: usize,
    /// Maximum username length, inclusive.
    pub max_username_length: usize,
    /// Minimum age, inclusive.
    pub min_age: f64,
}

impl Default for UserInputRules {
    fn default() -> Self {
        Self {
            min_username_length: MIN_USERNAME_LENGTH,
            max_username_length: MAX_USERNAME_LENGTH,
            min_age: MIN_AGE,
        }
    }
}

/// Minimum driving age per recognised country code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrivingRules {
    /// Country code to minimum age, in declaration order.
    pub minimum_ages: IndexMap<String, u32>,
}

impl DrivingRules {
    /// Minimum driving age for a country, if the code is recognised.
    pub fn minimum_age(&self, country_code: &str) -> Option<u32> {
        self.minimum_ages.get(country_code).copied()
    }

    /// Recognised country codes in declaration order.
    pub fn countries(&self) -> Vec<String> {
        self.minimum_ages.keys().cloned().collect()
    }
}

impl Default for DrivingRules {
    fn default() -> Self {
        let mut minimum_ages = IndexMap::new();
        minimum_ages.insert("US".to_string(), US_DRIVING_AGE);
        minimum_ages.insert("UK".to_string(), UK_DRIVING_AGE);
        Self { minimum_ages }
    }
}

/// All validation thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Bounds for `is_valid_username`.
    pub username: UsernameRules,
    /// Thresholds for `validate_user_input`.
    pub user_input: UserInputRules,
    /// Table for `can_drive`.
    pub driving: DrivingRules,
}

impl Rules {
    /// Reject inverted ranges and malformed driving tables.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.username.min_length > self.username.max_length {
            return Err(ConfigError::InvalidRange {
                setting: "username",
                min: self.username.min_length,
                max: self.username.max_length,
            });
        }
        if self.user_input.min_username_length > self.user_input.max_username_length {
            return Err(ConfigError::InvalidRange {
                setting: "user_input",
                min: self.user_input.min_username_length,
                max: self.user_input.max_username_length,
            });
        }
        if self.driving.minimum_ages.is_empty() {
            return Err(ConfigError::NoCountries);
        }
        if self.driving.minimum_ages.keys().any(|code| code.is_empty()) {
            return Err(ConfigError::EmptyCountryCode);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let rules = Rules::default();
        assert_eq!(rules.username.min_length, 5);
        assert_eq!(rules.username.max_length, 15);
        assert_eq!(rules.user_input.min_username_length, 3);
        assert_eq!(rules.user_input.max_username_length, 255);
        assert_eq!(rules.user_input.min_age, 18.0);
        assert_eq!(rules.driving.minimum_age("US"), Some(16));
        assert_eq!(rules.driving.minimum_age("UK"), Some(17));
        assert_eq!(rules.driving.minimum_age("USA"), None);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut rules = Rules::default();
        rules.username = UsernameRules {
            min_length: 10,
            max_length: 2,
        };
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::InvalidRange { setting: "username", .. })
        ));
    }

    #[test]
    fn test_driving_table_checks() {
        let mut rules = Rules::default();
        rules.driving.minimum_ages.clear();
        assert!(matches!(rules.validate(), Err(ConfigError::NoCountries)));

        rules.driving.minimum_ages.insert(String::new(), 16);
        assert!(matches!(rules.validate(), Err(ConfigError::EmptyCountryCode)));
    }
}
