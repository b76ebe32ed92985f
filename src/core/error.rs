//! Error types for shopcheck.
//!
//! Uses thiserror for structured errors with context. Two taxonomies exist:
//! - Structural errors ([`StackError`]) are returned as `Err`
//! - Validation failures ([`ValidationError`]) are reasons carried inside an
//!   [`Outcome`](crate::core::outcome::Outcome), never raised
//!
//! Every validation message starts with `Invalid <field>` so that textual
//! consumers can keep matching on it.

use crate::core::types::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Named input field a validation reason refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Price being discounted or range-checked
    Price,
    /// Coupon code
    DiscountCode,
    /// User name
    Username,
    /// Age of a person
    Age,
    /// ISO-style country code
    CountryCode,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Price => "price",
            Field::DiscountCode => "discount code",
            Field::Username => "username",
            Field::Age => "age",
            Field::CountryCode => "country code",
        };
        f.write_str(name)
    }
}

/// Top-level error type for shopcheck.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Stack error: {0}")]
    Stack(#[from] StackError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from [`Stack`](crate::collections::Stack) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack is empty")]
    Empty,
}

/// A single reason why an input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Invalid {field}: expected a number, got {got}")]
    NotANumber { field: Field, got: ValueType },

    #[error("Invalid {field}: expected a string, got {got}")]
    NotAString { field: Field, got: ValueType },

    #[error("Invalid {field}: {value} is negative")]
    Negative { field: Field, value: f64 },

    #[error("Invalid {field}: length {len} is outside {min}..={max}")]
    LengthOutOfRange {
        field: Field,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid {field}: {value} is below minimum {min}")]
    BelowMinimum { field: Field, value: f64, min: f64 },

    #[error("Invalid {field}: '{value}' is not recognized")]
    NotRecognized { field: Field, value: String },
}

/// Errors from building a coupon catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Coupon catalog must contain at least one coupon")]
    Empty,

    #[error("Coupon at position {index} has an empty code")]
    EmptyCode { index: usize },

    #[error("Coupon '{code}' has discount {discount}, expected a rate in (0, 1]")]
    InvalidDiscount { code: String, discount: f64 },

    #[error("Coupon code '{code}' appears more than once")]
    DuplicateCode { code: String },
}

/// Errors from loading or installing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid range for {setting}: minimum {min} exceeds maximum {max}")]
    InvalidRange {
        setting: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Driving table contains an empty country code")]
    EmptyCountryCode,

    #[error("Driving table must list at least one country")]
    NoCountries,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Settings were already initialized for this process")]
    AlreadyInitialized,
}

// ============================================================================
// Error Utilities
// ============================================================================

impl ValidationError {
    /// Get the field this reason refers to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotANumber { field, .. }
            | ValidationError::NotAString { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::LengthOutOfRange { field, .. }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::NotRecognized { field, .. } => *field,
        }
    }

    /// Whether the input had the wrong type, as opposed to breaking a rule.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            ValidationError::NotANumber { .. } | ValidationError::NotAString { .. }
        )
    }
}

/// Result type alias for shopcheck operations.
pub type ShopResult<T> = Result<T, ShopError>;

/// Result type alias for stack operations.
pub type StackResult<T> = Result<T, StackError>;

/// Result type alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
