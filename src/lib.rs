//! # Shopcheck - Validated shop rules
//!
//! Shopcheck bundles a handful of small, pure checks used at a shop's
//! edges, plus a generic LIFO stack.
//!
//! ## Features
//!
//! - **Coupons**: A fixed, ordered coupon catalog and discount calculation
//! - **Input checks**: Username, user-input and driving-eligibility validators
//! - **Tagged results**: Every validator returns an [`Outcome`] with
//!   structured failure reasons that also render as legacy text
//! - **Configurable thresholds**: Defaults are compiled in and can be
//!   replaced once at start-up from a TOML file
//! - **Stack**: An unbounded LIFO container with explicit underflow errors
//!
//! ## Quick Start
//!
//! ```rust
//! use shopcheck::prelude::*;
//!
//! assert_eq!(calculate_discount(100, "SAVE10"), Outcome::Success(90.0));
//! assert!(calculate_discount("10", "SAVE10").render().contains("Invalid price"));
//!
//! let outcome = validate_user_input("", 0);
//! assert_eq!(outcome.reasons().len(), 2);
//!
//! assert_eq!(can_drive(16, "US"), Outcome::Success(true));
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(StackError::Empty));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Input values, error types and the [`Outcome`] result
//! - [`collections`]: The [`Stack`](collections::Stack) container
//! - [`catalog`]: Coupons and the coupon catalog
//! - [`config`]: Thresholds, config files and process-wide settings
//! - [`validation`]: The validators and the pipeline they are built on
//!
//! [`Outcome`]: crate::core::Outcome

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod collections;
pub mod config;
pub mod core;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use shopcheck::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{Value, ValueType};
    pub use crate::core::outcome::Outcome;

    // Errors
    pub use crate::core::error::{
        CatalogError, ConfigError, Field, ShopError, ShopResult, StackError, ValidationError,
    };

    // Containers
    pub use crate::collections::Stack;

    // Catalog
    pub use crate::catalog::{get_coupons, Coupon, CouponCatalog};

    // Configuration
    pub use crate::config::{Config, DrivingRules, Rules, Settings, UserInputRules, UsernameRules};

    // Validation
    pub use crate::validation::{
        calculate_discount, can_drive, is_price_in_range, is_valid_username, validate_user_input,
        Constraint, ValidationPipeline,
    };
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
