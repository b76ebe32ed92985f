//! Core types shared by every check.
//!
//! This module contains:
//! - The dynamically typed input [`Value`]
//! - Error types
//! - The tagged [`Outcome`] returned by validators

pub mod types;
pub mod error;
pub mod outcome;

// Re-export commonly used types
pub use types::{Value, ValueType};
pub use error::{CatalogError, ConfigError, Field, ShopError, StackError, ValidationError};
pub use outcome::Outcome;
