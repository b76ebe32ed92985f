//! Single-value constraints.
//!
//! Every constraint checks the type it needs before applying its rule, so
//! a constraint used on its own still reports a wrong-typed input as such.

use crate::core::error::{Field, ValidationError};
use crate::core::types::Value;

/// Rule a single input value must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Value must be an integer or float (numeric strings do not count)
    Numeric,
    /// Value must be a string
    Text,
    /// Numeric value must be >= 0
    NonNegative,
    /// String length (in characters) must be within [min, max]
    LengthBetween { min: usize, max: usize },
    /// Numeric value must be >= the given minimum
    AtLeast(f64),
    /// String must be exactly one of the options
    OneOf(Vec<String>),
}

/// Read a number or report that the field is not numeric.
///
/// NaN is rejected here, so later comparisons never see it.
pub fn expect_number(field: Field, value: &Value) -> Result<f64, ValidationError> {
    value
        .as_number()
        .filter(|n| !n.is_nan())
        .ok_or(ValidationError::NotANumber {
            field,
            got: value.get_type(),
        })
}

/// Read a string or report that the field is not a string.
pub fn expect_string(field: Field, value: &Value) -> Result<&str, ValidationError> {
    value.as_string().ok_or(ValidationError::NotAString {
        field,
        got: value.get_type(),
    })
}

impl Constraint {
    /// Check a value against this constraint.
    pub fn check(&self, field: Field, value: &Value) -> Result<(), ValidationError> {
        match self {
            Constraint::Numeric => {
                expect_number(field, value)?;
            }

            Constraint::Text => {
                expect_string(field, value)?;
            }

            Constraint::NonNegative => {
                let num = expect_number(field, value)?;
                if num < 0.0 {
                    return Err(ValidationError::Negative { field, value: num });
                }
            }

            Constraint::LengthBetween { min, max } => {
                let len = expect_string(field, value)?.chars().count();
                if len < *min || len > *max {
                    return Err(ValidationError::LengthOutOfRange {
                        field,
                        len,
                        min: *min,
                        max: *max,
                    });
                }
            }

            Constraint::AtLeast(min) => {
                let num = expect_number(field, value)?;
                if num < *min {
                    return Err(ValidationError::BelowMinimum {
                        field,
                        value: num,
                        min: *min,
                    });
                }
            }

            Constraint::OneOf(options) => {
                let s = expect_string(field, value)?;
                if !options.iter().any(|option| option == s) {
                    return Err(ValidationError::NotRecognized {
                        field,
                        value: s.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
