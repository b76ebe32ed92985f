//! Coupon records.

use crate::core::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};

/// A discount code paired with a fractional discount rate.
///
/// `discount` is a rate, not a percentage: `0.1` takes 10% off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coupon {
    /// Code customers enter, matched exactly.
    pub code: String,
    /// Fraction of the price removed, in `(0, 1]`.
    pub discount: f64,
}

impl Coupon {
    /// Create a new coupon.
    pub fn new(code: impl Into<String>, discount: f64) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }

    /// Check that the code is non-empty and the rate is in `(0, 1]`.
    ///
    /// `index` is the coupon's position in its catalog, used in the error.
    pub fn validate(&self, index: usize) -> CatalogResult<()> {
        if self.code.is_empty() {
            return Err(CatalogError::EmptyCode { index });
        }
        if !(self.discount > 0.0 && self.discount <= 1.0) {
            return Err(CatalogError::InvalidDiscount {
                code: self.code.clone(),
                discount: self.discount,
            });
        }
        Ok(())
    }

    /// Price after applying this coupon.
    pub fn apply(&self, price: f64) -> f64 {
        price * (1.0 - self.discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Coupon::new("SAVE10", 0.1).apply(100.0), 90.0);
        assert_eq!(Coupon::new("SAVE20", 0.2).apply(100.0), 80.0);
        assert_eq!(Coupon::new("FREE", 1.0).apply(42.0), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(Coupon::new("SAVE10", 0.1).validate(0).is_ok());
        assert_eq!(
            Coupon::new("", 0.1).validate(3),
            Err(CatalogError::EmptyCode { index: 3 })
        );
        assert!(matches!(
            Coupon::new("ZERO", 0.0).validate(0),
            Err(CatalogError::InvalidDiscount { .. })
        ));
        assert!(Coupon::new("MORE", 1.5).validate(0).is_err());
        assert!(Coupon::new("NAN", f64::NAN).validate(0).is_err());
    }
}
