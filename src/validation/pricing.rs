//! Price checks and coupon discounts.

use crate::catalog::CouponCatalog;
use crate::config::Settings;
use crate::core::error::Field;
use crate::core::outcome::Outcome;
use crate::core::types::Value;
use crate::validation::constraint::{expect_number, expect_string, Constraint};
use crate::validation::pipeline::ValidationPipeline;

impl CouponCatalog {
    /// Apply a coupon code to a price.
    ///
    /// Checks run in order and stop at the first failure: the price must be
    /// a number, then non-negative, then the code must be a string. A valid
    /// code that is not in the catalog leaves the price unchanged.
    pub fn calculate_discount(&self, price: &Value, code: &Value) -> Outcome<f64> {
        ValidationPipeline::fail_fast()
            .stage(Field::Price, price, [Constraint::Numeric, Constraint::NonNegative])
            .stage(Field::DiscountCode, code, [Constraint::Text])
            .validate()
            .and_then(|()| {
                let price = expect_number(Field::Price, price).map_err(|e| vec![e])?;
                let code = expect_string(Field::DiscountCode, code).map_err(|e| vec![e])?;

                Ok(match self.get(code) {
                    Some(coupon) => coupon.apply(price),
                    None => {
                        log::debug!("unknown coupon code '{}', price unchanged", code);
                        price
                    }
                })
            })
            .into()
    }
}

/// Apply a coupon code from the process-wide catalog to a price.
pub fn calculate_discount(price: impl Into<Value>, code: impl Into<Value>) -> Outcome<f64> {
    Settings::global().calculate_discount(&price.into(), &code.into())
}

/// Check whether `min <= price <= max`.
pub fn is_price_in_range<T: PartialOrd>(price: T, min: T, max: T) -> bool {
    min <= price && price <= max
}
