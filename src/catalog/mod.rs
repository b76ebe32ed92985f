//! Coupon catalog.
//!
//! The process-wide catalog lives in [`Settings`](crate::config::Settings)
//! and is fixed once the process starts.

pub mod coupon;
pub mod registry;

pub use coupon::Coupon;
pub use registry::CouponCatalog;

use crate::config::Settings;

/// Get the process-wide coupon catalog in order.
pub fn get_coupons() -> Vec<&'static Coupon> {
    Settings::global().catalog().iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_coupons_not_empty() {
        assert!(!get_coupons().is_empty());
    }

    #[test]
    fn test_get_coupons_have_code_and_discount() {
        for coupon in get_coupons() {
            assert!(!coupon.code.is_empty());
            assert!(coupon.discount > 0.0);
        }
    }

    #[test]
    fn test_get_coupons_is_deterministic() {
        assert_eq!(get_coupons(), get_coupons());
    }
}
