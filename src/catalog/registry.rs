//! Ordered, immutable coupon catalog.

use crate::catalog::coupon::Coupon;
use crate::core::error::{CatalogError, CatalogResult};
use indexmap::IndexMap;

/// The built-in coupons, in catalog order.
pub const BUILTIN_COUPONS: &[(&str, f64)] = &[("SAVE10", 0.1), ("SAVE20", 0.2)];

/// Catalog of every coupon the shop accepts.
///
/// Coupons are indexed by code and keep the order they were given in.
/// A catalog is never empty and is not modified after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponCatalog {
    coupons: IndexMap<String, Coupon>,
}

impl CouponCatalog {
    /// Build a catalog, rejecting empty lists, invalid coupons and
    /// duplicate codes.
    pub fn new(coupons: Vec<Coupon>) -> CatalogResult<Self> {
        if coupons.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut indexed = IndexMap::with_capacity(coupons.len());
        for (index, coupon) in coupons.into_iter().enumerate() {
            coupon.validate(index)?;
            if indexed.contains_key(&coupon.code) {
                return Err(CatalogError::DuplicateCode { code: coupon.code });
            }
            indexed.insert(coupon.code.clone(), coupon);
        }

        Ok(Self { coupons: indexed })
    }

    /// Create the catalog of built-in coupons.
    pub fn builtin() -> Self {
        let coupons = BUILTIN_COUPONS
            .iter()
            .map(|(code, discount)| (code.to_string(), Coupon::new(*code, *discount)))
            .collect();
        Self { coupons }
    }

    /// Look up a coupon by its exact code.
    pub fn get(&self, code: &str) -> Option<&Coupon> {
        self.coupons.get(code)
    }

    /// Check if a code exists.
    pub fn contains(&self, code: &str) -> bool {
        self.coupons.contains_key(code)
    }

    /// Iterate over coupons in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Coupon> + '_ {
        self.coupons.values()
    }

    /// Get all coupon codes in catalog order.
    pub fn codes(&self) -> Vec<&str> {
        self.coupons.keys().map(String::as_str).collect()
    }

    /// Number of coupons.
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Whether the catalog has no coupons. Never true for a built catalog.
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }

    /// Copy the coupons out in catalog order.
    pub fn to_vec(&self) -> Vec<Coupon> {
        self.iter().cloned().collect()
    }
}

impl Default for CouponCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
