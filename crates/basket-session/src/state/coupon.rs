//! # Coupon State
//!
//! Holds the available coupons and the current selection.
//!
//! ## Selection Rules
//! - At most one coupon is selected at a time (or none)
//! - Selecting an unknown code is a silent no-op
//! - The selection is transient UI state, reset only by explicit action

use basket_core::validation::validate_coupon;
use basket_core::{Coupon, ValidationError};

/// The coupon list and current selection of a session.
#[derive(Debug, Clone, Default)]
pub struct CouponState {
    coupons: Vec<Coupon>,
    selected: Option<Coupon>,
}

impl CouponState {
    /// Creates coupon state from the seed coupon list, nothing selected.
    pub fn new(coupons: Vec<Coupon>) -> Self {
        CouponState {
            coupons,
            selected: None,
        }
    }

    /// Returns the available coupons.
    pub fn list(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Returns the currently selected coupon, if any.
    pub fn selected(&self) -> Option<&Coupon> {
        self.selected.as_ref()
    }

    /// Adds a coupon to the list.
    ///
    /// Validates the coupon and rejects duplicate codes.
    pub fn add_coupon(&mut self, coupon: Coupon) -> Result<(), ValidationError> {
        validate_coupon(&coupon)?;

        if self.coupons.iter().any(|c| c.code == coupon.code) {
            return Err(ValidationError::Duplicate {
                field: "coupon code".to_string(),
                value: coupon.code,
            });
        }

        self.coupons.push(coupon);
        Ok(())
    }

    /// Selects the coupon with the given code.
    ///
    /// Unknown codes are a silent no-op: the picker can only offer codes
    /// from the list, so a miss is stale UI, not an error.
    pub fn select(&mut self, code: &str) {
        if let Some(coupon) = self.coupons.iter().find(|c| c.code == code) {
            self.selected = Some(coupon.clone());
        }
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
