//! # Pricing Module
//!
//! Computes cart totals with per-item discounts and an optional coupon.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Total Calculation                                    │
//! │                                                                         │
//! │  Cart lines                                                             │
//! │      │                                                                  │
//! │      ├──► Σ price × qty ───────────────────────► total_before_discount │
//! │      │                                                                  │
//! │      └──► Σ price × qty × (1 − tier rate) ──┐                          │
//! │                                             │                          │
//! │  Coupon (optional, applied ONCE, after     ▼                           │
//! │  per-item discounts, never compounded):   amount:  max(0, t − value)   │
//! │                                           percent: t × (1 − value/100) │
//! │                                             │                          │
//! │                                             ▼                          │
//! │                       round to nearest unit ──► total_after_discount   │
//! │                                                                         │
//! │  total_discount = total_before_discount − total_after_discount         │
//! │  (computed from the ROUNDED totals, so the identity holds exactly)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::{Coupon, DiscountType};

// =============================================================================
// Totals
// =============================================================================

/// Cart totals summary for the order summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Totals {
    /// Sum of price × quantity over all lines, before any discount.
    pub total_before_discount: Money,

    /// Total after tier discounts and the coupon, floored at zero.
    pub total_after_discount: Money,

    /// Always exactly `total_before_discount − total_after_discount`.
    pub total_discount: Money,
}

impl Totals {
    /// All-zero totals (empty cart).
    pub fn zero() -> Self {
        Totals {
            total_before_discount: Money::zero(),
            total_after_discount: Money::zero(),
            total_discount: Money::zero(),
        }
    }
}

// =============================================================================
// Total Calculation
// =============================================================================

/// Calculates the cart totals with an optional selected coupon.
///
/// Pure and idempotent: same cart and coupon always yield the same totals.
/// An empty cart yields all-zero totals. The coupon is applied once, after
/// per-item tier discounts, never compounded with them.
///
/// ## Example
/// ```rust
/// use basket_core::{Cart, Coupon, DiscountType, Discount, Product};
/// use basket_core::pricing::calculate_totals;
///
/// let product = Product {
///     id: "p1".into(), name: "Product 1".into(),
///     price: 10_000, stock: 20,
///     discounts: vec![
///         Discount { quantity: 10, rate: 0.1 },
///         Discount { quantity: 20, rate: 0.2 },
///     ],
/// };
/// let cart = Cart::new().add_item(&product).update_quantity("p1", 10);
///
/// let coupon = Coupon {
///     name: "10% off coupon".into(),
///     code: "PERCENT10".into(),
///     discount_type: DiscountType::Percentage,
///     discount_value: 10,
/// };
///
/// let totals = calculate_totals(&cart, Some(&coupon));
/// assert_eq!(totals.total_before_discount.units(), 100_000);
/// assert_eq!(totals.total_after_discount.units(), 81_000);
/// assert_eq!(totals.total_discount.units(), 19_000);
/// ```
pub fn calculate_totals(cart: &Cart, coupon: Option<&Coupon>) -> Totals {
    let total_before_discount: Money = cart.items.iter().map(|item| item.subtotal()).sum();

    // Tier discounts produce fractional intermediates; stay in f64 until the
    // single rounding step below.
    let mut after: f64 = cart
        .items
        .iter()
        .map(|item| item.subtotal().units() as f64 * (1.0 - item.discount_rate()))
        .sum();

    if let Some(coupon) = coupon {
        after = match coupon.discount_type {
            DiscountType::Amount => (after - coupon.discount_value as f64).max(0.0),
            DiscountType::Percentage => after * (1.0 - coupon.discount_value as f64 / 100.0),
        };
    }

    // Round both totals first, then derive the discount from the rounded
    // values so that before − after = discount holds exactly for callers.
    let total_after_discount = Money::rounded(after);
    Totals {
        total_before_discount,
        total_after_discount,
        total_discount: total_before_discount - total_after_discount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
