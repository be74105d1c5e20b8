//! # Discount Resolver
//!
//! Resolves which quantity-tier discount applies to a cart line.
//!
//! ## Resolution Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tiers: [(10+, 10%), (20+, 20%)]                                        │
//! │                                                                         │
//! │  quantity  9  ──►  no tier qualifies      ──►  0%                       │
//! │  quantity 10  ──►  (10+) qualifies        ──►  10%                      │
//! │  quantity 20  ──►  (10+), (20+) qualify   ──►  20%  (max, NOT 30%)     │
//! │                                                                         │
//! │  Tiers are independent. The applied rate is the MAXIMUM among           │
//! │  qualifying tiers, never a cumulative sum.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Discount;

/// Returns the discount rate that applies at the given quantity.
///
/// Filters tiers whose threshold is met and takes the maximum rate;
/// 0.0 when no tier qualifies or the tier list is empty. Total over its
/// whole input domain - there are no error conditions.
///
/// ## Example
/// ```rust
/// use basket_core::discount::applicable_rate;
/// use basket_core::types::Discount;
///
/// let tiers = [
///     Discount { quantity: 10, rate: 0.1 },
///     Discount { quantity: 20, rate: 0.2 },
/// ];
/// assert_eq!(applicable_rate(&tiers, 9), 0.0);
/// assert_eq!(applicable_rate(&tiers, 15), 0.1);
/// assert_eq!(applicable_rate(&tiers, 20), 0.2);
/// ```
pub fn applicable_rate(discounts: &[Discount], quantity: u32) -> f64 {
    discounts
        .iter()
        .filter(|d| quantity >= d.quantity)
        .fold(0.0, |max, d| d.rate.max(max))
}

/// Returns the maximum rate across ALL tiers, regardless of quantity.
///
/// Used for "up to X% off" display on the product list, independent of
/// how many units are currently in the cart. 0.0 for an empty tier list.
///
/// ## Example
/// ```rust
/// use basket_core::discount::max_rate;
/// use basket_core::types::Discount;
///
/// let tiers = [
///     Discount { quantity: 10, rate: 0.1 },
///     Discount { quantity: 20, rate: 0.2 },
/// ];
/// assert_eq!(max_rate(&tiers), 0.2);
/// assert_eq!(max_rate(&[]), 0.0);
/// ```
pub fn max_rate(discounts: &[Discount]) -> f64 {
    discounts.iter().fold(0.0, |max, d| d.rate.max(max))
}

// =============================================================================
// Unit Tests
// =============================================================================
