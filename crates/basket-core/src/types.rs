//! # Domain Types
//!
//! Core domain types used throughout Basket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Discount     │   │     Coupon      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (string)    │   │  quantity (u32) │   │  name           │       │
//! │  │  name           │   │  rate [0,1)     │   │  code           │       │
//! │  │  price (units)  │   │                 │   │  discount_type  │       │
//! │  │  stock (u32)    │   │  "10+ → 10%"    │   │  discount_value │       │
//! │  │  discounts[]    │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Product owns an ordered list of Discount tiers.                       │
//! │  Coupon applies once to the whole cart, by amount or percentage.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Every type serializes camelCase so the TypeScript frontend can consume
//! it directly, and derives `TS` so the bindings stay in sync.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::discount;
use crate::money::Money;

// =============================================================================
// Discount Tier
// =============================================================================

/// A quantity-threshold discount tier on a product.
///
/// "Buy `quantity` or more, get `rate` off." Tiers are evaluated
/// independently: the applied rate is the maximum rate among qualifying
/// tiers, never a cumulative sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Discount {
    /// Minimum quantity for this tier to apply (positive).
    pub quantity: u32,

    /// Discount rate as a fraction in `[0, 1)` (0.1 = 10% off).
    pub rate: f64,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the product list and cart.
    pub name: String,

    /// Price in whole currency units (non-negative).
    pub price: i64,

    /// Units available for sale. Cart quantities are clamped to this.
    pub stock: u32,

    /// Quantity-threshold discount tiers, in catalog order.
    pub discounts: Vec<Discount>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_units(self.price)
    }

    /// Returns the discount rate that applies at the given quantity.
    ///
    /// Delegates to the discount resolver; 0.0 when no tier qualifies.
    #[inline]
    pub fn discount_rate_for(&self, quantity: u32) -> f64 {
        discount::applicable_rate(&self.discounts, quantity)
    }

    /// Returns the best rate across all tiers, regardless of quantity.
    ///
    /// Used for "up to X% off" display on the product list.
    #[inline]
    pub fn max_discount_rate(&self) -> f64 {
        discount::max_rate(&self.discounts)
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// How a coupon discounts the cart total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DiscountType {
    /// Fixed amount off the post-discount total, floored at zero.
    Amount,
    /// Percentage off the post-discount total (value is 0-100).
    Percentage,
}

/// A coupon applied once to the cart total, after per-item discounts.
///
/// Only one coupon may be selected at a time (or none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Coupon {
    /// Display name ("5,000 off coupon").
    pub name: String,

    /// Business identifier ("AMOUNT5000") - unique among coupons.
    pub code: String,

    /// Amount or percentage.
    pub discount_type: DiscountType,

    /// Currency units for `Amount`, whole percent (0-100) for `Percentage`.
    pub discount_value: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
