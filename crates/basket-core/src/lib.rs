//! # basket-core: Pure Business Logic for Basket
//!
//! This crate is the **heart** of Basket. It contains all cart and pricing
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Frontend (TypeScript UI)                        │   │
//! │  │    Product List ──► Cart ──► Coupon Picker ──► Order Summary   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ user intents                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 basket-session (command layer)                  │   │
//! │  │    add_to_cart, update_cart_quantity, apply_coupon, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Totals   │  │   │
//! │  │   │  Coupon   │  │  rounding │  │ CartItem  │  │  coupons  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO SHARED STATE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Discount, Coupon)
//! - [`money`] - Money type with integer arithmetic (no floating point storage!)
//! - [`discount`] - Discount tier resolution
//! - [`cart`] - Cart value type and its pure mutation operations
//! - [`pricing`] - Cart total calculation with discounts and coupons
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Value Semantics**: Cart mutations return a *new* cart; the caller stores it
//! 3. **Integer Money**: Monetary values are whole currency units (i64); fractional
//!    intermediates exist only inside total calculation and are rounded at return
//! 4. **Total Functions**: Out-of-range quantities are clamped or treated as
//!    removal, unknown ids are no-ops - never panics, never surprise errors
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{Cart, Coupon, DiscountType, Product, Discount};
//! use basket_core::pricing::calculate_totals;
//!
//! let product = Product {
//!     id: "p1".to_string(),
//!     name: "Product 1".to_string(),
//!     price: 10_000,
//!     stock: 20,
//!     discounts: vec![Discount { quantity: 10, rate: 0.1 }],
//! };
//!
//! // Pure mutation: the original cart is untouched
//! let cart = Cart::new();
//! let cart = cart.add_item(&product);
//! let cart = cart.update_quantity("p1", 10);
//!
//! let totals = calculate_totals(&cart, None);
//! assert_eq!(totals.total_before_discount.units(), 100_000);
//! assert_eq!(totals.total_after_discount.units(), 90_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Cart` instead of
// `use basket_core::cart::Cart`

pub use cart::{Cart, CartItem};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use pricing::{calculate_totals, Totals};
pub use types::{Coupon, Discount, DiscountType, Product};
