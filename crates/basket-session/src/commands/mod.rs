//! # Session Commands Module
//!
//! All operations the presentation layer can dispatch into a session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart manipulation + cart/summary view
//! ├── product.rs  ◄─── Catalog listing, admin create/update
//! └── coupon.rs   ◄─── Coupon listing, creation, apply/clear
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Command Flow                                 │
//! │                                                                         │
//! │  TypeScript Frontend                                                    │
//! │  ───────────────────                                                    │
//! │  click "add to cart" on product p1                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  add_to_cart(&mut session, "p1")                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  1. Look up the product in the catalog                           │  │
//! │  │  2. Run the PURE cart operation from basket-core                 │  │
//! │  │  3. Store the returned cart in CartState                         │  │
//! │  │  4. Return a CartView (items + recomputed totals)                │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Frontend re-renders from the returned view                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes the `Session` explicitly - there is no ambient
//! global. Callers that hold a `SessionCell` go through its fail-fast
//! accessors first.

pub mod cart;
pub mod coupon;
pub mod product;

pub use cart::{
    add_to_cart, cart_view, clear_cart, remove_from_cart, update_cart_quantity, CartView,
};
pub use coupon::{apply_coupon, clear_coupon, create_coupon, list_coupons, selected_coupon};
pub use product::{create_product, list_products, update_product, NewProduct};
