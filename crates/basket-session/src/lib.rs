//! # basket-session: Page Session State & Commands
//!
//! Holds the state of one storefront page session and the command layer
//! the presentation layer drives.
//!
//! ## Module Organization
//! ```text
//! basket_session/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Product catalog container
//! │   ├── cart.rs     ◄─── Current cart container
//! │   ├── coupon.rs   ◄─── Coupon list + selection container
//! │   └── session.rs  ◄─── Session aggregate + fail-fast cell
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── add_to_cart, update quantity, cart view
//! │   ├── product.rs  ◄─── Catalog listing and admin create/update
//! │   └── coupon.rs   ◄─── Coupon listing, creation, apply/clear
//! ├── seed.rs         ◄─── Startup catalog and stock coupons
//! └── error.rs        ◄─── Session error type
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Management                             │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │  CatalogState    │ │    CartState     │ │    CouponState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Product list  │ │  • Current cart  │ │  • Coupon list       │   │
//! │  │  • add/update    │ │  • started_at    │ │  • Selected coupon   │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │             ▲                  ▲                  ▲                    │
//! │             └──────────────────┼──────────────────┘                    │
//! │                                │                                        │
//! │                       Session (one per page)                           │
//! │                                │                                        │
//! │                          SessionCell                                    │
//! │            fails fast when accessed before initialization              │
//! │                                                                         │
//! │  OWNERSHIP: each container is owned by exactly one Session, and the    │
//! │  session is mutated only by one user's sequential actions. No locks,   │
//! │  no reactivity - commands return the new view and the caller renders.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod seed;
pub mod state;

pub use error::SessionError;
pub use state::{CartState, CatalogState, CouponState, Session, SessionCell};
