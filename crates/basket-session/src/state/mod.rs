//! # State Module
//!
//! The in-memory state containers of one page session.
//!
//! ## Why Multiple State Types?
//! Instead of a single flat struct of fields, each concern gets its own
//! container type:
//!
//! 1. **Better Separation of Concerns**: catalog, cart, and coupon state
//!    change for different reasons
//! 2. **Easier Testing**: each container is testable on its own
//! 3. **Clearer Command Signatures**: commands touch exactly the state
//!    they name
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                        SessionCell                                      │
//! │               (fails fast before initialize)                            │
//! │                             │                                           │
//! │                          Session                                        │
//! │          ┌──────────────────┼──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartState   │  │   CouponState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Seeded at   │  │  Starts      │  │  Selection is    │              │
//! │  │  startup,    │  │  empty,      │  │  transient UI    │              │
//! │  │  admin edits │  │  replaced by │  │  state, reset by │              │
//! │  │  only        │  │  pure ops    │  │  explicit action │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD MODEL: single-threaded, one user's sequential actions.          │
//! │  No locks - a session is owned by exactly one page.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod coupon;
mod session;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use coupon::CouponState;
pub use session::{Session, SessionCell};
