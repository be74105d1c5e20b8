//! # Session Aggregate
//!
//! One `Session` per storefront page: the catalog, the cart, and the
//! coupon selection, owned together and mutated only by that page's
//! sequential user actions.
//!
//! `SessionCell` is the holder the page wiring goes through. Reading it
//! before `initialize` is a configuration bug and fails fast with
//! [`SessionError::NotInitialized`] rather than handing out an
//! accidentally-empty session.

use basket_core::{Coupon, Product};

use crate::error::{SessionError, SessionResult};
use crate::state::{CartState, CatalogState, CouponState};

/// The complete state of one page session.
#[derive(Debug, Clone)]
pub struct Session {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub coupons: CouponState,
}

impl Session {
    /// Creates a session with a seeded catalog and coupon list and an
    /// empty cart.
    pub fn new(products: Vec<Product>, coupons: Vec<Coupon>) -> Self {
        Session {
            catalog: CatalogState::new(products),
            cart: CartState::new(),
            coupons: CouponState::new(coupons),
        }
    }
}

/// Fail-fast holder for the page's session.
#[derive(Debug, Default)]
pub struct SessionCell {
    inner: Option<Session>,
}

impl SessionCell {
    /// Creates an empty, uninitialized cell.
    pub fn new() -> Self {
        SessionCell { inner: None }
    }

    /// Installs the session. Called once during page startup.
    pub fn initialize(&mut self, session: Session) {
        self.inner = Some(session);
    }

    /// Whether `initialize` has run.
    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// Read access to the session.
    pub fn get(&self) -> SessionResult<&Session> {
        self.inner.as_ref().ok_or(SessionError::NotInitialized)
    }

    /// Write access to the session.
    pub fn get_mut(&mut self) -> SessionResult<&mut Session> {
        self.inner.as_mut().ok_or(SessionError::NotInitialized)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
