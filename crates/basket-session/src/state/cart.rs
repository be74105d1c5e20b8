//! # Cart State
//!
//! Holds the current cart value for one page session.
//!
//! ## Value Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI intent ──► command ──► pure Cart operation ──► CartState::replace  │
//! │                                                                         │
//! │  The container never mutates the cart itself: it stores whatever the   │
//! │  pure operation returned. This keeps every cart transition a plain     │
//! │  value handoff that tests can observe.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::Cart;
use chrono::{DateTime, Utc};

/// The current cart of a session.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Cart,
    /// When this cart was started (or last cleared).
    started_at: DateTime<Utc>,
}

impl CartState {
    /// Creates an empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Cart::new(),
            started_at: Utc::now(),
        }
    }

    /// Returns the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Stores the cart returned by a pure mutation as the new current state.
    pub fn replace(&mut self, cart: Cart) {
        self.cart = cart;
    }

    /// Empties the cart and restarts the bookkeeping clock.
    pub fn clear(&mut self) {
        self.cart = Cart::new();
        self.started_at = Utc::now();
    }

    /// When the current cart was started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::Product;

    #[test]
    fn test_replace_stores_returned_cart() {
        let product = Product {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: 10_000,
            stock: 20,
            discounts: vec![],
        };

        let mut state = CartState::new();
        assert!(state.cart().is_empty());

        let next = state.cart().add_item(&product);
        state.replace(next);
        assert_eq!(state.cart().item_count(), 1);
    }

    #[test]
    fn test_clear_empties_cart() {
        let product = Product {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: 10_000,
            stock: 20,
            discounts: vec![],
        };

        let mut state = CartState::new();
        let next = state.cart().add_item(&product);
        state.replace(next);

        state.clear();
        assert!(state.cart().is_empty());
    }
}
