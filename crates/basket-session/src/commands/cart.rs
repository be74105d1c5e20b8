//! # Cart Commands
//!
//! Session commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Summary  │                        │
//! │  │  Cart    │     │          │     │ rendered │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_quantity                                  │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────► (back to empty)               │
//! │                                                                         │
//! │  Every command returns the fresh CartView; the frontend renders it     │
//! │  and keeps no cart math of its own.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use basket_core::pricing::calculate_totals;
use basket_core::{CartItem, Totals};

use crate::error::{SessionError, SessionResult};
use crate::state::Session;

/// Cart view including items and totals, as rendered by the summary panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub totals: Totals,
}

/// Builds the current cart view: items plus totals under the currently
/// selected coupon.
///
/// This is the one place the Total Calculator is invoked; every cart or
/// coupon command funnels through it so the summary can never go stale.
pub fn cart_view(session: &Session) -> CartView {
    let cart = session.cart.cart();
    CartView {
        items: cart.items.clone(),
        totals: calculate_totals(cart, session.coupons.selected()),
    }
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Unknown product id: `SessionError::ProductNotFound` (the UI handed us
///   an id the catalog doesn't know - that is broken wiring, not a no-op)
/// - Remaining stock ≤ 0: the cart is unchanged (pure core rule)
/// - Otherwise: quantity increments, clamped to stock
pub fn add_to_cart(session: &mut Session, product_id: &str) -> SessionResult<CartView> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = session
        .catalog
        .get(product_id)
        .cloned()
        .ok_or_else(|| SessionError::ProductNotFound(product_id.to_string()))?;

    let next = session.cart.cart().add_item(&product);
    session.cart.replace(next);
    Ok(cart_view(session))
}

/// Sets the quantity of a cart line.
///
/// Quantity ≤ 0 removes the line; quantities above stock are clamped;
/// unknown product ids are a no-op (the line is already gone).
pub fn update_cart_quantity(
    session: &mut Session,
    product_id: &str,
    quantity: i64,
) -> CartView {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_quantity command");

    let next = session.cart.cart().update_quantity(product_id, quantity);
    session.cart.replace(next);
    cart_view(session)
}

/// Removes a line from the cart. No-op if the product is not in the cart.
pub fn remove_from_cart(session: &mut Session, product_id: &str) -> CartView {
    debug!(product_id = %product_id, "remove_from_cart command");

    let next = session.cart.cart().remove_item(product_id);
    session.cart.replace(next);
    cart_view(session)
}

/// Clears all items from the cart.
pub fn clear_cart(session: &mut Session) -> CartView {
    debug!("clear_cart command");

    session.cart.clear();
    cart_view(session)
}

// =============================================================================
// Unit Tests
// =============================================================================
