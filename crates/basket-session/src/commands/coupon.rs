//! # Coupon Commands
//!
//! Session commands for coupon listing, creation, and selection.
//!
//! ## Selection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Coupon Selection Flow                                │
//! │                                                                         │
//! │  User picks "10% off coupon" in the selector                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_coupon(&mut session, "PERCENT10")                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CouponState remembers the selection (one at a time, or none)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return the fresh CartView - totals now include the coupon             │
//! │                                                                         │
//! │  The coupon itself changes nothing in the cart: it is an input to      │
//! │  the Total Calculator, applied once, after per-item tier discounts.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use basket_core::Coupon;

use crate::commands::cart::{cart_view, CartView};
use crate::error::SessionResult;
use crate::state::Session;

/// Returns the available coupons.
pub fn list_coupons(session: &Session) -> &[Coupon] {
    session.coupons.list()
}

/// Returns the currently selected coupon, if any.
pub fn selected_coupon(session: &Session) -> Option<&Coupon> {
    session.coupons.selected()
}

/// Adds a coupon to the list (admin operation).
pub fn create_coupon(session: &mut Session, coupon: Coupon) -> SessionResult<()> {
    debug!(code = %coupon.code, "create_coupon command");

    session.coupons.add_coupon(coupon)?;
    Ok(())
}

/// Selects the coupon with the given code and returns the refreshed view.
///
/// Unknown codes are a silent no-op; the view is returned either way.
pub fn apply_coupon(session: &mut Session, code: &str) -> CartView {
    debug!(code = %code, "apply_coupon command");

    session.coupons.select(code);
    cart_view(session)
}

/// Clears the coupon selection and returns the refreshed view.
pub fn clear_coupon(session: &mut Session) -> CartView {
    debug!("clear_coupon command");

    session.coupons.clear_selection();
    cart_view(session)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_to_cart, update_cart_quantity};
    use crate::seed;
    use basket_core::{DiscountType, Money};

    fn session_with_ten_p1() -> Session {
        let mut session = Session::new(seed::seed_products(), seed::seed_coupons());
        add_to_cart(&mut session, "p1").unwrap();
        update_cart_quantity(&mut session, "p1", 10);
        session
    }

    #[test]
    fn test_apply_and_clear_coupon() {
        let mut session = session_with_ten_p1();

        let view = apply_coupon(&mut session, "AMOUNT5000");
        assert_eq!(view.totals.total_after_discount, Money::from_units(85_000));
        assert_eq!(selected_coupon(&session).unwrap().code, "AMOUNT5000");

        let view = clear_coupon(&mut session);
        assert_eq!(view.totals.total_after_discount, Money::from_units(90_000));
        assert!(selected_coupon(&session).is_none());
    }

    #[test]
    fn test_apply_unknown_code_keeps_selection() {
        let mut session = session_with_ten_p1();
        apply_coupon(&mut session, "AMOUNT5000");

        let view = apply_coupon(&mut session, "NOPE");
        // silent no-op: selection and totals unchanged
        assert_eq!(selected_coupon(&session).unwrap().code, "AMOUNT5000");
        assert_eq!(view.totals.total_after_discount, Money::from_units(85_000));
    }

    #[test]
    fn test_create_coupon_then_apply() {
        let mut session = session_with_ten_p1();

        create_coupon(
            &mut session,
            Coupon {
                name: "20% off coupon".to_string(),
                code: "PERCENT20".to_string(),
                discount_type: DiscountType::Percentage,
                discount_value: 20,
            },
        )
        .unwrap();

        let view = apply_coupon(&mut session, "PERCENT20");
        assert_eq!(view.totals.total_after_discount, Money::from_units(72_000));
    }

    #[test]
    fn test_create_coupon_rejects_duplicates() {
        let mut session = session_with_ten_p1();
        let duplicate = seed::seed_coupons().remove(0);
        assert!(create_coupon(&mut session, duplicate).is_err());
    }
}
