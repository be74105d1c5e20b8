//! # Seed Data
//!
//! The startup catalog and stock coupons a fresh page session begins with.
//!
//! ## Seed Catalog
//! ```text
//! ┌─────┬───────────┬─────────┬───────┬──────────────────────────┐
//! │ id  │ name      │ price   │ stock │ discount tiers           │
//! ├─────┼───────────┼─────────┼───────┼──────────────────────────┤
//! │ p1  │ Product 1 │ 10,000  │ 20    │ 10+ → 10%, 20+ → 20%     │
//! │ p2  │ Product 2 │ 20,000  │ 20    │ 10+ → 15%                │
//! │ p3  │ Product 3 │ 30,000  │ 20    │ 10+ → 20%                │
//! └─────┴───────────┴─────────┴───────┴──────────────────────────┘
//! ```
//!
//! Coupons: `AMOUNT5000` (5,000 units off) and `PERCENT10` (10% off).

use basket_core::{Coupon, Discount, DiscountType, Product};

use crate::state::Session;

/// The startup product catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: 10_000,
            stock: 20,
            discounts: vec![
                Discount {
                    quantity: 10,
                    rate: 0.1,
                },
                Discount {
                    quantity: 20,
                    rate: 0.2,
                },
            ],
        },
        Product {
            id: "p2".to_string(),
            name: "Product 2".to_string(),
            price: 20_000,
            stock: 20,
            discounts: vec![Discount {
                quantity: 10,
                rate: 0.15,
            }],
        },
        Product {
            id: "p3".to_string(),
            name: "Product 3".to_string(),
            price: 30_000,
            stock: 20,
            discounts: vec![Discount {
                quantity: 10,
                rate: 0.2,
            }],
        },
    ]
}

/// The startup coupon list.
pub fn seed_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            name: "5,000 off coupon".to_string(),
            code: "AMOUNT5000".to_string(),
            discount_type: DiscountType::Amount,
            discount_value: 5_000,
        },
        Coupon {
            name: "10% off coupon".to_string(),
            code: "PERCENT10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
        },
    ]
}

/// A fully seeded session with an empty cart.
pub fn seeded_session() -> Session {
    Session::new(seed_products(), seed_coupons())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::validation::{validate_coupon, validate_product};

    #[test]
    fn test_seed_data_passes_its_own_validation() {
        for product in seed_products() {
            validate_product(&product).unwrap();
        }
        for coupon in seed_coupons() {
            validate_coupon(&coupon).unwrap();
        }
    }

    #[test]
    fn test_seed_catalog_shape() {
        let products = seed_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, "p1");
        assert_eq!(products[0].price, 10_000);
        assert_eq!(products[0].discounts.len(), 2);
        assert_eq!(products[0].max_discount_rate(), 0.2);
    }

    #[test]
    fn test_seeded_session_starts_clean() {
        let session = seeded_session();
        assert!(session.cart.cart().is_empty());
        assert!(session.coupons.selected().is_none());
        assert_eq!(session.coupons.list().len(), 2);
    }
}
