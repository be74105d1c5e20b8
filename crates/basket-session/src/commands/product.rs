//! # Product Commands
//!
//! Session commands for catalog listing and admin editing.
//!
//! ## Admin Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Editing Flow                                 │
//! │                                                                         │
//! │  Admin fills the "new product" form                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  create_product(&mut session, NewProduct { ... })                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  1. Assign a fresh uuid id                │                         │
//! │  │  2. Validate (name, price, tiers)         │──► invalid? reject      │
//! │  │  3. Append to the catalog                 │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return the stored Product (with its id) for the UI to render          │
//! │                                                                         │
//! │  Edits to existing entries go through update_product; lines already    │
//! │  in the cart keep their frozen snapshot.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use basket_core::{Discount, Product};

use crate::error::SessionResult;
use crate::state::Session;

/// Input for creating a catalog product; the id is assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub stock: u32,
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

/// Returns the catalog in display order.
pub fn list_products(session: &Session) -> &[Product] {
    session.catalog.list()
}

/// Creates a catalog product from admin input, assigning a fresh id.
pub fn create_product(session: &mut Session, input: NewProduct) -> SessionResult<Product> {
    debug!(name = %input.name, "create_product command");

    let product = Product {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        price: input.price,
        stock: input.stock,
        discounts: input.discounts,
    };

    session.catalog.add_product(product.clone())?;
    info!(product_id = %product.id, "product created");
    Ok(product)
}

/// Replaces the catalog entry with the same id. Unknown ids are a no-op.
pub fn update_product(session: &mut Session, product: Product) -> SessionResult<()> {
    debug!(product_id = %product.id, "update_product command");

    session.catalog.update_product(product)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn seeded_session() -> Session {
        Session::new(seed::seed_products(), seed::seed_coupons())
    }

    #[test]
    fn test_create_product_assigns_id_and_stores() {
        let mut session = seeded_session();
        let before = list_products(&session).len();

        let product = create_product(
            &mut session,
            NewProduct {
                name: "Product 4".to_string(),
                price: 15_000,
                stock: 10,
                discounts: vec![],
            },
        )
        .unwrap();

        assert!(!product.id.is_empty());
        assert_eq!(list_products(&session).len(), before + 1);
        assert!(session.catalog.get(&product.id).is_some());
    }

    #[test]
    fn test_create_product_rejects_invalid_input() {
        let mut session = seeded_session();
        let before = list_products(&session).len();

        let result = create_product(
            &mut session,
            NewProduct {
                name: "  ".to_string(),
                price: 15_000,
                stock: 10,
                discounts: vec![],
            },
        );

        assert!(result.is_err());
        assert_eq!(list_products(&session).len(), before);
    }

    #[test]
    fn test_update_product_edits_catalog_not_cart() {
        let mut session = seeded_session();
        crate::commands::add_to_cart(&mut session, "p1").unwrap();

        let mut edited = session.catalog.get("p1").unwrap().clone();
        edited.price = 12_000;
        update_product(&mut session, edited).unwrap();

        assert_eq!(session.catalog.get("p1").unwrap().price, 12_000);
        // the cart line keeps its frozen snapshot
        assert_eq!(session.cart.cart().items[0].product.price, 10_000);
    }

    #[test]
    fn test_new_product_deserializes_without_discounts() {
        let input: NewProduct = serde_json::from_str(
            r#"{ "name": "Product 5", "price": 1000, "stock": 3 }"#,
        )
        .unwrap();
        assert!(input.discounts.is_empty());
    }
}
