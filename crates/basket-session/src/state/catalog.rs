//! # Catalog State
//!
//! Holds the product list for one page session.
//!
//! ## Lifecycle
//! The catalog is seeded once at startup and afterwards changes only
//! through explicit admin operations (`add_product`, `update_product`).
//! Cart snapshots are frozen copies, so editing a catalog entry never
//! rewrites lines already in the cart.

use basket_core::validation::validate_product;
use basket_core::{Product, ValidationError};

/// The product catalog of a session.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Vec<Product>,
}

impl CatalogState {
    /// Creates a catalog from the seed product list.
    pub fn new(products: Vec<Product>) -> Self {
        CatalogState { products }
    }

    /// Returns the products in catalog order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Adds a new product to the catalog.
    ///
    /// Validates the product and rejects duplicate ids; the catalog must
    /// stay unique by id or cart lookups become ambiguous.
    pub fn add_product(&mut self, product: Product) -> Result<(), ValidationError> {
        validate_product(&product)?;

        if self.get(&product.id).is_some() {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id,
            });
        }

        self.products.push(product);
        Ok(())
    }

    /// Replaces the catalog entry with the same id.
    ///
    /// Unknown ids are a no-op: the admin page can only edit entries it
    /// was handed, so a miss means the entry was removed concurrently
    /// and there is nothing sensible to do with the edit.
    pub fn update_product(&mut self, updated: Product) -> Result<(), ValidationError> {
        validate_product(&updated)?;

        if let Some(existing) = self.products.iter_mut().find(|p| p.id == updated.id) {
            *existing = updated;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            stock: 20,
            discounts: vec![],
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut catalog = CatalogState::default();
        catalog.add_product(product("p1", 10_000)).unwrap();

        assert_eq!(catalog.list().len(), 1);
        assert_eq!(catalog.get("p1").unwrap().price, 10_000);
        assert!(catalog.get("p2").is_none());
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = CatalogState::new(vec![product("p1", 10_000)]);
        let err = catalog.add_product(product("p1", 20_000)).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
        assert_eq!(catalog.list().len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_product() {
        let mut catalog = CatalogState::default();
        let mut bad = product("p1", 10_000);
        bad.price = -1;
        assert!(catalog.add_product(bad).is_err());
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_update_replaces_matching_entry() {
        let mut catalog = CatalogState::new(vec![product("p1", 10_000)]);
        let mut edited = product("p1", 12_000);
        edited.stock = 5;
        catalog.update_product(edited).unwrap();

        let p = catalog.get("p1").unwrap();
        assert_eq!(p.price, 12_000);
        assert_eq!(p.stock, 5);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut catalog = CatalogState::new(vec![product("p1", 10_000)]);
        catalog.update_product(product("p9", 99_000)).unwrap();

        assert_eq!(catalog.list().len(), 1);
        assert!(catalog.get("p9").is_none());
    }
}
