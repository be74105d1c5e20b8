//! # Cart Module
//!
//! The cart value type and its pure mutation operations.
//!
//! ## Value Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations Flow                                 │
//! │                                                                         │
//! │  UI Action              Pure Operation            Caller Responsibility │
//! │  ─────────              ──────────────            ────────────────────  │
//! │                                                                         │
//! │  Click Product ───────► cart.add_item(&p) ──────► store returned Cart  │
//! │                                                                         │
//! │  Click +/− ───────────► cart.update_quantity()──► store returned Cart  │
//! │                                                                         │
//! │  Click Remove ────────► cart.remove_item() ─────► store returned Cart  │
//! │                                                                         │
//! │  Every operation leaves the input cart untouched and returns a new     │
//! │  cart value. There is no hidden reactivity: the session state layer    │
//! │  stores the returned value as the new current cart.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by product id, in insertion order
//! - Every quantity is in `[1, product.stock]`
//! - A mutation that would drive a quantity to ≤ 0 removes the line
//!   instead of leaving a zero-quantity entry

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::discount;
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the cart.
///
/// ## Design Notes
/// Holds a frozen copy of the product at time of adding (snapshot pattern).
/// The cart displays consistent data even if the catalog entry is edited
/// after the item was added; stock clamping uses the snapshot's stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product snapshot at time of adding (frozen).
    pub product: Product,

    /// Quantity in cart, always in `[1, product.stock]`.
    pub quantity: u32,
}

impl CartItem {
    /// Calculates the line subtotal before any discount (price × quantity).
    ///
    /// Exact integer arithmetic - no rounding involved.
    pub fn subtotal(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Returns the discount rate applied to this line at its quantity.
    pub fn discount_rate(&self) -> f64 {
        discount::applicable_rate(&self.product.discounts, self.quantity)
    }

    /// Calculates the discounted line total, rounded to the nearest unit.
    pub fn total(&self) -> Money {
        Money::rounded(self.subtotal().units() as f64 * (1.0 - self.discount_rate()))
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered list of line items, unique by product id.
///
/// All mutation operations are pure: they take `&self` and return a new
/// `Cart`, leaving the input unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in the order they were first added.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Remaining stock ≤ 0: no mutation, the cart is returned unchanged
    /// - Product already in cart: quantity increases by 1 (clamped to stock)
    /// - Product not in cart: appended as a new line with quantity 1
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{Cart, Product};
    ///
    /// let product = Product {
    ///     id: "p1".into(), name: "Product 1".into(),
    ///     price: 10_000, stock: 2, discounts: vec![],
    /// };
    ///
    /// let cart = Cart::new().add_item(&product).add_item(&product);
    /// assert_eq!(cart.items[0].quantity, 2);
    ///
    /// // Stock exhausted: adding again changes nothing
    /// let same = cart.add_item(&product);
    /// assert_eq!(same, cart);
    /// ```
    pub fn add_item(&self, product: &Product) -> Cart {
        if self.remaining_stock(product) <= 0 {
            return self.clone();
        }

        let mut next = self.clone();
        match next.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity = (item.quantity + 1).min(product.stock),
            None => next.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
        next
    }

    /// Removes the line item with the given product id.
    ///
    /// No-op if the product is not in the cart.
    pub fn remove_item(&self, product_id: &str) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|i| i.product.id != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Sets the quantity of the line item with the given product id.
    ///
    /// ## Behavior
    /// - `new_quantity <= 0`: the line is removed entirely (this path is
    ///   how the "−" button empties a quantity-1 line)
    /// - `new_quantity > 0`: clamped to `[1, product.stock]`
    /// - Unknown product id: no-op
    pub fn update_quantity(&self, product_id: &str, new_quantity: i64) -> Cart {
        if new_quantity <= 0 {
            return self.remove_item(product_id);
        }

        let mut next = self.clone();
        if let Some(pos) = next.items.iter().position(|i| i.product.id == product_id) {
            // new_quantity >= 1 here, so the clamp can only reach 0 when the
            // snapshot's stock is 0 - and a zero-quantity line must not persist.
            let clamped = new_quantity.min(i64::from(next.items[pos].product.stock)) as u32;
            if clamped == 0 {
                next.items.remove(pos);
            } else {
                next.items[pos].quantity = clamped;
            }
        }
        next
    }

    /// Checks whether the cart contains a line for the given product id.
    pub fn has_item(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// Returns the product's stock minus the quantity already in the cart.
    ///
    /// The UI uses this for "sold out" display; `add_item` uses it to
    /// decide whether adding is possible at all.
    pub fn remaining_stock(&self, product: &Product) -> i64 {
        let in_cart = self
            .items
            .iter()
            .find(|i| i.product.id == product.id)
            .map_or(0, |i| i.quantity);
        i64::from(product.stock) - i64::from(in_cart)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of unique lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Discount;

    fn test_product(id: &str, price: i64, stock: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            stock,
            discounts: vec![Discount {
                quantity: 10,
                rate: 0.1,
            }],
        }
    }

    #[test]
    fn test_add_item_appends_with_quantity_one() {
        let cart = Cart::new().add_item(&test_product("p1", 10_000, 20));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
        assert!(cart.has_item("p1"));
    }

    #[test]
    fn test_add_item_increments_existing_line() {
        let product = test_product("p1", 10_000, 20);
        let cart = Cart::new().add_item(&product).add_item(&product);

        assert_eq!(cart.item_count(), 1); // still one unique line
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_add_item_leaves_input_untouched() {
        let product = test_product("p1", 10_000, 20);
        let before = Cart::new().add_item(&product);
        let after = before.add_item(&product);

        assert_eq!(before.items[0].quantity, 1);
        assert_eq!(after.items[0].quantity, 2);
    }

    #[test]
    fn test_add_item_out_of_stock_is_noop() {
        let sold_out = test_product("p1", 10_000, 0);
        let cart = Cart::new().add_item(&sold_out);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_stops_at_stock_limit() {
        let product = test_product("p1", 10_000, 2);
        let cart = Cart::new()
            .add_item(&product)
            .add_item(&product)
            .add_item(&product); // remaining stock is 0 here

        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_remove_item() {
        let cart = Cart::new()
            .add_item(&test_product("p1", 10_000, 20))
            .add_item(&test_product("p2", 20_000, 20));

        let cart = cart.remove_item("p1");
        assert!(!cart.has_item("p1"));
        assert!(cart.has_item("p2"));
    }

    #[test]
    fn test_remove_item_unknown_id_is_noop() {
        let cart = Cart::new().add_item(&test_product("p1", 10_000, 20));
        let same = cart.remove_item("nope");
        assert_eq!(same, cart);
    }

    #[test]
    fn test_update_quantity_replaces_and_clamps() {
        let cart = Cart::new().add_item(&test_product("p1", 10_000, 20));

        let cart = cart.update_quantity("p1", 15);
        assert_eq!(cart.items[0].quantity, 15);

        // above stock: clamped to 20
        let cart = cart.update_quantity("p1", 50);
        assert_eq!(cart.items[0].quantity, 20);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let cart = Cart::new().add_item(&test_product("p1", 10_000, 20));
        let cart = cart.update_quantity("p1", 0);
        assert!(!cart.has_item("p1"));
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let cart = Cart::new().add_item(&test_product("p1", 10_000, 20));
        let cart = cart.update_quantity("p1", -3);
        assert!(!cart.has_item("p1"));
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let cart = Cart::new().add_item(&test_product("p1", 10_000, 20));
        let same = cart.update_quantity("nope", 5);
        assert_eq!(same, cart);
    }

    #[test]
    fn test_remaining_stock() {
        let product = test_product("p1", 10_000, 20);
        let cart = Cart::new();
        assert_eq!(cart.remaining_stock(&product), 20);

        let cart = cart.add_item(&product).update_quantity("p1", 15);
        assert_eq!(cart.remaining_stock(&product), 5);
    }

    #[test]
    fn test_line_totals() {
        let cart = Cart::new()
            .add_item(&test_product("p1", 10_000, 20))
            .update_quantity("p1", 10); // 10% tier kicks in

        let item = &cart.items[0];
        assert_eq!(item.subtotal(), Money::from_units(100_000));
        assert_eq!(item.discount_rate(), 0.1);
        assert_eq!(item.total(), Money::from_units(90_000));
    }

    #[test]
    fn test_total_quantity_spans_lines() {
        let cart = Cart::new()
            .add_item(&test_product("p1", 10_000, 20))
            .add_item(&test_product("p2", 20_000, 20))
            .update_quantity("p2", 4);

        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.item_count(), 2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        /// A cart mutation, as driven by UI events.
        #[derive(Debug, Clone)]
        enum Op {
            Add(usize),
            Remove(usize),
            Update(usize, i64),
        }

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec((0i64..50_000, 0u32..30), 1..4).prop_map(|specs| {
                specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (price, stock))| Product {
                        id: format!("p{}", i),
                        name: format!("Product {}", i),
                        price,
                        stock,
                        discounts: vec![],
                    })
                    .collect()
            })
        }

        fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
            proptest::collection::vec(
                prop_oneof![
                    (0usize..4).prop_map(Op::Add),
                    (0usize..4).prop_map(Op::Remove),
                    (0usize..4, -5i64..40).prop_map(|(i, q)| Op::Update(i, q)),
                ],
                0..24,
            )
        }

        fn apply(cart: Cart, products: &[Product], op: &Op) -> Cart {
            let pick = |i: usize| &products[i % products.len()];
            match op {
                Op::Add(i) => cart.add_item(pick(*i)),
                Op::Remove(i) => cart.remove_item(&pick(*i).id),
                Op::Update(i, q) => cart.update_quantity(&pick(*i).id, *q),
            }
        }

        proptest! {
            /// Property: no mutation sequence ever violates the cart invariants
            /// (unique ids, quantities in [1, stock]).
            #[test]
            fn invariants_hold_under_any_mutation_sequence(
                products in arb_products(),
                ops in arb_ops(),
            ) {
                let mut cart = Cart::new();
                for op in &ops {
                    cart = apply(cart, &products, op);

                    for item in &cart.items {
                        prop_assert!(item.quantity >= 1);
                        prop_assert!(item.quantity <= item.product.stock);
                    }
                    let mut ids: Vec<&str> =
                        cart.items.iter().map(|i| i.product.id.as_str()).collect();
                    ids.sort_unstable();
                    ids.dedup();
                    prop_assert_eq!(ids.len(), cart.items.len());
                }
            }

            /// Property: add_item increases an existing line by exactly 1,
            /// unless the line is at its stock limit, in which case the
            /// cart is unchanged.
            #[test]
            fn add_increments_by_one_or_is_noop(
                products in arb_products(),
                ops in arb_ops(),
                target in 0usize..4,
            ) {
                let mut cart = Cart::new();
                for op in &ops {
                    cart = apply(cart, &products, op);
                }

                let product = &products[target % products.len()];
                let before = cart
                    .items
                    .iter()
                    .find(|i| i.product.id == product.id)
                    .map(|i| i.quantity);
                let next = cart.add_item(product);

                match before {
                    Some(qty) if qty >= product.stock => prop_assert_eq!(next, cart),
                    Some(qty) => {
                        let after = next
                            .items
                            .iter()
                            .find(|i| i.product.id == product.id)
                            .map(|i| i.quantity);
                        prop_assert_eq!(after, Some(qty + 1));
                    }
                    None if product.stock == 0 => prop_assert_eq!(next, cart),
                    None => prop_assert!(next.has_item(&product.id)),
                }
            }

            /// Property: remove_item never leaves the id behind.
            #[test]
            fn remove_purges_the_id(
                products in arb_products(),
                ops in arb_ops(),
                target in 0usize..4,
            ) {
                let mut cart = Cart::new();
                for op in &ops {
                    cart = apply(cart, &products, op);
                }

                let id = &products[target % products.len()].id;
                prop_assert!(!cart.remove_item(id).has_item(id));
            }

            /// Property: update_quantity to ≤ 0 removes the line.
            #[test]
            fn update_to_non_positive_removes(
                products in arb_products(),
                ops in arb_ops(),
                target in 0usize..4,
                qty in -10i64..=0,
            ) {
                let mut cart = Cart::new();
                for op in &ops {
                    cart = apply(cart, &products, op);
                }

                let id = &products[target % products.len()].id;
                prop_assert!(!cart.update_quantity(id, qty).has_item(id));
            }
        }
    }
}
