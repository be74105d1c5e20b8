//! # Session Walkthrough
//!
//! Drives a seeded session through a typical shopping flow and prints the
//! running order summary. Useful for eyeballing pricing behavior without
//! a frontend.
//!
//! ## Usage
//! ```bash
//! cargo run -p basket-session --bin demo
//!
//! # With debug logs from the command layer
//! RUST_LOG=debug cargo run -p basket-session --bin demo
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use basket_core::Product;
use basket_session::commands::{
    add_to_cart, apply_coupon, cart_view, clear_coupon, list_coupons, list_products,
    update_cart_quantity, CartView,
};
use basket_session::seed;
use basket_session::SessionCell;

fn print_product(product: &Product) {
    let best = product.max_discount_rate();
    if best > 0.0 {
        println!(
            "  {} - {} (stock {}, up to {:.0}% off)",
            product.name,
            product.price(),
            product.stock,
            best * 100.0
        );
    } else {
        println!(
            "  {} - {} (stock {})",
            product.name,
            product.price(),
            product.stock
        );
    }
}

fn print_summary(label: &str, view: &CartView) {
    println!("{}", label);
    for item in &view.items {
        println!(
            "  {} x {} = {}",
            item.product.name,
            item.quantity,
            item.total()
        );
    }
    println!("  before discount: {}", view.totals.total_before_discount);
    println!("  discount:        {}", view.totals.total_discount);
    println!("  to pay:          {}", view.totals.total_after_discount);
    println!();
}

fn main() {
    // Default: INFO, override with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("starting basket session walkthrough");

    // Page startup: build the session, then install it in the cell.
    // Commands dispatched before this point would fail fast.
    let mut cell = SessionCell::new();
    cell.initialize(seed::seeded_session());
    let session = cell.get_mut().expect("session was just initialized");

    println!("Catalog:");
    for product in list_products(session) {
        print_product(product);
    }
    println!();

    // Ten units of p1: the 10% tier kicks in.
    add_to_cart(session, "p1").expect("p1 is in the seed catalog");
    let view = update_cart_quantity(session, "p1", 10);
    print_summary("Cart with p1 x 10:", &view);

    // Try both stock coupons on the same cart.
    for coupon in list_coupons(session).to_vec() {
        let view = apply_coupon(session, &coupon.code);
        print_summary(&format!("With coupon {}:", coupon.name), &view);
    }

    let view = clear_coupon(session);
    print_summary("Coupon removed:", &view);

    // Dropping the quantity to zero empties the cart.
    let view = update_cart_quantity(session, "p1", 0);
    assert!(view.items.is_empty());
    print_summary("After removing the line:", &cart_view(session));

    info!("walkthrough finished");
}
