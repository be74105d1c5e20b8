//! # Validation Module
//!
//! Input validation for catalog and coupon management.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript admin page)                             │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Business rule validation before data enters session state         │
//! │  └── The last line of defense: nothing invalid reaches the catalog     │
//! │                                                                         │
//! │  Cart mutation and pricing do NOT validate: they are total functions   │
//! │  that clamp or no-op. Validation applies to data entering the          │
//! │  catalog/coupon lists, where bad values would poison every later       │
//! │  calculation.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::{validate_product_name, validate_price};
//!
//! assert!(validate_product_name("Product 1").is_ok());
//! assert!(validate_product_name("   ").is_err());
//! assert!(validate_price(-100).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Coupon, Discount, Product};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a price in whole currency units.
///
/// ## Rules
/// - Must not be negative (zero is allowed: giveaway items exist)
pub fn validate_price(price: i64) -> ValidationResult<()> {
    if price < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a discount tier.
///
/// ## Rules
/// - Threshold must be positive ("0 or more" is not a tier)
/// - Rate must be in `[0, 1)` - a rate of 1.0 would make the line free
///   and is reserved for coupons, not tiers
pub fn validate_discount_tier(tier: &Discount) -> ValidationResult<()> {
    if tier.quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "discount quantity".to_string(),
        });
    }

    if !(0.0..1.0).contains(&tier.rate) {
        return Err(ValidationError::InvalidFormat {
            field: "discount rate".to_string(),
            reason: "must be a fraction in [0, 1)".to_string(),
        });
    }

    Ok(())
}

/// Validates a coupon code.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Alphanumeric plus hyphen/underscore only
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 50,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates a whole product before it enters the catalog.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    for tier in &product.discounts {
        validate_discount_tier(tier)?;
    }
    Ok(())
}

/// Validates a whole coupon before it enters the coupon list.
///
/// ## Rules
/// - Name and code must pass their field validators
/// - Value must not be negative
/// - Percentage value must be at most 100
pub fn validate_coupon(coupon: &Coupon) -> ValidationResult<()> {
    if coupon.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    validate_coupon_code(&coupon.code)?;

    if coupon.discount_value < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "discountValue".to_string(),
        });
    }

    if coupon.discount_type == crate::types::DiscountType::Percentage
        && coupon.discount_value > 100
    {
        return Err(ValidationError::OutOfRange {
            field: "discountValue".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
