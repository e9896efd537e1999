//! # Validation Module
//!
//! Checks applied when data enters the core, never on cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI                                                            │
//! │  └── Quantity steppers never go below 1                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Loading (THIS MODULE)                                         │
//! │  ├── Catalog: product ids are unique                                    │
//! │  └── Pricing settings: money ≥ 0, tax rate ≤ 100%                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart operations                                               │
//! │  └── Never fail; ≤ 0 quantities remove, unknown ids are no-ops          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an amount in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (e.g. free shipping)
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents("shipping", 1000).is_ok());
/// assert!(validate_price_cents("shipping", 0).is_ok());
/// assert!(validate_price_cents("shipping", -100).is_err());
/// ```
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

/// Validates that no two products share an id.
///
/// This is the only assumption the core makes about catalog data; everything
/// else (empty option lists, missing original price) has a default.
pub fn validate_unique_ids(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents: 1000,
            original_price_cents: None,
            image: String::new(),
            rating: 0.0,
            reviews: 0,
            category: "misc".to_string(),
            colors: Vec::new(),
            sizes: Vec::new(),
            is_new: false,
            is_sale: false,
        }
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents("price", 0).is_ok());
        assert!(validate_price_cents("price", 2499).is_ok());
        assert!(validate_price_cents("price", -1).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(800).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids(&[]).is_ok());
        assert!(validate_unique_ids(&[product("1"), product("2")]).is_ok());

        let err = validate_unique_ids(&[product("1"), product("2"), product("1")]).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { ref value, .. } if value == "1"));
    }
}
