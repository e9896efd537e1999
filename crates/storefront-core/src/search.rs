//! # Catalog Search
//!
//! Case-insensitive substring search over product name and category.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types "TSHIRT"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  query.trim() empty? ── yes ──► whole catalog, original order           │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  needle = query.to_lowercase()                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  keep product if name.to_lowercase() contains needle                    │
//! │               or category.to_lowercase() contains needle                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  matches in catalog order (no ranking)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the emptiness check trims; a non-blank query is matched as typed, so
//! `"tee "` with a trailing space does not match a name ending in "Tee".

use crate::types::Product;

/// Filters `products` by `query`, preserving catalog order.
///
/// An empty result is a valid answer; callers tell "nothing matched" from
/// "no query" by looking at the query, not a flag.
///
/// ## Example
/// ```rust
/// use storefront_core::catalog::Catalog;
/// use storefront_core::search::filter;
///
/// let catalog = Catalog::sample();
///
/// assert_eq!(filter(catalog.products(), "").len(), catalog.len());
/// assert_eq!(filter(catalog.products(), "JEANS").len(), 1);
/// assert!(filter(catalog.products(), "parka").is_empty());
/// ```
pub fn filter<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| matches_query(product, &needle))
        .collect()
}

/// Whether a product matches an already-lowercased needle.
fn matches_query(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

// =============================================================================
// Unit Tests
// =============================================================================
