//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart,
//! pricing and catalog search rules as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    Web UI (routing, cards, toasts)              │    │
//! │  │    Search box ──► Product grid ──► Cart page ──► Summary        │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ plain data                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                    storefront-session                           │    │
//! │  │    add_to_cart, update_cart_item, search_products, etc.         │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │   cart    │  │  pricing  │  │  catalog  │  │  search   │    │    │
//! │  │   │   Cart    │  │ Shipping  │  │  Catalog  │  │  filter   │    │    │
//! │  │   │ LineKey   │  │   Tax     │  │  Shelves  │  │           │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLineItem, LineKey, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Shipping threshold, tax and order totals
//! - [`cart`] - Copy-on-write cart ledger
//! - [`catalog`] - Product collection, sample data, category shelves
//! - [`search`] - Substring search over name and category
//! - [`validation`] - Checks applied when loading data
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every cart operation maps an old cart to a new one
//! 2. **No I/O**: file system, network and logging live in the session crate
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **No-op over error**: unknown ids and bad quantities never fail
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{compute_totals, Cart, Catalog};
//!
//! let catalog = Catalog::sample();
//! let tee = catalog.get("1").unwrap();
//!
//! let cart = Cart::new().add_item(tee, 2, Some("M"), None);
//! let totals = compute_totals(cart.items());
//!
//! // 2 × $24.99 = $49.98, + $10.00 shipping, + $4.00 tax
//! assert_eq!(totals.total.cents(), 6398);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use cart::{ensure_checkout_ready, Cart};
pub use catalog::{Catalog, CategoryShelf, HOME_SHELVES};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_totals, OrderTotals, PricingPolicy};
pub use types::*;
