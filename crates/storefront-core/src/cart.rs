//! # Cart Ledger
//!
//! The shopping cart as an immutable value.
//!
//! ## Copy-on-Write Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Operation                   New Cart Value      │
//! │  ─────────              ─────────                   ──────────────      │
//! │                                                                         │
//! │  Add to cart ─────────► add_item(p, n, size, color) ► merge or append   │
//! │                                                                         │
//! │  Quantity stepper ────► update_quantity(id, n) ─────► qty = n           │
//! │                                                       (n ≤ 0 removes)   │
//! │                                                                         │
//! │  Trash icon ──────────► remove_item(id) ────────────► drop every line   │
//! │                                                       of that product   │
//! │                                                                         │
//! │  Clear all ───────────► clear() ────────────────────► []                │
//! │                                                                         │
//! │  NOTE: every operation takes `&self` and returns a NEW cart. The caller │
//! │        adopts the returned value as current state; the old value is    │
//! │        never touched.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two lines share a [`LineKey`] (product id, size, color)
//! - Every line has `quantity ≥ 1`
//! - New lines are appended; merged lines keep their position
//!
//! ## Example
//! ```rust
//! use storefront_core::cart::Cart;
//! use storefront_core::catalog::Catalog;
//!
//! let catalog = Catalog::sample();
//! let tee = catalog.get("1").unwrap();
//!
//! let cart = Cart::new().add_item(tee, 1, None, None);
//! let cart = cart.add_item(tee, 1, None, None);
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.items()[0].quantity, 2);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing::{OrderTotals, PricingPolicy};
use crate::types::{CartLineItem, LineKey, Product};

/// The shopping cart: an ordered list of line items.
///
/// Deserializing goes through [`From<Vec<CartLineItem>>`], so a cart read
/// from JSON is normalised the same way as one built from raw lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Line items in display order.
    #[inline]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Looks up the line for a key.
    pub fn line(&self, key: &LineKey) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.matches(key))
    }

    /// Adds a product, merging into an existing line with the same key.
    ///
    /// ## Behavior
    /// - `size`/`color`: the requested option when the product lists it,
    ///   otherwise the product's first option, otherwise `"M"` / `"#000000"`
    /// - Same key already present: quantity increases (saturating at
    ///   `i64::MAX`), position kept
    /// - Otherwise: a new line is appended
    /// - `quantity ≤ 0` is treated as 1
    #[must_use]
    pub fn add_item(
        &self,
        product: &Product,
        quantity: i64,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Cart {
        let quantity = quantity.max(1);
        let key = LineKey::new(
            product.id.clone(),
            product.resolve_size(size),
            product.resolve_color(color),
        );

        let mut next = self.clone();

        if let Some(item) = next.items.iter_mut().find(|i| i.matches(&key)) {
            item.quantity = item.quantity.saturating_add(quantity);
            return next;
        }

        next.items.push(CartLineItem::from_product(
            product,
            quantity,
            key.size,
            key.color,
        ));
        next
    }

    /// Sets the quantity of every line for `product_id`.
    ///
    /// ## Behavior
    /// - `quantity ≤ 0`: same as [`Cart::remove_item`]
    /// - Absolute set, not a delta
    /// - Unknown product id: returns an identical cart
    ///
    /// Like removal, this matches on product id alone, so every size/color
    /// variant of the product is set to the same quantity. Use
    /// [`Cart::update_line_quantity`] to target one variant.
    #[must_use]
    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> Cart {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        let mut next = self.clone();
        for item in next.items.iter_mut().filter(|i| i.product_id() == product_id) {
            item.quantity = quantity;
        }
        next
    }

    /// Sets the quantity of exactly one line; `quantity ≤ 0` removes it.
    #[must_use]
    pub fn update_line_quantity(&self, key: &LineKey, quantity: i64) -> Cart {
        if quantity <= 0 {
            return self.remove_line(key);
        }

        let mut next = self.clone();
        if let Some(item) = next.items.iter_mut().find(|i| i.matches(key)) {
            item.quantity = quantity;
        }
        next
    }

    /// Removes every line whose product id equals `product_id`.
    ///
    /// All size/color variants of the product go together. Unknown ids leave
    /// the cart unchanged.
    #[must_use]
    pub fn remove_item(&self, product_id: &str) -> Cart {
        let mut next = self.clone();
        next.items.retain(|i| i.product_id() != product_id);
        next
    }

    /// Removes the single line matching `key`.
    #[must_use]
    pub fn remove_line(&self, key: &LineKey) -> Cart {
        let mut next = self.clone();
        next.items.retain(|i| !i.matches(key));
        next
    }

    /// Returns an empty cart.
    #[must_use]
    pub fn clear(&self) -> Cart {
        Cart::new()
    }

    /// Number of distinct lines (what the header badge shows).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Order totals under `policy`.
    pub fn totals(&self, policy: &PricingPolicy) -> OrderTotals {
        policy.compute_totals(&self.items)
    }
}

impl From<Vec<CartLineItem>> for Cart {
    /// Builds a cart from lines, merging duplicate keys and dropping lines
    /// with a non-positive quantity so the invariants hold for any input.
    fn from(lines: Vec<CartLineItem>) -> Self {
        let mut cart = Cart::new();
        for line in lines.into_iter().filter(|l| l.quantity > 0) {
            let key = line.key();
            match cart.items.iter().position(|i| i.matches(&key)) {
                Some(idx) => {
                    let merged = &mut cart.items[idx];
                    merged.quantity = merged.quantity.saturating_add(line.quantity);
                }
                None => cart.items.push(line),
            }
        }
        cart
    }
}

/// Wire shape of a cart: `{ "items": [...] }`.
#[derive(Deserialize)]
struct CartLines {
    #[serde(default)]
    items: Vec<CartLineItem>,
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CartLines::deserialize(deserializer).map(|wire| Cart::from(wire.items))
    }
}

/// Guards checkout: an empty cart cannot proceed.
pub fn ensure_checkout_ready(cart: &Cart) -> CoreResult<()> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
