//! # Storefront Session
//!
//! Holds the catalog, the pricing policy and the CURRENT cart value, and
//! exposes the command-style functions the UI calls.
//!
//! ## Thread Safety
//! The cart value lives behind `Arc<Mutex<Cart>>`. Each write command takes
//! the lock, computes the next cart from the current one with a pure core
//! function, and stores the result. Commands never observe a half-updated
//! cart.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Commands                                        │
//! │                                                                         │
//! │  UI Action                Command                  Cart Transition      │
//! │  ─────────                ───────                  ───────────────      │
//! │                                                                         │
//! │  Add to Cart ───────────► add_to_cart() ─────────► cart.add_item()      │
//! │                                                                         │
//! │  +/- Quantity ──────────► update_cart_item() ────► cart.update_quantity │
//! │                                                                         │
//! │  Trash icon ────────────► remove_from_cart() ────► cart.remove_item()   │
//! │                                                                         │
//! │  Clear ─────────────────► clear_cart() ──────────► cart.clear()         │
//! │                                                                         │
//! │  Cart page ─────────────► get_cart() ────────────► (read only)          │
//! │                                                                         │
//! │  Search box ────────────► search_products() ─────► catalog.filter()     │
//! │                                                                         │
//! │  Every cart command returns a CartResponse: lines + derived totals.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use storefront_core::{
    ensure_checkout_ready, Cart, CartLineItem, Catalog, CategoryShelf, LineKey, Money,
    OrderTotals, PricingPolicy, Product, HOME_SHELVES,
};
use tracing::{debug, info};
use ts_rs::TS;

use crate::config::StoreConfig;
use crate::error::{SessionError, SessionResult};

// =============================================================================
// Responses
// =============================================================================

/// Cart response including lines and derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: OrderTotals,

    /// Number of distinct lines (the header badge).
    pub item_count: usize,

    /// Sum of quantities.
    pub total_quantity: i64,

    /// How much more merchandise unlocks free shipping.
    pub amount_to_free_shipping: Money,
}

impl CartResponse {
    fn build(cart: &Cart, policy: &PricingPolicy) -> Self {
        let totals = cart.totals(policy);
        CartResponse {
            items: cart.items().to_vec(),
            totals,
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            amount_to_free_shipping: policy.amount_to_free_shipping(totals.subtotal),
        }
    }
}

/// Search response: the query echoed back with its matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SearchResponse {
    pub query: String,
    pub products: Vec<Product>,
    pub total: usize,
}

// =============================================================================
// Cart State
// =============================================================================

/// Shared holder for the current cart value.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Replaces the cart with `transition(current)` and runs `f` on the result.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_cart_mut(|c| c.add_item(&tee, 1, None, None), Cart::item_count);
    /// ```
    pub fn with_cart_mut<T, F, R>(&self, transition: T, f: F) -> R
    where
        T: FnOnce(&Cart) -> Cart,
        F: FnOnce(&Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        let next = transition(&cart);
        *cart = next;
        f(&cart)
    }

    /// A copy of the current cart value.
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }
}

// =============================================================================
// Session
// =============================================================================

/// One shopper's storefront session.
#[derive(Debug)]
pub struct StorefrontSession {
    catalog: Catalog,
    policy: PricingPolicy,
    cart: CartState,
}

impl StorefrontSession {
    /// Creates a session with an empty cart.
    pub fn new(catalog: Catalog, policy: PricingPolicy) -> Self {
        StorefrontSession {
            catalog,
            policy,
            cart: CartState::new(),
        }
    }

    /// Creates a session priced by the given store config.
    pub fn from_config(catalog: Catalog, config: &StoreConfig) -> Self {
        let policy = config.pricing_policy();
        info!(
            products = catalog.len(),
            threshold = %policy.free_shipping_threshold,
            tax_bps = policy.tax_rate.bps(),
            "Storefront session started"
        );
        Self::new(catalog, policy)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// A copy of the current cart value.
    pub fn cart(&self) -> Cart {
        self.cart.snapshot()
    }

    fn respond(&self, cart: &Cart) -> CartResponse {
        CartResponse::build(cart, &self.policy)
    }

    // =========================================================================
    // Cart Commands
    // =========================================================================

    /// Gets the current cart contents.
    pub fn get_cart(&self) -> CartResponse {
        debug!("get_cart command");
        self.cart.with_cart(|c| self.respond(c))
    }

    /// Adds a catalog product to the cart.
    ///
    /// ## Arguments
    /// * `product_id` - Catalog id to add
    /// * `quantity` - Quantity to add (default: 1, values ≤ 0 count as 1)
    /// * `size` / `color` - Chosen options; unknown or missing values fall
    ///   back to the product's first option
    pub fn add_to_cart(
        &self,
        product_id: &str,
        quantity: Option<i64>,
        size: Option<&str>,
        color: Option<&str>,
    ) -> SessionResult<CartResponse> {
        let quantity = quantity.unwrap_or(1);
        debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| SessionError::ProductNotFound(product_id.to_string()))?;

        Ok(self.cart.with_cart_mut(
            |c| c.add_item(product, quantity, size, color),
            |c| self.respond(c),
        ))
    }

    /// Quick-add from a product card: one unit with the default options.
    ///
    /// The product does not have to come from this session's catalog.
    pub fn add_product(&self, product: &Product) -> CartResponse {
        debug!(product_id = %product.id, "add_product command");
        self.cart
            .with_cart_mut(|c| c.add_item(product, 1, None, None), |c| self.respond(c))
    }

    /// Sets the quantity of every line for a product; `≤ 0` removes them.
    pub fn update_cart_item(&self, product_id: &str, quantity: i64) -> CartResponse {
        debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");
        self.cart.with_cart_mut(
            |c| c.update_quantity(product_id, quantity),
            |c| self.respond(c),
        )
    }

    /// Sets the quantity of exactly one line.
    pub fn update_cart_line(&self, key: &LineKey, quantity: i64) -> CartResponse {
        debug!(?key, quantity = %quantity, "update_cart_line command");
        self.cart.with_cart_mut(
            |c| c.update_line_quantity(key, quantity),
            |c| self.respond(c),
        )
    }

    /// Removes every line for a product.
    pub fn remove_from_cart(&self, product_id: &str) -> CartResponse {
        debug!(product_id = %product_id, "remove_from_cart command");
        self.cart
            .with_cart_mut(|c| c.remove_item(product_id), |c| self.respond(c))
    }

    /// Removes exactly one line.
    pub fn remove_cart_line(&self, key: &LineKey) -> CartResponse {
        debug!(?key, "remove_cart_line command");
        self.cart
            .with_cart_mut(|c| c.remove_line(key), |c| self.respond(c))
    }

    /// Empties the cart.
    pub fn clear_cart(&self) -> CartResponse {
        debug!("clear_cart command");
        self.cart.with_cart_mut(Cart::clear, |c| self.respond(c))
    }

    /// Checkout summary; fails when the cart is empty.
    pub fn review_checkout(&self) -> SessionResult<CartResponse> {
        debug!("review_checkout command");
        self.cart.with_cart(|c| -> SessionResult<CartResponse> {
            ensure_checkout_ready(c)?;
            Ok(self.respond(c))
        })
    }

    // =========================================================================
    // Catalog Commands
    // =========================================================================

    /// Searches the catalog by name or category.
    pub fn search_products(&self, query: &str) -> SearchResponse {
        let products: Vec<Product> = self.catalog.filter(query).into_iter().cloned().collect();
        debug!(query = %query, results = products.len(), "search_products command");

        SearchResponse {
            query: query.to_string(),
            total: products.len(),
            products,
        }
    }

    /// Home page rows for the given categories.
    pub fn shelves<'a>(&'a self, categories: &[&'a str]) -> Vec<CategoryShelf<'a>> {
        self.catalog.shelves(categories)
    }

    /// The home page rows, in their fixed display order.
    pub fn home_shelves(&self) -> Vec<CategoryShelf<'_>> {
        debug!("home_shelves command");
        self.shelves(HOME_SHELVES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> StorefrontSession {
        StorefrontSession::new(Catalog::sample(), PricingPolicy::standard())
    }

    #[test]
    fn test_new_session_has_empty_cart() {
        let response = session().get_cart();
        assert!(response.items.is_empty());
        assert_eq!(response.item_count, 0);
        assert_eq!(response.totals.shipping.cents(), 1000);
        assert_eq!(response.amount_to_free_shipping.cents(), 10_000);
    }

    #[test]
    fn test_add_to_cart_returns_totals() {
        let session = session();
        let response = session.add_to_cart("1", Some(2), Some("M"), None).unwrap();

        assert_eq!(response.item_count, 1);
        assert_eq!(response.total_quantity, 2);
        assert_eq!(response.totals.subtotal.cents(), 4998);
        assert_eq!(response.totals.tax.cents(), 400);
        assert_eq!(response.totals.total.cents(), 6398);
        assert_eq!(response.amount_to_free_shipping.cents(), 5002);
        assert_eq!(response.items[0].selected_color, "#000000");
    }

    #[test]
    fn test_add_unknown_product_is_not_found() {
        let session = session();
        let err = session.add_to_cart("99", None, None, None).unwrap_err();

        assert_eq!(err.code(), "NOT_FOUND");
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_product_uses_defaults() {
        let session = session();
        let jeans = session.catalog().get("3").cloned().unwrap();

        let response = session.add_product(&jeans);
        assert_eq!(response.items[0].selected_size, "24");
        assert_eq!(response.items[0].selected_color, "#4169E1");
        assert_eq!(response.items[0].quantity, 1);
    }

    #[test]
    fn test_update_and_remove() {
        let session = session();
        session.add_to_cart("1", None, Some("S"), None).unwrap();
        session.add_to_cart("1", None, Some("L"), None).unwrap();
        session.add_to_cart("4", None, None, None).unwrap();

        let response = session.update_cart_item("1", 3);
        assert_eq!(response.total_quantity, 7);

        let response = session.remove_from_cart("1");
        assert_eq!(response.item_count, 1);
        assert_eq!(response.items[0].product_id(), "4");

        let response = session.update_cart_item("4", 0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_line_commands_target_one_variant() {
        let session = session();
        session.add_to_cart("2", None, Some("S"), None).unwrap();
        session.add_to_cart("2", None, Some("XL"), None).unwrap();

        let small = LineKey::new("2", "S", "#000000");
        let response = session.update_cart_line(&small, 5);
        assert_eq!(response.total_quantity, 6);

        let response = session.remove_cart_line(&small);
        assert_eq!(response.item_count, 1);
        assert_eq!(response.items[0].selected_size, "XL");
    }

    #[test]
    fn test_clear_then_checkout_fails() {
        let session = session();
        session.add_to_cart("4", None, None, None).unwrap();
        assert!(session.review_checkout().is_ok());

        let response = session.clear_cart();
        assert!(response.items.is_empty());

        let err = session.review_checkout().unwrap_err();
        assert_eq!(err.code(), "CART_EMPTY");
    }

    #[test]
    fn test_checkout_above_threshold_ships_free() {
        let session = session();
        session.add_to_cart("4", Some(2), None, None).unwrap();

        let response = session.review_checkout().unwrap();
        assert_eq!(response.totals.subtotal.cents(), 17_998);
        assert!(response.totals.qualifies_for_free_shipping());
        assert!(response.amount_to_free_shipping.is_zero());
    }

    #[test]
    fn test_config_policy_applies() {
        let mut config = StoreConfig::default();
        config.pricing.free_shipping_threshold_cents = 2_000;
        let session = StorefrontSession::from_config(Catalog::sample(), &config);

        let response = session.add_to_cart("1", None, None, None).unwrap();
        assert_eq!(response.totals.shipping.cents(), 0);
    }

    #[test]
    fn test_search_products() {
        let session = session();

        let response = session.search_products("tee");
        assert_eq!(response.total, 2);
        assert_eq!(response.query, "tee");

        assert_eq!(session.search_products("   ").total, 4);
        assert_eq!(session.search_products("sweater").total, 0);
    }

    #[test]
    fn test_shelves() {
        let session = session();
        let shelves = session.shelves(&["dresses", "shoes"]);
        assert_eq!(shelves[0].products.len(), 1);
        assert!(shelves[1].products.is_empty());

        let home = session.home_shelves();
        assert_eq!(home.len(), 6);
        assert_eq!(home[0].category, "tshirts");
        assert_eq!(home[0].products.len(), 2);
    }

    #[test]
    fn test_header_badge_counts_lines() {
        let session = session();
        session.add_to_cart("1", Some(3), Some("S"), None).unwrap();
        let response = session.add_to_cart("1", Some(2), Some("L"), None).unwrap();

        assert_eq!(response.item_count, 2);
        assert_eq!(response.total_quantity, 5);
    }

    #[test]
    fn test_cart_response_serializes_camel_case() {
        let session = session();
        let response = session.add_to_cart("2", None, None, None).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["totalQuantity"], 1);
        assert_eq!(json["totals"]["subtotal"], 3299);
        assert_eq!(json["items"][0]["selectedSize"], "S");
    }
}
