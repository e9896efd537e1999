//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐    │
//! │  │    Product      │   │    CartLineItem     │   │    LineKey      │    │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │    │
//! │  │  id             │──►│  product (snapshot) │──►│  product_id     │    │
//! │  │  name           │   │  quantity  (≥ 1)    │   │  size           │    │
//! │  │  price_cents    │   │  selected_size      │   │  color          │    │
//! │  │  sizes, colors  │   │  selected_color     │   └─────────────────┘    │
//! │  └─────────────────┘   └─────────────────────┘                          │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   800 bps = 8%                                     │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line item carries a full copy of the product it was created from, so the
//! cart renders consistently even if the catalog later swaps in new data.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Size chosen when a product lists no sizes.
pub const DEFAULT_SIZE: &str = "M";

/// Neutral color chosen when a product lists no colors.
pub const DEFAULT_COLOR: &str = "#000000";

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the storefront's flat sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
///
/// Products are immutable once loaded into a [`Catalog`](crate::catalog::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Identifier, unique within the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Pre-discount price in cents, when the product is marked down.
    #[serde(default)]
    pub original_price_cents: Option<i64>,

    /// Image reference (URL or asset key).
    #[serde(default)]
    pub image: String,

    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f32,

    /// Number of reviews behind `rating`.
    #[serde(default)]
    pub reviews: u32,

    /// Category label (e.g. "tshirts").
    pub category: String,

    /// Available color tokens, in display order.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Available size tokens, in display order.
    #[serde(default)]
    pub sizes: Vec<String>,

    #[serde(default)]
    pub is_new: bool,

    #[serde(default)]
    pub is_sale: bool,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-discount price, if any.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_cents.map(Money::from_cents)
    }

    /// Percentage off the original price, rounded to the nearest whole percent.
    ///
    /// Returns 0 when there is no original price (or it is not positive).
    ///
    /// ## Example
    /// ```text
    /// original $29.99, price $24.99 → (500 / 2999) × 100 = 16.67 → 17
    /// ```
    pub fn discount_percent(&self) -> u32 {
        match self.original_price().map(|m| m.cents()) {
            Some(original) if original > 0 => {
                let off = original.saturating_sub(self.price_cents);
                if off <= 0 {
                    return 0;
                }
                // round(off / original × 100) in integers, half up
                let (off, original) = (off as i128, original as i128);
                ((off * 200 + original) / (original * 2)) as u32
            }
            _ => 0,
        }
    }

    /// Whether a "% OFF" badge should be shown.
    pub fn shows_sale_badge(&self) -> bool {
        self.is_sale && self.discount_percent() > 0
    }

    /// Size used when the caller does not pick one.
    pub fn default_size(&self) -> &str {
        self.sizes.first().map(String::as_str).unwrap_or(DEFAULT_SIZE)
    }

    /// Color used when the caller does not pick one.
    pub fn default_color(&self) -> &str {
        self.colors.first().map(String::as_str).unwrap_or(DEFAULT_COLOR)
    }

    /// Resolves a requested size against the product's own sizes.
    ///
    /// A size the product does not list falls back to [`Product::default_size`],
    /// so a line item never carries an option the product does not offer.
    pub fn resolve_size(&self, requested: Option<&str>) -> String {
        match requested {
            Some(size) if self.sizes.iter().any(|s| s == size) => size.to_string(),
            _ => self.default_size().to_string(),
        }
    }

    /// Resolves a requested color against the product's own colors.
    pub fn resolve_color(&self, requested: Option<&str>) -> String {
        match requested {
            Some(color) if self.colors.iter().any(|c| c == color) => color.to_string(),
            _ => self.default_color().to_string(),
        }
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// Identity of a line item: two entries with the same key are merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineKey {
    pub product_id: String,
    pub size: String,
    pub color: String,
}

impl LineKey {
    pub fn new(
        product_id: impl Into<String>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        LineKey {
            product_id: product_id.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

/// A product in the cart with a chosen size, color and quantity.
///
/// ## Design Notes
/// - `product`: frozen copy of the catalog entry at the time of adding.
///   Flattened on the wire so the UI sees `{ id, name, priceCents, ...,
///   quantity, selectedSize, selectedColor }`.
/// - `quantity` is always ≥ 1 while the item is in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,

    pub quantity: i64,

    pub selected_size: String,

    pub selected_color: String,
}

impl CartLineItem {
    /// Creates a line item, snapshotting the product.
    pub fn from_product(
        product: &Product,
        quantity: i64,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        CartLineItem {
            product: product.clone(),
            quantity,
            selected_size: size.into(),
            selected_color: color.into(),
        }
    }

    /// Product identifier of this line.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price captured at the time of adding.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price()
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// The merge identity of this line.
    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.product.id.clone(),
            self.selected_size.clone(),
            self.selected_color.clone(),
        )
    }

    /// Checks the line against a key without allocating.
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id
            && self.selected_size == key.size
            && self.selected_color == key.color
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product {
            id: "1".to_string(),
            name: "Organic Cotton Basic Tee".to_string(),
            price_cents: 2499,
            original_price_cents: Some(2999),
            image: String::new(),
            rating: 4.5,
            reviews: 128,
            category: "tshirts".to_string(),
            colors: vec!["#000000".to_string(), "#FFFFFF".to_string()],
            sizes: vec!["XS".to_string(), "S".to_string(), "M".to_string()],
            is_new: true,
            is_sale: true,
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
    }

    #[test]
    fn test_discount_percent() {
        // 500 / 2999 = 16.67% → 17
        assert_eq!(tee().discount_percent(), 17);

        let mut jeans = tee();
        jeans.price_cents = 6899;
        jeans.original_price_cents = Some(7999);
        // 1100 / 7999 = 13.75% → 14
        assert_eq!(jeans.discount_percent(), 14);

        let mut full_price = tee();
        full_price.original_price_cents = None;
        assert_eq!(full_price.discount_percent(), 0);
        assert!(!full_price.shows_sale_badge());
    }

    #[test]
    fn test_sale_badge_requires_flag() {
        let mut product = tee();
        assert!(product.shows_sale_badge());

        product.is_sale = false;
        assert!(!product.shows_sale_badge());
    }

    #[test]
    fn test_option_defaults() {
        let product = tee();
        assert_eq!(product.default_size(), "XS");
        assert_eq!(product.default_color(), "#000000");

        let mut bare = tee();
        bare.sizes.clear();
        bare.colors.clear();
        assert_eq!(bare.default_size(), DEFAULT_SIZE);
        assert_eq!(bare.default_color(), DEFAULT_COLOR);
    }

    #[test]
    fn test_resolve_rejects_unlisted_options() {
        let product = tee();
        assert_eq!(product.resolve_size(Some("M")), "M");
        assert_eq!(product.resolve_size(Some("XXL")), "XS");
        assert_eq!(product.resolve_size(None), "XS");
        assert_eq!(product.resolve_color(Some("#FFFFFF")), "#FFFFFF");
        assert_eq!(product.resolve_color(Some("#123456")), "#000000");
    }

    #[test]
    fn test_line_total_and_key() {
        let item = CartLineItem::from_product(&tee(), 3, "S", "#FFFFFF");
        assert_eq!(item.line_total().cents(), 7497);
        assert_eq!(item.key(), LineKey::new("1", "S", "#FFFFFF"));
        assert!(item.matches(&LineKey::new("1", "S", "#FFFFFF")));
        assert!(!item.matches(&LineKey::new("1", "M", "#FFFFFF")));
    }

    #[test]
    fn test_line_item_serializes_flat() {
        let item = CartLineItem::from_product(&tee(), 2, "S", "#000000");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["priceCents"], 2499);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["selectedSize"], "S");
        assert_eq!(json["selectedColor"], "#000000");
    }

    #[test]
    fn test_product_deserializes_with_defaults() {
        let json = r#"{"id":"9","name":"Scarf","priceCents":1500,"category":"accessories"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.sizes.is_empty());
        assert!(!product.is_new);
        assert_eq!(product.original_price(), None);
        assert_eq!(product.default_size(), "M");
    }
}
