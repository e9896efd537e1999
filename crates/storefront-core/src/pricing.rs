//! # Pricing Policy
//!
//! Turns a cart subtotal into shipping, tax and an order total.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = Σ unit_price × quantity             (exact, integer cents)  │
//! │                                                                         │
//! │  shipping = subtotal > $100.00 ? $0.00 : $10.00 (strictly greater)      │
//! │                                                                         │
//! │  tax      = subtotal × 8%     carried unrounded, rounded half-up only   │
//! │                               when presented                            │
//! │                                                                         │
//! │  total    = subtotal + shipping + tax           (rounded once)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty cart is not special-cased: it still shows $10.00 shipping.
//!
//! ## Example
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::pricing::PricingPolicy;
//!
//! let totals = PricingPolicy::standard().totals_for_subtotal(Money::from_cents(4998));
//! assert_eq!(totals.shipping.cents(), 1000);
//! assert_eq!(totals.tax.cents(), 400);   // 3.9984 → 4.00
//! assert_eq!(totals.total.cents(), 6398);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, BPS_SCALE};
use crate::types::{CartLineItem, TaxRate};

/// Orders above this subtotal ship free ($100.00).
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;

/// Flat shipping charge below the threshold ($10.00).
pub const FLAT_SHIPPING_CENTS: i64 = 1_000;

/// Flat sales tax (8%).
pub const SALES_TAX_BPS: u32 = 800;

// =============================================================================
// Order Totals
// =============================================================================

/// The four figures shown in the order summary.
///
/// All values are rounded to whole cents; `total` is computed from the
/// unrounded tax and rounded once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderTotals {
    /// Whether the order ships free.
    #[inline]
    pub fn qualifies_for_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

// =============================================================================
// Pricing Policy
// =============================================================================

/// Shipping threshold, flat shipping fee and tax rate.
///
/// [`PricingPolicy::standard`] is the storefront's literal policy; other
/// values come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub free_shipping_threshold: Money,
    pub flat_shipping: Money,
    pub tax_rate: TaxRate,
}

impl PricingPolicy {
    /// $10.00 shipping up to and including $100.00, 8% tax.
    pub const fn standard() -> Self {
        PricingPolicy {
            free_shipping_threshold: Money::from_cents(FREE_SHIPPING_THRESHOLD_CENTS),
            flat_shipping: Money::from_cents(FLAT_SHIPPING_CENTS),
            tax_rate: TaxRate::from_bps(SALES_TAX_BPS),
        }
    }

    /// Shipping charged for a subtotal.
    ///
    /// The comparison is strict: exactly the threshold still pays shipping.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping
        }
    }

    /// How much more the shopper must add before the "free shipping" banner
    /// disappears, or zero when the subtotal already reaches the threshold.
    pub fn amount_to_free_shipping(&self, subtotal: Money) -> Money {
        self.free_shipping_threshold.saturating_sub(subtotal)
    }

    /// Computes totals from an already-summed subtotal.
    pub fn totals_for_subtotal(&self, subtotal: Money) -> OrderTotals {
        let shipping = self.shipping_for(subtotal);
        let tax_scaled = subtotal.tax_scaled(self.tax_rate);

        let total_scaled =
            (subtotal.cents() as i128 + shipping.cents() as i128) * BPS_SCALE + tax_scaled;

        OrderTotals {
            subtotal,
            shipping,
            tax: Money::round_half_up_scaled(tax_scaled),
            total: Money::round_half_up_scaled(total_scaled),
        }
    }

    /// Computes totals for a set of line items.
    pub fn compute_totals(&self, items: &[CartLineItem]) -> OrderTotals {
        self.totals_for_subtotal(subtotal(items))
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy::standard()
    }
}

/// Σ unit price × quantity.
pub fn subtotal(items: &[CartLineItem]) -> Money {
    items.iter().map(CartLineItem::line_total).sum()
}

/// Computes totals under the standard policy.
pub fn compute_totals(items: &[CartLineItem]) -> OrderTotals {
    PricingPolicy::standard().compute_totals(items)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents,
            original_price_cents: None,
            image: String::new(),
            rating: 4.0,
            reviews: 10,
            category: "tshirts".to_string(),
            colors: vec!["#000000".to_string()],
            sizes: vec!["S".to_string()],
            is_new: false,
            is_sale: false,
        }
    }

    fn totals_at(cents: i64) -> OrderTotals {
        PricingPolicy::standard().totals_for_subtotal(Money::from_cents(cents))
    }

    #[test]
    fn test_empty_cart_still_pays_shipping() {
        let totals = compute_totals(&[]);
        assert_eq!(totals.subtotal.cents(), 0);
        assert_eq!(totals.shipping.cents(), 1000);
        assert_eq!(totals.tax.cents(), 0);
        assert_eq!(totals.total.cents(), 1000);
        assert!(!totals.qualifies_for_free_shipping());
    }

    #[test]
    fn test_shipping_boundary_is_strict() {
        assert_eq!(totals_at(10_000).shipping.cents(), 1000);
        assert_eq!(totals_at(10_001).shipping.cents(), 0);
        assert!(totals_at(10_001).qualifies_for_free_shipping());
    }

    #[test]
    fn test_two_tees() {
        let items = vec![CartLineItem::from_product(&product("p1", 2499), 2, "S", "#000000")];
        let totals = compute_totals(&items);

        assert_eq!(totals.subtotal.cents(), 4998);
        assert_eq!(totals.shipping.cents(), 1000);
        assert_eq!(totals.tax.cents(), 400);
        assert_eq!(totals.total.cents(), 6398);
    }

    #[test]
    fn test_total_uses_unrounded_tax() {
        // $1.06 × 8% = 8.48 cents
        let totals = totals_at(106);
        assert_eq!(totals.tax.cents(), 8);
        assert_eq!(totals.total.cents(), 106 + 1000 + 8);

        // $100.01 × 8% = 800.08 cents → total 10001 + 800.08 = 10801.08
        let totals = totals_at(10_001);
        assert_eq!(totals.tax.cents(), 800);
        assert_eq!(totals.total.cents(), 10_801);
    }

    #[test]
    fn test_subtotal_is_exact() {
        // 0.1 + 0.2 in float is not 0.3; in cents it is
        let items = vec![
            CartLineItem::from_product(&product("a", 10), 1, "S", "#000000"),
            CartLineItem::from_product(&product("b", 20), 1, "S", "#000000"),
        ];
        assert_eq!(subtotal(&items).cents(), 30);
    }

    #[test]
    fn test_total_monotonic_within_shipping_band() {
        let mut previous = totals_at(0).total;
        for cents in (0..=10_000).step_by(37) {
            let total = totals_at(cents).total;
            assert!(total >= previous, "total fell at subtotal {}", cents);
            previous = total;
        }

        let mut previous = totals_at(10_001).total;
        for cents in (10_001..=30_000).step_by(41) {
            let total = totals_at(cents).total;
            assert!(total >= previous, "total fell at subtotal {}", cents);
            previous = total;
        }
    }

    #[test]
    fn test_merchandise_cost_monotonic_across_threshold() {
        // subtotal + tax never decreases; only the shipping step can
        let cost = |cents: i64| {
            let t = totals_at(cents);
            t.total.cents() - t.shipping.cents()
        };
        assert!(cost(10_001) >= cost(10_000));
        assert!(cost(10_500) >= cost(9_500));
    }

    #[test]
    fn test_amount_to_free_shipping() {
        let policy = PricingPolicy::standard();
        assert_eq!(policy.amount_to_free_shipping(Money::from_cents(4998)).cents(), 5002);
        assert!(policy.amount_to_free_shipping(Money::from_cents(10_000)).is_zero());
        assert!(policy.amount_to_free_shipping(Money::from_cents(15_000)).is_zero());
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            free_shipping_threshold: Money::from_cents(5_000),
            flat_shipping: Money::from_cents(500),
            tax_rate: TaxRate::from_bps(0),
        };
        let totals = policy.totals_for_subtotal(Money::from_cents(5_001));
        assert!(totals.shipping.is_zero());
        assert!(totals.tax.is_zero());
        assert_eq!(totals.total.cents(), 5_001);
    }
}
