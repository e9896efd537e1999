//! # Catalog
//!
//! The in-memory product collection the storefront browses and searches.
//!
//! ## Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::sample()        built-in sample data (4 products)             │
//! │  Catalog::from_products   any Vec<Product>, ids must be unique          │
//! │  Catalog::from_json       JSON array of products, ids must be unique    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Order is significant: search results and shelves list products in the
//! order the source supplied them.

use serde::Serialize;

use crate::error::CoreResult;
use crate::search;
use crate::types::Product;
use crate::validation::validate_unique_ids;

/// Shelf categories shown on the home page, in display order.
pub const HOME_SHELVES: &[&str] = &["tshirts", "jeans", "dresses", "jackets", "accessories", "shoes"];

/// An ordered, immutable product collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

/// One category row on the home page.
///
/// Empty shelves are kept so the UI can show "No products available in this
/// category yet".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShelf<'a> {
    pub category: &'a str,
    pub products: Vec<&'a Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product ids.
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        validate_unique_ids(&products)?;
        Ok(Catalog { products })
    }

    /// Parses a JSON array of products.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::catalog::Catalog;
    ///
    /// let json = r#"[{"id":"9","name":"Wool Scarf","priceCents":1500,"category":"accessories"}]"#;
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// The storefront's built-in sample catalog.
    pub fn sample() -> Self {
        Catalog {
            products: sample_products(),
        }
    }

    /// All products, in catalog order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Free-text search; see [`search::filter`].
    pub fn filter(&self, query: &str) -> Vec<&Product> {
        search::filter(&self.products, query)
    }

    /// Products whose category is exactly `category`.
    ///
    /// Unlike [`Catalog::filter`], this is an exact, case-sensitive match.
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// One shelf per requested category, in the requested order.
    pub fn shelves<'a>(&'a self, categories: &[&'a str]) -> Vec<CategoryShelf<'a>> {
        categories
            .iter()
            .map(|&category| CategoryShelf {
                category,
                products: self.in_category(category),
            })
            .collect()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Organic Cotton Basic Tee".to_string(),
            price_cents: 2499,
            original_price_cents: Some(2999),
            image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop".to_string(),
            rating: 4.5,
            reviews: 128,
            category: "tshirts".to_string(),
            colors: strings(&["#000000", "#FFFFFF", "#8B4513", "#228B22"]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            is_new: true,
            is_sale: true,
        },
        Product {
            id: "2".to_string(),
            name: "Vintage Band Graphic Tee".to_string(),
            price_cents: 3299,
            original_price_cents: None,
            image: "https://images.unsplash.com/photo-1583743814966-8936f37f4036?w=400&h=400&fit=crop".to_string(),
            rating: 4.8,
            reviews: 89,
            category: "tshirts".to_string(),
            colors: strings(&["#000000", "#8B4513", "#FFFFFF"]),
            sizes: strings(&["S", "M", "L", "XL"]),
            is_new: true,
            is_sale: false,
        },
        Product {
            id: "3".to_string(),
            name: "High-Waisted Mom Jeans".to_string(),
            price_cents: 6899,
            original_price_cents: Some(7999),
            image: "https://images.unsplash.com/photo-1541840031508-326b77c9a17e?w=400&h=400&fit=crop".to_string(),
            rating: 4.7,
            reviews: 156,
            category: "jeans".to_string(),
            colors: strings(&["#4169E1", "#000080", "#8B4513"]),
            sizes: strings(&["24", "26", "28", "30", "32"]),
            is_new: false,
            is_sale: true,
        },
        Product {
            id: "4".to_string(),
            name: "Flowy Summer Midi Dress".to_string(),
            price_cents: 8999,
            original_price_cents: None,
            image: "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=400&h=400&fit=crop".to_string(),
            rating: 4.6,
            reviews: 203,
            category: "dresses".to_string(),
            colors: strings(&["#FFFFFF", "#FFB6C1", "#90EE90", "#8B4513"]),
            sizes: strings(&["XS", "S", "M", "L"]),
            is_new: true,
            is_sale: false,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 4);
        assert!(validate_unique_ids(catalog.products()).is_ok());
        assert_eq!(catalog.get("3").map(|p| p.price_cents), Some(6899));
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_from_products_rejects_duplicates() {
        let mut products = Catalog::sample().products().to_vec();
        products.push(products[0].clone());

        let err = Catalog::from_products(products).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r##"[
            {"id":"a","name":"Denim Jacket","priceCents":9900,"category":"jackets",
             "sizes":["M","L"],"colors":["#000080"],"isNew":true},
            {"id":"b","name":"Canvas Tote","priceCents":1800,"category":"accessories"}
        ]"##;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.products()[0].is_new);
        assert_eq!(catalog.products()[1].default_size(), "M");

        assert!(matches!(
            Catalog::from_json("{"),
            Err(CoreError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(Catalog::sample().categories(), vec!["tshirts", "jeans", "dresses"]);
    }

    #[test]
    fn test_in_category_is_exact() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.in_category("tshirts").len(), 2);
        assert!(catalog.in_category("TShirts").is_empty());
        assert!(catalog.in_category("tshirt").is_empty());
        assert!(catalog.in_category("shoes").is_empty());
    }

    #[test]
    fn test_home_shelves_keep_empty_categories() {
        let catalog = Catalog::sample();
        let shelves = catalog.shelves(HOME_SHELVES);

        assert_eq!(shelves.len(), 6);
        assert_eq!(shelves[0].category, "tshirts");
        assert_eq!(shelves[0].products.len(), 2);
        assert_eq!(shelves[1].products.len(), 1);
        assert_eq!(shelves[2].products.len(), 1);
        assert!(shelves[3..].iter().all(|s| s.products.is_empty()));
    }

    #[test]
    fn test_catalog_filter_delegates_to_search() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.filter("dress").len(), 1);
        assert_eq!(catalog.filter("").len(), 4);
    }
}
