//! Product catalog and FAQ types.
//!
//! The catalog is loaded once at startup and never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product on the shop's menu.
///
/// `id` uniquely identifies a product within a catalog. `price` is a
/// currency amount; it is carried as a `Decimal` and written to JSON as a
/// plain number so browser clients can format it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Whether `needle` (already lowercased) occurs in the name, description,
    /// or any tag, ignoring case.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// A frequently asked question and its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// On-disk shape of the catalog file (`data/products.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    pub products: Vec<Product>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::*;

    fn lemonade() -> Product {
        Product {
            id: "classic".to_string(),
            name: "Classic Lemonade".to_string(),
            price: Decimal::from_str("4.99").unwrap(),
            description: "Fresh lemons and cane sugar".to_string(),
            tags: vec!["Bestseller".to_string(), "original".to_string()],
        }
    }

    #[test]
    fn test_product_price_serializes_as_number() {
        let json = serde_json::to_value(lemonade()).unwrap();
        assert_eq!(json["price"], serde_json::json!(4.99));
        assert_eq!(json["tags"][0], "Bestseller");
    }

    #[test]
    fn test_product_deserializes_from_number_price() {
        let json = r#"{"id":"x","name":"X","price":27.99,"description":"d","tags":[]}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::from_str("27.99").unwrap());
    }

    #[test]
    fn test_product_tags_default_to_empty() {
        let json = r#"{"id":"x","name":"X","price":1,"description":"d"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.tags.is_empty());
    }

    #[test]
    fn test_product_matches_name_description_and_tags() {
        let p = lemonade();
        assert!(p.matches("classic"));
        assert!(p.matches("cane"));
        assert!(p.matches("bestseller"));
        assert!(!p.matches("ginger"));
    }

    #[test]
    fn test_catalog_data_faqs_optional() {
        let data: CatalogData = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert!(data.products.is_empty());
        assert!(data.faqs.is_empty());
    }
}
