//! Built-in catalog used when no catalog file can be loaded.

use rust_decimal::Decimal;
use sunny_types::catalog::{CatalogData, FaqEntry, Product};

fn product(id: &str, name: &str, cents: i64, description: &str, tags: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn faq(question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// The shop's standard menu and FAQ list.
pub fn default_catalog_data() -> CatalogData {
    CatalogData {
        products: vec![
            product(
                "classic-lemonade",
                "Classic Lemonade",
                499,
                "Our bestseller, made with fresh-squeezed lemons and cane sugar.",
                &["classic", "original", "bestseller"],
            ),
            product(
                "sugar-free-lemonade",
                "Sugar-Free Lemonade",
                549,
                "All the zing of our classic recipe, sweetened with stevia.",
                &["sugar-free", "diet", "stevia"],
            ),
            product(
                "strawberry-bliss",
                "Strawberry Bliss Lemonade",
                599,
                "Fresh strawberry puree mixed with our classic recipe.",
                &["strawberry", "berry", "fruity"],
            ),
            product(
                "ginger-zing",
                "Ginger Zing Lemonade",
                599,
                "Fresh ginger blended into our lemonade for a spicy kick.",
                &["ginger", "spicy"],
            ),
            product(
                "lavender-dream",
                "Lavender Dream Lemonade",
                649,
                "Floral and refreshing, infused with culinary lavender.",
                &["lavender", "floral", "unique"],
            ),
            product(
                "party-pack",
                "Sunny Party Pack",
                2799,
                "Six bottles of your choice, perfect for gatherings.",
                &["bundle", "party", "value"],
            ),
        ],
        faqs: vec![
            faq(
                "How long does shipping take?",
                "We ship within 2-3 business days. Standard shipping takes 3-5 days.",
            ),
            faq(
                "What is your return policy?",
                "If you're not satisfied, contact us within 7 days for a full refund.",
            ),
            faq(
                "Are your lemonades vegan?",
                "All our lemonades are 100% vegan and plant-based.",
            ),
            faq(
                "How much do your lemonades cost?",
                "Our lemonades range from $4.99 to $27.99 for party packs.",
            ),
        ],
    }
}
