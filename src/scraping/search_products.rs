use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::scraping::element_text::collapsed_text;
use crate::scraping::extract_price::extract_price;
use crate::scraping::extract_quantity::extract_quantity;
use crate::scraping::find_quantity_label::find_quantity_label;

const PRODUCT_DETAIL_MARKER: &str = "/pd/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

/// Scans the search results page for the first product card matching the
/// ingredient and returns its name, price and quantity.
///
/// A candidate is any anchor whose href points at a product detail page. Its
/// name must contain every whitespace-separated word of the ingredient,
/// compared in lowercase. Quantity comes from the name when possible and from
/// a nearby label span otherwise; the quantity may end up empty, but a card
/// without a name or price is skipped and the scan moves on.
pub fn search_products(document: &Html, ingredient: &str) -> Option<Product> {
    let link_selector = Selector::parse("a[href]").unwrap();

    let query_words: Vec<String> = ingredient
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    for link in document.select(&link_selector) {
        let href = link.value().attr("href").unwrap_or_default();
        if !href.contains(PRODUCT_DETAIL_MARKER) {
            continue;
        }

        let product_name = collapsed_text(link);
        let name_lower = product_name.to_lowercase();
        if !query_words.iter().all(|word| name_lower.contains(word.as_str())) {
            continue;
        }

        let mut quantity = extract_quantity(&product_name);
        if quantity.is_empty() {
            quantity = find_quantity_label(document, link);
        }
        let price = extract_price(document, link);

        if !product_name.is_empty() && !price.is_empty() {
            return Some(Product {
                name: product_name,
                price,
                quantity,
            });
        }
    }

    None
}
