use colored::Colorize;
use reqwest::Client;
use scraper::Html;
use serde_json::{json, Value};

use crate::bigbasket::fetch_search_results::fetch_search_results;
use crate::config::config::AppConfig;
use crate::scraping::search_products::search_products;
use crate::storage::save_result::save_result;

/// Status code and JSON body of one ingredient lookup.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// Looks up an ingredient on the search page and reports the first matching
/// product. A missing or blank name is a client error. A page that cannot be
/// fetched is handled as a page with no matches. On a match the product is
/// saved to the store before the response goes out, and a store failure is
/// logged without changing the response.
pub async fn ingredient_api(
    config: &AppConfig,
    client: &Client,
    name: Option<&str>,
) -> ApiResponse {
    let ingredient = match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(ingredient) => ingredient,
        None => {
            return ApiResponse {
                status: 400,
                body: json!({
                    "error": "Please provide an ingredient name using the 'name' query parameter."
                }),
            }
        }
    };

    let page = match fetch_search_results(client, &config.search, ingredient).await {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error fetching search results: {:#}", e);
            String::new()
        }
    };

    let document = Html::parse_document(&page);
    match search_products(&document, ingredient) {
        Some(product) => {
            if let Err(e) = save_result(&config.store.file, &product) {
                eprintln!("{} {:#}", "Error writing to store:".red(), e);
            }
            ApiResponse {
                status: 200,
                body: json!({
                    "name": product.name,
                    "price": product.price,
                    "quantity": product.quantity,
                }),
            }
        }
        None => ApiResponse {
            status: 404,
            body: json!({ "error": format!("No products found for '{}'", ingredient) }),
        },
    }
}
