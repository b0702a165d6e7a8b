use anyhow::{Context, Result};
use reqwest::Client;
use urlencoding::encode;

use crate::config::config::SearchConfig;

/// Fills the `{query}` placeholder of the configured search URL with the
/// percent-encoded ingredient.
pub fn build_search_url(url_template: &str, ingredient: &str) -> String {
    url_template.replace("{query}", &encode(ingredient))
}

/// Fetches the search results page for an ingredient and returns its HTML.
pub async fn fetch_search_results(
    client: &Client,
    search: &SearchConfig,
    ingredient: &str,
) -> Result<String> {
    let search_url = build_search_url(&search.url_template, ingredient);

    let response = client
        .get(&search_url)
        .header(reqwest::header::USER_AGENT, search.user_agent.as_str())
        .send()
        .await
        .context("Failed to fetch search results")?
        .error_for_status()
        .context("Search request returned an error status")?;

    response
        .text()
        .await
        .context("Failed to read search results body")
}
