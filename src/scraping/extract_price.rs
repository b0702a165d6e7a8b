use scraper::{ElementRef, Html, Selector};

use crate::scraping::element_text::label_text;
use crate::scraping::following_elements::following_elements;

/// How far past the candidate the pricing scan looks, in elements.
pub const PRICE_SCAN_WINDOW: usize = 120;

const PRICING_CONTAINER_MARKER: &str = "Pricing___StyledDiv";
const PRICING_LABEL_MARKER: &str = "Pricing___StyledLabel";

/// Display price for a candidate: the first pricing container following the
/// candidate in document order, then the first pricing label span inside it.
/// The class names are generated with hashed suffixes, so both lookups match
/// on a stable substring of the class attribute.
pub fn extract_price(document: &Html, candidate: ElementRef) -> String {
    let span_selector = Selector::parse("span").unwrap();

    let container = following_elements(document, candidate)
        .take(PRICE_SCAN_WINDOW)
        .find(|element| {
            element.value().name() == "div" && class_contains(*element, PRICING_CONTAINER_MARKER)
        });

    match container {
        Some(container) => container
            .select(&span_selector)
            .find(|span| class_contains(*span, PRICING_LABEL_MARKER))
            .map(label_text)
            .unwrap_or_default(),
        None => String::new(),
    }
}

fn class_contains(element: ElementRef, marker: &str) -> bool {
    element
        .value()
        .attr("class")
        .map_or(false, |class| class.contains(marker))
}
