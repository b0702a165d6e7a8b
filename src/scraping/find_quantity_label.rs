use regex::Regex;
use scraper::{ElementRef, Html};

use crate::scraping::element_text::label_text;
use crate::scraping::following_elements::following_elements;

/// How far past the candidate the label scan looks, in elements.
pub const QUANTITY_SCAN_WINDOW: usize = 40;

/// Fallback quantity lookup for candidates whose own text carries no
/// quantity: the first span following the candidate in document order whose
/// text holds a number + unit, searched within a bounded window.
pub fn find_quantity_label(document: &Html, candidate: ElementRef) -> String {
    let regex = Regex::new(r"(?i)\d+\s*(?:g|kg|ml|ltr|piece|pack|pouch)").unwrap();

    following_elements(document, candidate)
        .take(QUANTITY_SCAN_WINDOW)
        .filter(|element| element.value().name() == "span")
        .find(|element| regex.is_match(&label_text(*element)))
        .map(label_text)
        .unwrap_or_default()
}
