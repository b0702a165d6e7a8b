use scraper::ElementRef;

/// Visible text of an element with inter-element whitespace collapsed to
/// single spaces and leading/trailing whitespace trimmed.
pub fn collapsed_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of a small label element: segments trimmed and concatenated.
pub fn label_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    fn first<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn collapses_inter_element_whitespace() {
        let document =
            Html::parse_document("<a>  Green \n <b>Apple</b>   <span>1kg</span> </a>");
        assert_eq!(collapsed_text(first(&document, "a")), "Green Apple 1kg");
    }

    #[test]
    fn collapsed_text_of_empty_element_is_empty() {
        let document = Html::parse_document("<a href=\"/pd/9\"> </a>");
        assert_eq!(collapsed_text(first(&document, "a")), "");
    }

    #[test]
    fn label_text_joins_segments_without_separator() {
        let document = Html::parse_document("<span><i>₹</i> 120 </span>");
        assert_eq!(label_text(first(&document, "span")), "₹120");
    }

    #[test]
    fn label_text_keeps_inner_spacing_of_a_single_segment() {
        let document = Html::parse_document("<span> 500 g </span>");
        assert_eq!(label_text(first(&document, "span")), "500 g");
    }
}
