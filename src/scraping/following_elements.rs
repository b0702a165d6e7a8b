use scraper::{ElementRef, Html};

/// Every element strictly after `element` in document order (pre-order walk,
/// so the element's own descendants come first, then later siblings and the
/// rest of the document).
pub fn following_elements<'a>(
    document: &'a Html,
    element: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> {
    let start = element.id();

    document
        .root_element()
        .descendants()
        .skip_while(move |node| node.id() != start)
        .skip(1)
        .filter_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use scraper::Selector;

    use super::*;

    fn tag_names(document: &Html, from: &str) -> Vec<String> {
        let selector = Selector::parse(from).unwrap();
        let element = document.select(&selector).next().unwrap();
        following_elements(document, element)
            .map(|el| el.value().name().to_string())
            .collect()
    }

    #[test]
    fn walks_descendants_then_later_elements() {
        let document =
            Html::parse_document("<div><p>x</p></div><span>y</span><em>z</em>");
        assert_eq!(tag_names(&document, "div"), vec!["p", "span", "em"]);
    }

    #[test]
    fn excludes_the_element_itself_and_everything_before() {
        let document =
            Html::parse_document("<div><p>x</p></div><span>y</span><em>z</em>");
        assert_eq!(tag_names(&document, "span"), vec!["em"]);
    }

    #[test]
    fn empty_after_the_last_element() {
        let document = Html::parse_document("<div><p>x</p></div><span>y</span>");
        assert_eq!(tag_names(&document, "span"), Vec::<String>::new());
    }
}
