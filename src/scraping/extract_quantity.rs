use regex::Regex;

/// Extracts a package-size token (integer + unit) from product text.
/// The first match is returned verbatim, original casing and spacing kept.
/// Units are matched as whole words, so "5kgsomething" yields nothing.
pub fn extract_quantity(text: &str) -> String {
    let regex = Regex::new(
        r"(?i)\b\d+\s*(?:g|gm|gms|kg|kgs|litre|ltr|ml|count|piece|pc|pack|pouch|tin|bottle|carton|bag|dozen)\b",
    )
    .unwrap();

    regex
        .find(text)
        .map(|quantity| quantity.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_unit_with_space() {
        assert_eq!(extract_quantity("Amul Butter 500 g Pack"), "500 g");
    }

    #[test]
    fn finds_unit_without_space() {
        assert_eq!(extract_quantity("Toor Dal 1kg"), "1kg");
    }

    #[test]
    fn empty_when_no_quantity_present() {
        assert_eq!(extract_quantity("Fresh Coriander"), "");
    }

    #[test]
    fn matches_on_word_boundaries() {
        assert_eq!(extract_quantity("Background 5kg"), "5kg");
        assert_eq!(extract_quantity("5kgsomething"), "");
    }

    #[test]
    fn keeps_original_casing() {
        assert_eq!(extract_quantity("Aashirvaad Atta 5KG"), "5KG");
        assert_eq!(extract_quantity("Milk 500ML Pouch"), "500ML");
    }

    #[test]
    fn prefers_the_longest_unit_spelling_at_a_position() {
        assert_eq!(extract_quantity("Sugar 500 gms loose"), "500 gms");
    }

    #[test]
    fn returns_the_first_of_several_quantities() {
        assert_eq!(extract_quantity("Eggs 6 piece tray of 2 dozen"), "6 piece");
    }
}
