//! Utility functions and helpers.

pub mod console;
pub mod http;
pub mod url;

/// Text content of an element, whitespace-trimmed per text node.
///
/// Each text node is trimmed, empty nodes are dropped and the remainder
/// is concatenated without a separator.
pub fn element_text(element: &scraper::ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_text(html: &str, selector: &str) -> String {
        let document = Html::parse_fragment(html);
        let sel = Selector::parse(selector).unwrap();
        let element = document.select(&sel).next().unwrap();
        element_text(&element)
    }

    #[test]
    fn test_element_text_strips_nodes() {
        assert_eq!(
            first_text("<div class=\"prc\">\n  ₦ 120,000 \n</div>", "div.prc"),
            "₦ 120,000"
        );
    }

    #[test]
    fn test_element_text_joins_nested_nodes() {
        assert_eq!(
            first_text(
                "<div class=\"stars _s\"><div class=\"in\"></div> 4.5 out of 5 <span>(12)</span></div>",
                "div.stars"
            ),
            "4.5 out of 5(12)"
        );
    }

    #[test]
    fn test_element_text_empty() {
        assert_eq!(first_text("<h3 class=\"name\">   </h3>", "h3.name"), "");
    }
}
