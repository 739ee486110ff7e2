use scraper::{Html, Selector};

/// Markup pattern identifying a headline on the CNN front page.
pub const HEADLINE_TAG: &str = "span";
pub const HEADLINE_ATTR: &str = "data-editable";
pub const HEADLINE_VALUE: &str = "headline";

/// Extract the trimmed text of every headline element, in document order.
///
/// Each element's text nodes are concatenated, then leading/trailing
/// whitespace is stripped; internal whitespace is left alone. A page with
/// no matching elements yields an empty vector, not an error.
pub fn extract_headlines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector_str = format!("{HEADLINE_TAG}[{HEADLINE_ATTR}=\"{HEADLINE_VALUE}\"]");
    let selector = Selector::parse(&selector_str).expect("valid selector");

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_trims_and_keeps_document_order() {
        let html = r#"
        <html><body>
        <div class="zone">
            <span data-editable="headline">A</span>
            <span data-editable="headline"> B </span>
            <span data-editable="headline">C</span>
        </div>
        </body></html>
        "#;

        let headlines = extract_headlines(html);
        assert_eq!(headlines, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_extract_preserves_internal_whitespace() {
        let html = r#"<span data-editable="headline">  Breaking:  markets  fall  </span>"#;

        let headlines = extract_headlines(html);
        assert_eq!(headlines, vec!["Breaking:  markets  fall"]);
    }

    #[test]
    fn test_extract_concatenates_nested_text() {
        let html = r#"<span data-editable="headline">Senate <em>finally</em> votes</span>"#;

        let headlines = extract_headlines(html);
        assert_eq!(headlines, vec!["Senate finally votes"]);
    }

    #[test]
    fn test_extract_ignores_near_misses() {
        // Wrong tag, wrong attribute value, and missing attribute all skip.
        let html = r#"
        <div data-editable="headline">not a span</div>
        <span data-editable="subtext">wrong value</span>
        <span>no attribute</span>
        <span data-editable="headline">Only match</span>
        "#;

        let headlines = extract_headlines(html);
        assert_eq!(headlines, vec!["Only match"]);
    }

    #[test]
    fn test_extract_empty_page_yields_empty_sequence() {
        let headlines = extract_headlines("<html><body><p>nothing here</p></body></html>");
        assert!(headlines.is_empty());
    }
}
