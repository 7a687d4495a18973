//! HTML → ordered plain-text blocks.

use scraper::{ElementRef, Html, Selector};

/// Structural marker the progress page has carried so far.
const CONTENT_MARKER: &str = "div.col-lg-9.pt-lg-3";

/// Block-level elements worth emitting as standalone lines.
const BLOCK_ELEMENTS: [&str; 8] = ["h1", "h2", "h3", "h4", "h5", "h6", "p", "li"];

/// Extracts the page's textual content as an ordered sequence of blocks.
///
/// Scope selection falls back when the page drifts: the known content
/// marker first, then `main`, then `body`. Headings and paragraphs come
/// out as-is, list items with a "• " prefix, all whitespace-normalized.
/// An empty result means the page genuinely had no block content.
#[must_use]
pub fn extract_content(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let scope = select_scope(&document);
    let Some(scope) = scope else {
        return Vec::new();
    };

    let Ok(blocks) = Selector::parse(&BLOCK_ELEMENTS.join(", ")) else {
        return Vec::new();
    };

    scope
        .select(&blocks)
        .filter(|el| !nested_in_block(*el))
        .filter_map(format_block)
        .collect()
}

fn select_scope(document: &Html) -> Option<ElementRef<'_>> {
    for selector_str in [CONTENT_MARKER, "main", "body"] {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(el) = document.select(&selector).next() {
                return Some(el);
            }
        }
    }
    None
}

/// Whether this element sits inside another block element.
///
/// A `p` inside an `li` would otherwise be emitted twice, once on its
/// own and once as part of the list item's text.
fn nested_in_block(el: ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| BLOCK_ELEMENTS.contains(&ancestor.value().name()))
}

fn format_block(el: ElementRef<'_>) -> Option<String> {
    let text = normalize_whitespace(&el.text().collect::<String>());
    if text.is_empty() {
        return None;
    }
    if el.value().name() == "li" {
        Some(format!("• {text}"))
    } else {
        Some(text)
    }
}

pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_blocks_from_marker_div_in_order() {
        let html = r#"
            <html><body>
              <nav><p>Skip this navigation</p></nav>
              <div class="col-lg-9 pt-lg-3">
                <h2>Debris removal</h2>
                <p>Phase 1   is
                   complete.</p>
                <ul><li>Zone A cleared</li><li>Zone B pending</li></ul>
              </div>
            </body></html>"#;
        let content = extract_content(html);
        assert_eq!(
            content,
            vec![
                "Debris removal",
                "Phase 1 is complete.",
                "• Zone A cleared",
                "• Zone B pending",
            ]
        );
    }

    #[test]
    fn falls_back_to_main_when_marker_is_missing() {
        let html = r#"
            <html><body>
              <header><p>Site chrome</p></header>
              <main><p>Recovery continues.</p></main>
            </body></html>"#;
        assert_eq!(extract_content(html), vec!["Recovery continues."]);
    }

    #[test]
    fn falls_back_to_body_as_last_resort() {
        let html = "<html><body><p>Bare text page.</p></body></html>";
        assert_eq!(extract_content(html), vec!["Bare text page."]);
    }

    #[test]
    fn empty_page_yields_empty_content_not_error() {
        assert!(extract_content("<html><body></body></html>").is_empty());
        assert!(extract_content("").is_empty());
    }

    #[test]
    fn paragraph_inside_list_item_is_not_duplicated() {
        let html = r#"
            <main><ul><li><p>Only once</p></li></ul></main>"#;
        assert_eq!(extract_content(html), vec!["• Only once"]);
    }
}
