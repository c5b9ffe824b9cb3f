//! HTML to text conversion

use scraper::{Html, Selector};

/// Tags whose entire subtree carries no readable text
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Extract readable text from HTML markup, stripping all tags.
///
/// Tag-soup tolerant: the parser recovers from malformed markup. The output
/// is raw text with single spaces between fragments; final whitespace
/// normalization happens in `ExtractedText`.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    // Prefer <body>, fall back to the whole document
    let body_selector = Selector::parse("body").unwrap();
    let root = document.select(&body_selector).next();

    let parts = match root {
        Some(body) => collect_element_text(body),
        None => collect_element_text(document.root_element()),
    };

    parts.join(" ")
}

/// Recursively collect text fragments, skipping non-content subtrees
fn collect_element_text(element: scraper::ElementRef) -> Vec<String> {
    if SKIP_TAGS.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();

    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            scraper::Node::Element(_) => {
                if let Some(child_el) = scraper::ElementRef::wrap(child) {
                    parts.extend(collect_element_text(child_el));
                }
            }
            _ => {}
        }
    }

    parts
}
