//! HTML markup stripping

use scraper::{Html, Node};

/// Elements whose text never reaches the output
const HIDDEN_ELEMENTS: &[&str] = &["script", "style"];

/// Strip markup from each document, keeping order and count
pub fn strip_markup<S: AsRef<str>>(documents: &[S]) -> Vec<String> {
    documents
        .iter()
        .map(|doc| strip_markup_document(doc.as_ref()))
        .collect()
}

/// Visible text of one HTML document
///
/// Text nodes are trimmed and joined with single spaces; empty nodes are
/// dropped. Broken markup is recovered by the HTML5 parser, never rejected.
pub fn strip_markup_document(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut parts: Vec<&str> = Vec::new();

    for node in fragment.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}
