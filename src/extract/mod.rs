//! Structural extraction from JATS-like XML document trees.

mod jats;
mod table;

pub use jats::JatsExtractor;
pub use table::normalize_table;

/// Concatenated text of a node's descendant text nodes.
pub(crate) fn text_content(node: roxmltree::Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Collapse every whitespace run to a single space and trim.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
