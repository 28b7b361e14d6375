//! Table normalization from `table-wrap` nodes.

use roxmltree::Node;

use super::{collapse_whitespace, text_content};
use crate::model::TableRecord;

/// Convert one `table-wrap` node into a [`TableRecord`].
///
/// Header rows (`thead/tr`) are collected before body rows
/// (`tbody/tr`) into one flat row list; cells are trimmed. Returns
/// `None` when the wrapper yields zero rows.
pub fn normalize_table(wrap: Node) -> Option<TableRecord> {
    let id = wrap.attribute("id").unwrap_or("N/A").to_string();
    let caption = extract_caption(wrap);

    let mut rows: Vec<Vec<String>> = Vec::new();
    collect_rows(wrap, "thead", &mut rows);
    collect_rows(wrap, "tbody", &mut rows);

    if rows.is_empty() {
        return None;
    }
    Some(TableRecord::new(id, caption, rows))
}

fn extract_caption(wrap: Node) -> String {
    let Some(caption) = wrap.children().find(|n| n.has_tag_name("caption")) else {
        return String::new();
    };
    let parts: Vec<String> = caption
        .descendants()
        .filter(|n| n.has_tag_name("p"))
        .map(|p| collapse_whitespace(&text_content(p)))
        .filter(|t| !t.is_empty())
        .collect();
    parts.join(" ").trim().to_string()
}

fn collect_rows(wrap: Node, group: &str, rows: &mut Vec<Vec<String>>) {
    for group_node in wrap.descendants().filter(|n| n.has_tag_name(group)) {
        for tr in group_node.descendants().filter(|n| n.has_tag_name("tr")) {
            let cells: Vec<String> = tr
                .descendants()
                .filter(|n| n.has_tag_name("td") || n.has_tag_name("th"))
                .map(|cell| text_content(cell).trim().to_string())
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
    }
}
