//! Structural extractor for JATS-like article markup.
//!
//! Walks a parsed document tree and builds one [`DocumentRecord`] per
//! document. Every extraction rule is independently optional: a
//! missing title, abstract or keyword group never fails the document.
//! Only malformed markup is fatal, and then no partial record is
//! returned.

use std::fs;
use std::path::Path;

use log::debug;
use roxmltree::Node;

use super::{collapse_whitespace, text_content, table::normalize_table};
use crate::error::Result;
use crate::filter::AncillaryFilter;
use crate::model::{DocumentRecord, Section, TableRecord};

/// Extracts structured records from JATS-like XML.
pub struct JatsExtractor {
    filter: AncillaryFilter,
}

impl JatsExtractor {
    /// Create an extractor with the default ancillary filter.
    pub fn new() -> Self {
        Self {
            filter: AncillaryFilter::default(),
        }
    }

    /// Create an extractor with a custom ancillary filter.
    pub fn with_filter(filter: AncillaryFilter) -> Self {
        Self { filter }
    }

    /// Extract a record from an XML string. `source` is recorded as
    /// the document's `file_path`.
    pub fn extract_str(&self, xml: &str, source: impl Into<String>) -> Result<DocumentRecord> {
        let tree = roxmltree::Document::parse(xml)?;

        let mut record = DocumentRecord::new(source);
        record.title = extract_title(&tree);
        record.authors = extract_authors(&tree);
        record.abstract_text = extract_abstract(&tree);
        record.keywords = extract_keywords(&tree);

        let (sections, flat) = extract_sections(&tree);
        record.sections = sections;
        record.body_paragraphs = self.filter.apply(flat);
        record.tables_data = extract_tables(&tree);

        debug!(
            "{}: {} sections, {} body paragraphs, {} tables",
            record.file_path,
            record.sections.len(),
            record.body_paragraphs.len(),
            record.tables_data.len()
        );
        Ok(record)
    }

    /// Extract a record from an XML file on disk.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<DocumentRecord> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path)?;
        self.extract_str(&xml, path.display().to_string())
    }
}

impl Default for JatsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_title(tree: &roxmltree::Document) -> Option<String> {
    find_element_text(tree, "article-title").or_else(|| find_element_text(tree, "title"))
}

fn find_element_text(tree: &roxmltree::Document, tag: &str) -> Option<String> {
    tree.descendants()
        .find(|n| n.has_tag_name(tag))
        .map(|n| collapse_whitespace(&text_content(n)))
        .filter(|t| !t.is_empty())
}

fn extract_authors(tree: &roxmltree::Document) -> Vec<String> {
    let mut entries: Vec<Node> = tree
        .descendants()
        .filter(|n| n.has_tag_name("contrib") && n.attribute("contrib-type") == Some("author"))
        .filter_map(|contrib| contrib.children().find(|n| n.has_tag_name("name")))
        .collect();

    if entries.is_empty() {
        entries = tree
            .descendants()
            .filter(|n| n.has_tag_name("author"))
            .collect();
    }

    entries.into_iter().filter_map(resolve_author).collect()
}

/// Prefer "GivenNames Surname" when both subfields are present; fall
/// back to the element's raw text content.
fn resolve_author(entry: Node) -> Option<String> {
    let surname = child_text(entry, "surname");
    let given = child_text(entry, "given-names");
    match (given, surname) {
        (Some(given), Some(surname)) => Some(format!("{given} {surname}")),
        _ => {
            let raw = collapse_whitespace(&text_content(entry));
            (!raw.is_empty()).then_some(raw)
        }
    }
}

fn child_text(node: Node, tag: &str) -> Option<String> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .map(|n| collapse_whitespace(&text_content(n)))
        .filter(|t| !t.is_empty())
}

fn extract_abstract(tree: &roxmltree::Document) -> Option<String> {
    let abstracts: Vec<Node> = tree
        .descendants()
        .filter(|n| n.has_tag_name("abstract"))
        .collect();
    if abstracts.is_empty() {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    for abs in &abstracts {
        parts.extend(
            abs.descendants()
                .filter(|n| n.has_tag_name("p"))
                .map(|p| collapse_whitespace(&text_content(p)))
                .filter(|t| !t.is_empty()),
        );
    }
    // An abstract without <p> children still contributes its own text
    if parts.is_empty() {
        parts.extend(
            abstracts
                .iter()
                .map(|abs| collapse_whitespace(&text_content(*abs)))
                .filter(|t| !t.is_empty()),
        );
    }

    let joined = parts.join(" ");
    (!joined.is_empty()).then_some(joined)
}

fn extract_keywords(tree: &roxmltree::Document) -> Vec<String> {
    tree.descendants()
        .filter(|n| {
            n.has_tag_name("kwd") && n.parent().is_some_and(|p| p.has_tag_name("kwd-group"))
        })
        .map(|n| text_content(n).trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Walk `body//sec` in document order. Each section captures the
/// paragraphs whose nearest enclosing `sec` is that section, excluding
/// anything under a `ref-list`. Sections left with zero paragraphs are
/// discarded; all captured paragraphs also feed one flat list.
fn extract_sections(tree: &roxmltree::Document) -> (Vec<Section>, Vec<String>) {
    let mut sections = Vec::new();
    let mut flat = Vec::new();

    for sec in tree
        .descendants()
        .filter(|n| n.has_tag_name("sec") && in_body(*n))
    {
        let title = child_text(sec, "title").unwrap_or_else(|| "Untitled Section".to_string());

        let paragraphs: Vec<String> = sec
            .descendants()
            .filter(|n| n.has_tag_name("p"))
            .filter(|p| nearest_section(*p) == Some(sec))
            .filter(|p| !p.ancestors().any(|a| a.has_tag_name("ref-list")))
            .map(|p| collapse_whitespace(&text_content(p)))
            .filter(|t| !t.is_empty())
            .collect();

        flat.extend(paragraphs.iter().cloned());
        if !paragraphs.is_empty() {
            sections.push(Section::new(title, paragraphs));
        }
    }

    (sections, flat)
}

fn in_body(node: Node) -> bool {
    node.ancestors().skip(1).any(|a| a.has_tag_name("body"))
}

fn nearest_section<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.ancestors().skip(1).find(|a| a.has_tag_name("sec"))
}

fn extract_tables(tree: &roxmltree::Document) -> Vec<TableRecord> {
    tree.descendants()
        .filter(|n| n.has_tag_name("table-wrap"))
        .filter_map(normalize_table)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const MINIMAL: &str = r#"<article>
        <front>
            <article-meta>
                <title-group><article-title>PLGA Nanoparticles for Drug Delivery</article-title></title-group>
                <contrib-group>
                    <contrib contrib-type="author"><name><surname>Chen</surname><given-names>Li</given-names></name></contrib>
                    <contrib contrib-type="author"><name><surname>Wang</surname><given-names>Jian</given-names></name></contrib>
                </contrib-group>
                <kwd-group><kwd>PLGA</kwd><kwd>Nanoparticles</kwd></kwd-group>
            </article-meta>
        </front>
        <body>
            <sec id="s1"><title>1. Introduction</title>
                <p>Nanotechnology offers novel approaches for targeted drug delivery systems.</p>
            </sec>
        </body>
    </article>"#;

    #[test]
    fn test_title_and_authors() {
        let record = JatsExtractor::new().extract_str(MINIMAL, "minimal.xml").unwrap();
        assert_eq!(
            record.title.as_deref(),
            Some("PLGA Nanoparticles for Drug Delivery")
        );
        assert_eq!(record.authors, vec!["Li Chen", "Jian Wang"]);
        assert_eq!(record.keywords, vec!["PLGA", "Nanoparticles"]);
    }

    #[test]
    fn test_missing_abstract_is_not_an_error() {
        let record = JatsExtractor::new().extract_str(MINIMAL, "minimal.xml").unwrap();
        assert!(record.abstract_text.is_none());
    }

    #[test]
    fn test_malformed_xml_is_fatal() {
        let result = JatsExtractor::new().extract_str("<article><sec></article>", "broken.xml");
        assert!(matches!(result, Err(Error::MalformedXml(_))));
    }

    #[test]
    fn test_title_fallback_to_plain_title() {
        let xml = "<article><front><title>A Plain Title Element</title></front></article>";
        let record = JatsExtractor::new().extract_str(xml, "t.xml").unwrap();
        assert_eq!(record.title.as_deref(), Some("A Plain Title Element"));
    }

    #[test]
    fn test_author_raw_text_fallback() {
        let xml = r#"<article><front>
            <author>  Maria  del Carmen  </author>
        </front></article>"#;
        let record = JatsExtractor::new().extract_str(xml, "a.xml").unwrap();
        assert_eq!(record.authors, vec!["Maria del Carmen"]);
    }

    #[test]
    fn test_abstract_paragraphs_joined() {
        let xml = r#"<article><front><abstract>
            <p>First  abstract
            paragraph.</p>
            <p>Second abstract paragraph.</p>
        </abstract></front></article>"#;
        let record = JatsExtractor::new().extract_str(xml, "ab.xml").unwrap();
        assert_eq!(
            record.abstract_text.as_deref(),
            Some("First abstract paragraph. Second abstract paragraph.")
        );
    }

    #[test]
    fn test_abstract_without_paragraph_children() {
        let xml = "<article><front><abstract>Inline abstract text.</abstract></front></article>";
        let record = JatsExtractor::new().extract_str(xml, "ab.xml").unwrap();
        assert_eq!(record.abstract_text.as_deref(), Some("Inline abstract text."));
    }

    #[test]
    fn test_untitled_section_default() {
        let xml = r#"<article><body>
            <sec><p>Paragraph in a section that carries no title element.</p></sec>
        </body></article>"#;
        let record = JatsExtractor::new().extract_str(xml, "s.xml").unwrap();
        assert_eq!(record.sections.len(), 1);
        assert_eq!(record.sections[0].title, "Untitled Section");
    }

    #[test]
    fn test_empty_section_discarded() {
        let xml = r#"<article><body>
            <sec><title>Empty</title></sec>
            <sec><title>Kept</title><p>Some real section paragraph content.</p></sec>
        </body></article>"#;
        let record = JatsExtractor::new().extract_str(xml, "s.xml").unwrap();
        assert_eq!(record.sections.len(), 1);
        assert_eq!(record.sections[0].title, "Kept");
    }

    #[test]
    fn test_nested_sections_do_not_duplicate_paragraphs() {
        let xml = r#"<article><body>
            <sec><title>Parent</title>
                <p>Paragraph directly inside the parent section body.</p>
                <sec><title>Child</title>
                    <p>Paragraph belonging only to the child section.</p>
                </sec>
            </sec>
        </body></article>"#;
        let record = JatsExtractor::new().extract_str(xml, "n.xml").unwrap();
        assert_eq!(record.sections.len(), 2);
        assert_eq!(record.sections[0].paragraphs.len(), 1);
        assert_eq!(record.sections[1].paragraphs.len(), 1);
        assert_eq!(record.body_paragraphs.len(), 2);
    }

    #[test]
    fn test_ref_list_paragraphs_excluded() {
        let xml = r#"<article><body>
            <sec><title>Discussion</title>
                <p>Substantive discussion paragraph with enough length.</p>
                <ref-list><p>Author A. et al., J. Science, 2020, citation text.</p></ref-list>
            </sec>
        </body></article>"#;
        let record = JatsExtractor::new().extract_str(xml, "r.xml").unwrap();
        assert_eq!(record.sections[0].paragraphs.len(), 1);
        assert!(record.sections[0].paragraphs[0].starts_with("Substantive"));
    }

    #[test]
    fn test_sections_outside_body_ignored() {
        let xml = r#"<article>
            <back><sec><title>App</title><p>Appendix paragraph outside the body.</p></sec></back>
        </article>"#;
        let record = JatsExtractor::new().extract_str(xml, "b.xml").unwrap();
        assert!(record.sections.is_empty());
        assert!(record.body_paragraphs.is_empty());
    }
}
