//! Top-level document record.

use super::{Section, TableRecord};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The structured record produced for one input document.
///
/// One instance is built per document by a single extraction call and
/// is fully owned by the caller once returned. Optional fields are
/// left empty when the source lacks them; an empty field is never an
/// error. `body_paragraphs` never includes content originating in a
/// detected ancillary section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Path of the source document
    pub file_path: String,

    /// Article title
    pub title: Option<String>,

    /// Authors as "Given Surname" strings, document order
    pub authors: Vec<String>,

    /// Abstract text, whitespace-collapsed
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Keywords, order preserved, duplicates retained
    pub keywords: Vec<String>,

    /// Flattened body paragraphs, ancillary-filtered
    pub body_paragraphs: Vec<String>,

    /// Structured sections, retained uncensored
    pub sections: Vec<Section>,

    /// Normalized tables
    pub tables_data: Vec<TableRecord>,
}

impl DocumentRecord {
    /// Create an empty record for the given source path.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            title: None,
            authors: Vec::new(),
            abstract_text: None,
            keywords: Vec::new(),
            body_paragraphs: Vec::new(),
            sections: Vec::new(),
            tables_data: Vec::new(),
        }
    }

    /// Check whether extraction found any usable content.
    pub fn is_empty(&self) -> bool {
        self.body_paragraphs.is_empty() && self.sections.is_empty() && self.tables_data.is_empty()
    }

    /// Get the plain-text payload handed to a downstream extraction
    /// collaborator: body paragraphs followed by table grids, joined
    /// by blank lines.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<&str> = self.body_paragraphs.iter().map(String::as_str).collect();
        for table in &self.tables_data {
            parts.push(table.text_representation.as_str());
        }
        parts.join("\n\n")
    }

    /// Serialize the record to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };
        json.map_err(|e| crate::error::Error::Extraction(format!("JSON serialization: {e}")))
    }
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed with indentation
    #[default]
    Pretty,
    /// Compact single-line
    Compact,
}
