//! Titled document sections.

use crate::filter::AncillaryFilter;
use serde::{Deserialize, Serialize};

/// A titled region of a document body.
///
/// Sections retain their paragraphs uncensored for structural
/// fidelity. Callers needing clean content use [`Section::filtered`]
/// or re-run an [`AncillaryFilter`] themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title ("Untitled Section" when the source carries none)
    pub title: String,

    /// Cleaned paragraphs in document order
    pub paragraphs: Vec<String>,

    /// Single-space concatenation of the paragraphs
    pub content_flat: String,
}

impl Section {
    /// Create a section, deriving the flattened content.
    pub fn new(title: impl Into<String>, paragraphs: Vec<String>) -> Self {
        let content_flat = paragraphs.join(" ");
        Self {
            title: title.into(),
            paragraphs,
            content_flat,
        }
    }

    /// Check if the section holds no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get this section's paragraphs with ancillary content removed.
    pub fn filtered(&self, filter: &AncillaryFilter) -> Vec<String> {
        filter.apply(self.paragraphs.clone())
    }
}
