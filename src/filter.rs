//! Ancillary section detection and removal.
//!
//! Ancillary sections (references, acknowledgements, appendices, ...)
//! are structurally terminal: they appear only at document end. A
//! single monotonic flag is therefore sufficient; once a terminal
//! marker paragraph is seen, everything after it is dropped.

use regex::RegexSet;

/// Default terminal section markers, matched against the entire
/// trimmed paragraph, case-insensitive.
const DEFAULT_MARKERS: &[&str] = &[
    r"^\s*References?\s*$",
    r"^\s*Bibliography\s*$",
    r"^\s*Literature\s+Cited\s*$",
    r"^\s*Acknowledgement(s)?\s*$",
    r"^\s*Appendix(es)?\s*$",
    r"^\s*Supporting\s+Information\s*$",
    r"^\s*Supplementary\s+Materials?\s*$",
    r"^\s*Note(s)?\s+on\s+Contributor(s)?\s*$",
    r"^\s*Author\s+Contributions?\s*$",
    r"^\s*Funding\s*$",
    r"^\s*Conflicts?\s+of\s+Interest\s*$",
    r"^\s*Data\s+Availability\s+Statement\s*$",
    r"^\s*ORCID\s*$",
];

/// Options for the ancillary filter.
///
/// The marker set is configurable so new journal conventions can be
/// added without touching the filter's control flow.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Full-paragraph regex patterns marking a terminal section
    pub markers: Vec<String>,

    /// Minimum trimmed length for the final cleanup pass; paragraphs
    /// at or below this length are dropped
    pub min_paragraph_len: usize,
}

impl FilterOptions {
    /// Create options with the default marker set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker pattern to the set.
    pub fn with_marker(mut self, pattern: impl Into<String>) -> Self {
        self.markers.push(pattern.into());
        self
    }

    /// Replace the marker set entirely.
    pub fn with_markers<S: Into<String>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        self.markers = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cleanup length threshold.
    pub fn with_min_len(mut self, len: usize) -> Self {
        self.min_paragraph_len = len;
        self
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            min_paragraph_len: 20,
        }
    }
}

/// Removes ancillary sections from a paragraph sequence.
pub struct AncillaryFilter {
    markers: RegexSet,
    min_paragraph_len: usize,
}

impl AncillaryFilter {
    /// Create a filter from options. Invalid marker patterns are
    /// rejected here rather than at match time.
    pub fn new(options: FilterOptions) -> Result<Self, regex::Error> {
        let case_insensitive: Vec<String> =
            options.markers.iter().map(|m| format!("(?i){m}")).collect();
        Ok(Self {
            markers: RegexSet::new(&case_insensitive)?,
            min_paragraph_len: options.min_paragraph_len,
        })
    }

    /// Check whether a paragraph is a terminal section marker.
    pub fn is_marker(&self, paragraph: &str) -> bool {
        self.markers.is_match(paragraph)
    }

    /// Drop everything at and after the first terminal marker, then
    /// run the cleanup pass.
    ///
    /// The output is an order-preserving subsequence of the input, and
    /// the operation is idempotent.
    pub fn apply(&self, paragraphs: Vec<String>) -> Vec<String> {
        let mut in_ancillary = false;
        let kept = paragraphs.into_iter().filter(|p| {
            if self.is_marker(p) {
                in_ancillary = true;
            }
            !in_ancillary
        });

        // Cleanup applies regardless of whether a marker was seen
        kept.filter(|p| self.keep_after_cleanup(p)).collect()
    }

    fn keep_after_cleanup(&self, paragraph: &str) -> bool {
        let trimmed = paragraph.trim();
        if trimmed.chars().count() <= self.min_paragraph_len {
            return false;
        }
        // Digits with an optional trailing period are page/label noise
        !is_numeric_label(trimmed)
    }
}

fn is_numeric_label(text: &str) -> bool {
    let body = text.strip_suffix('.').unwrap_or(text);
    !body.is_empty() && body.chars().all(|c| c.is_ascii_digit())
}

impl Default for AncillaryFilter {
    fn default() -> Self {
        // The built-in marker set is known valid
        Self::new(FilterOptions::default()).unwrap()
    }
}
