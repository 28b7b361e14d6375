//! Greedy single-pass paragraph segmenter.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::line::{classify, opens_new_block, LineClass};

/// What to do with the current line, decided from one line of
/// lookahead. A blank line always flushes, full stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Blank line: flush the accumulator
    Flush,
    /// Wrapped continuation: append, keep accumulating
    Append,
    /// Sentence end followed by a new-block line: append, then flush
    AppendAndFlush,
}

fn decide(line: &str, next: Option<&str>) -> Step {
    match classify(line) {
        LineClass::Blank => Step::Flush,
        LineClass::SentenceEnd if next.is_some_and(opens_new_block) => Step::AppendAndFlush,
        _ => Step::Append,
    }
}

/// Options for paragraph segmentation.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Minimum trimmed paragraph length; shorter paragraphs are dropped
    pub min_paragraph_len: usize,

    /// Drop paragraphs consisting of a single integer (page numbers)
    pub drop_numeric: bool,

    /// Normalize Unicode to NFC during cleaning
    pub normalize_unicode: bool,
}

impl SegmentOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum paragraph length.
    pub fn with_min_len(mut self, len: usize) -> Self {
        self.min_paragraph_len = len;
        self
    }

    /// Enable or disable page-number dropping.
    pub fn with_drop_numeric(mut self, drop: bool) -> Self {
        self.drop_numeric = drop;
        self
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            min_paragraph_len: 10,
            drop_numeric: true,
            normalize_unicode: true,
        }
    }
}

/// Paragraph segmenter for raw extracted text.
///
/// The heuristic is a greedy single pass with no backtracking and is
/// inherently imprecise for multi-column or figure-heavy layouts.
pub struct Segmenter {
    options: SegmentOptions,
    ws_run: Regex,
    page_number: Regex,
}

impl Segmenter {
    /// Create a segmenter with the given options.
    pub fn new(options: SegmentOptions) -> Self {
        Self {
            options,
            ws_run: Regex::new(r"\s+").unwrap(),
            page_number: Regex::new(r"^\d+$").unwrap(),
        }
    }

    /// Segment raw text into paragraphs.
    ///
    /// A blank line always completes the current paragraph. A line
    /// ending in '.', '?' or '!' whose successor starts with an
    /// uppercase letter, a digit, or a "fig." / "table" prefix also
    /// completes it. Any other line is treated as a wrapped
    /// continuation.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let next = lines.get(i + 1).copied();
            match decide(line, next) {
                Step::Flush => self.flush(&mut current, &mut paragraphs),
                Step::Append => current.push(line.trim()),
                Step::AppendAndFlush => {
                    current.push(line.trim());
                    self.flush(&mut current, &mut paragraphs);
                }
            }
        }
        self.flush(&mut current, &mut paragraphs);

        paragraphs
    }

    fn flush(&self, current: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
        if current.is_empty() {
            return;
        }
        let joined = current.join(" ");
        current.clear();

        let cleaned = self.clean(&joined);
        if self.keep(&cleaned) {
            paragraphs.push(cleaned);
        }
    }

    /// Collapse whitespace runs to single spaces and trim; NFC
    /// normalization first when enabled.
    fn clean(&self, text: &str) -> String {
        let text: String = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };
        self.ws_run.replace_all(text.trim(), " ").into_owned()
    }

    fn keep(&self, paragraph: &str) -> bool {
        if paragraph.chars().count() < self.options.min_paragraph_len {
            return false;
        }
        if self.options.drop_numeric && self.page_number.is_match(paragraph) {
            return false;
        }
        true
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmentOptions::default())
    }
}

/// Segment text with default options.
pub fn segment_paragraphs(text: &str) -> Vec<String> {
    Segmenter::default().segment(text)
}

/// Simple fallback segmentation: split on blank lines only, trim, and
/// drop empties. Useful when the source reliably double-spaces
/// paragraphs and the lookahead heuristic is unwanted.
pub fn split_on_blank_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
