//! # artext
//!
//! Scientific-article text normalization and structured extraction.
//!
//! This library turns article documents into structured records
//! suitable for downstream automated information extraction (for
//! example, feeding a language model). It covers two input shapes:
//!
//! - **raw extracted text** (already pulled out of a PDF or HTML page
//!   by an external extractor): heuristic paragraph segmentation plus
//!   ancillary-section removal;
//! - **JATS-like XML**: structural extraction of title, authors,
//!   abstract, keywords, titled sections, and tables.
//!
//! ## Quick Start
//!
//! ```no_run
//! use artext::{extract_file, JsonFormat};
//!
//! fn main() -> artext::Result<()> {
//!     let record = extract_file("article.xml")?;
//!     println!("{}", record.to_json(JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Raw text pipeline
//!
//! ```
//! use artext::paragraphs_from_text;
//!
//! let text = "Intro sentence about nanoparticle synthesis methods.\n\nReferences\n\nAuthor A. 2020.";
//! let paragraphs = paragraphs_from_text(text);
//! assert_eq!(paragraphs.len(), 1);
//! ```
//!
//! The pipeline is synchronous and holds no process-wide state; each
//! call is a pure function from input document to record. Documents
//! are independent, so batches can run in parallel (see
//! [`extract_batch`]).

pub mod error;
pub mod extract;
pub mod filter;
pub mod model;
pub mod segment;

pub use error::{Error, Result};
pub use extract::JatsExtractor;
pub use filter::{AncillaryFilter, FilterOptions};
pub use model::{DocumentRecord, JsonFormat, Section, TableRecord};
pub use segment::{segment_paragraphs, split_on_blank_lines, SegmentOptions, Segmenter};

use std::path::{Path, PathBuf};

use log::warn;
use rayon::prelude::*;

/// Extract a structured record from a JATS-like XML file.
///
/// # Example
///
/// ```no_run
/// let record = artext::extract_file("article.xml").unwrap();
/// println!("{} sections", record.sections.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentRecord> {
    JatsExtractor::new().extract_file(path)
}

/// Extract a structured record from an XML string. `source` is
/// recorded as the document's `file_path`.
pub fn extract_str(xml: &str, source: impl Into<String>) -> Result<DocumentRecord> {
    JatsExtractor::new().extract_str(xml, source)
}

/// Run the segmenter → ancillary filter chain over a raw text blob.
///
/// This is the path for text already extracted from PDF/HTML by an
/// external collaborator.
pub fn paragraphs_from_text(text: &str) -> Vec<String> {
    let paragraphs = segment_paragraphs(text);
    AncillaryFilter::default().apply(paragraphs)
}

/// Extract many XML files in parallel.
///
/// Failures are local to one document and never abort siblings; each
/// failed path is logged and returned alongside its error.
pub fn extract_batch<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<(PathBuf, Result<DocumentRecord>)> {
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref().to_path_buf();
            let extractor = JatsExtractor::new();
            let result = extractor.extract_file(&path);
            if let Err(ref e) = result {
                warn!("{}: {e}", path.display());
            }
            (path, result)
        })
        .collect()
}
