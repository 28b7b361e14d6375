//! Error types for the artext library.

use std::io;
use thiserror::Error;

/// Result type alias for artext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document extraction.
///
/// Failures are always local to one document: a batch caller catches
/// the per-document error and continues with its siblings.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading an input document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not well-formed XML. Fatal for the document; no
    /// partial record is returned.
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// Any other fault during tree traversal. The document either
    /// yields a complete record or this error with its cause.
    #[error("Extraction error: {0}")]
    Extraction(String),
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::MalformedXml(err.to_string())
    }
}
