//! Data model for extracted article content.
//!
//! This module defines the value types produced by the extraction
//! pipeline. Every entity is owned by the `DocumentRecord` that
//! contains it; nothing is shared across documents.

mod record;
mod section;
mod table;

pub use record::{DocumentRecord, JsonFormat};
pub use section::Section;
pub use table::TableRecord;
