//! Heuristic paragraph segmentation of raw extracted text.
//!
//! Raw text from PDF/HTML extraction uses a single newline for both
//! in-paragraph line wraps and paragraph breaks; only blank lines are
//! a reliable break signal. This module classifies lines and walks
//! (current, next) line pairs to recover paragraph structure.

mod line;
mod paragraph;

pub use line::{classify, opens_new_block, LineClass};
pub use paragraph::{segment_paragraphs, split_on_blank_lines, SegmentOptions, Segmenter};
