//! Single-line classification.

/// Classification of one line of raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty after trimming surrounding whitespace
    Blank,
    /// Trimmed line ends with '.', '?' or '!'
    SentenceEnd,
    /// Anything else (wrapped continuation, heading, noise)
    Neutral,
}

/// Classify a single line. Pure function of its input.
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    match trimmed.chars().last() {
        Some('.') | Some('?') | Some('!') => LineClass::SentenceEnd,
        _ => LineClass::Neutral,
    }
}

/// Check whether a line looks like the start of a new sentence or
/// heading: first character uppercase or a digit, or a
/// case-insensitive "fig." / "table" prefix.
///
/// Used as one line of lookahead by the segmenter; a sentence-ending
/// line followed by such a line is a strong paragraph-break signal.
pub fn opens_new_block(line: &str) -> bool {
    let trimmed = line.trim_start();
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    if first.is_uppercase() || first.is_ascii_digit() {
        return true;
    }
    let lower = trimmed.to_lowercase();
    lower.starts_with("fig.") || lower.starts_with("table")
}
