//! Table record and its canonical grid serialization.

use serde::{Deserialize, Serialize};

/// A normalized table extracted from a document.
///
/// Header rows precede body rows in `data_rows`; the header/body
/// distinction is not retained after flattening. The first row, when
/// present, is treated as the header for serialization purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRecord {
    /// Table identifier ("N/A" when the source carries none)
    pub id: String,

    /// Caption text (possibly empty)
    pub caption: String,

    /// Ordered rows, each an ordered list of trimmed cell strings
    pub data_rows: Vec<Vec<String>>,

    /// Canonical grid-delimited serialization of the rows
    pub text_representation: String,
}

impl TableRecord {
    /// Create a table record, computing the grid serialization.
    pub fn new(id: impl Into<String>, caption: impl Into<String>, data_rows: Vec<Vec<String>>) -> Self {
        let text_representation = render_grid(&data_rows);
        Self {
            id: id.into(),
            caption: caption.into(),
            data_rows,
            text_representation,
        }
    }

    /// Get the number of rows (header included).
    pub fn row_count(&self) -> usize {
        self.data_rows.len()
    }

    /// Get the number of columns (based on the first row).
    pub fn column_count(&self) -> usize {
        self.data_rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.data_rows.is_empty()
    }
}

/// Serialize rows to a pipe-delimited grid.
///
/// The first row renders as the header line, followed by a separator
/// whose per-column dash run is at least 3 characters or the header
/// cell's length, whichever is larger. Remaining rows render one line
/// each. Ragged rows are serialized as-is with their own cell count.
fn render_grid(rows: &[Vec<String>]) -> String {
    let Some(header) = rows.first() else {
        return String::new();
    };

    let mut out = String::new();
    out.push_str("| ");
    out.push_str(&header.join(" | "));
    out.push_str(" |\n");

    let dashes: Vec<String> = header
        .iter()
        .map(|cell| "-".repeat(cell.chars().count().max(3)))
        .collect();
    out.push_str("|-");
    out.push_str(&dashes.join("-|-"));
    out.push_str("-|\n");

    for row in &rows[1..] {
        out.push_str("| ");
        out.push_str(&row.join(" | "));
        out.push_str(" |\n");
    }

    out
}
