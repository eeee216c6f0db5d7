//! Deterministic snapshot of the glyph buffer
//!
//! Snapshots capture what the grid reads back as, for testing and for the
//! headless runner. The same sequence of draw calls always produces the
//! same snapshot.

use serde::{Deserialize, Serialize};

use super::grid::GlyphBuffer;

/// Text view of the grid, one string per row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub columns: usize,
    pub rows: usize,
    /// Row contents; empty cells are rendered as spaces
    pub lines: Vec<String>,
}

impl GridSnapshot {
    pub fn from_buffer(buffer: &GlyphBuffer) -> Self {
        Self {
            columns: buffer.cols(),
            rows: buffer.rows(),
            lines: (0..buffer.rows()).map(|row| buffer.row_text(row)).collect(),
        }
    }

    /// All rows joined by newlines
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// All rows with trailing spaces removed, joined by newlines
    pub fn to_trimmed_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
