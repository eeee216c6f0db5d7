//! Glyph Buffer
//!
//! A 2D grid recording the last glyph written to each valid cell. It is
//! reallocated, never resized in place, whenever the grid dimensions change.

use serde::{Deserialize, Serialize};

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

impl GridPos {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Read-back buffer of glyphs, `rows x cols`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphBuffer {
    /// Row-major cells; `None` is the empty glyph
    cells: Vec<Option<char>>,
    cols: usize,
    rows: usize,
}

impl GlyphBuffer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cells: vec![None; cols * rows],
            cols,
            rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether a signed cell coordinate falls inside the grid
    pub fn contains(&self, col: i64, row: i64) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        if col < self.cols && row < self.rows {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get the glyph at a cell; `None` when empty or out of range
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.index(col, row).and_then(|i| self.cells[i])
    }

    /// Record a glyph. Out-of-range writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, glyph: char) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = Some(glyph);
        }
    }

    /// Set every cell to the same glyph
    pub fn fill(&mut self, glyph: char) {
        self.cells.fill(Some(glyph));
    }

    /// Render one row as text, empty cells become spaces
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .map(|c| c.unwrap_or(' '))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new_is_empty() {
        let buffer = GlyphBuffer::new(4, 3);
        assert_eq!(buffer.cols(), 4);
        assert_eq!(buffer.rows(), 3);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(buffer.get(col, row), None);
            }
        }
    }

    #[test]
    fn test_buffer_set_get() {
        let mut buffer = GlyphBuffer::new(4, 3);
        buffer.set(2, 1, 'x');
        assert_eq!(buffer.get(2, 1), Some('x'));
        assert_eq!(buffer.get(1, 2), None);
    }

    #[test]
    fn test_buffer_out_of_range() {
        let mut buffer = GlyphBuffer::new(2, 2);
        buffer.set(2, 0, 'x');
        buffer.set(0, 5, 'x');
        assert_eq!(buffer, GlyphBuffer::new(2, 2));
        assert_eq!(buffer.get(9, 9), None);
    }

    #[test]
    fn test_buffer_contains() {
        let buffer = GlyphBuffer::new(3, 2);
        assert!(buffer.contains(0, 0));
        assert!(buffer.contains(2, 1));
        assert!(!buffer.contains(-1, 0));
        assert!(!buffer.contains(3, 0));
        assert!(!buffer.contains(0, 2));
    }

    #[test]
    fn test_buffer_row_text() {
        let mut buffer = GlyphBuffer::new(3, 1);
        buffer.set(1, 0, 'b');
        assert_eq!(buffer.row_text(0), " b ");
        assert_eq!(buffer.row_text(1), "");
    }
}
