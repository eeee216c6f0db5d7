//! Layout Module
//!
//! Composition on top of the cell writer:
//! - Boxes with borders and padding
//! - Border styles (uniform, 3x3 template, named sides)
//! - Text items laid out top to bottom without overlapping

mod border;
mod component;
mod text_box;

pub use border::{BorderPosition, BorderSides, BorderStyle};
pub use component::{ClickHandler, InteractiveSpan, TextItem};
pub use text_box::TextBox;

use crate::core::GridPos;

/// A rectangle of cells. The origin may lie off-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First row below the rectangle
    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height as i64)
    }

    /// First column right of the rectangle
    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width as i64)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        let (col, row) = (pos.col as i64, pos.row as i64);
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }
}
