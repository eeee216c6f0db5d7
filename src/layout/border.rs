//! Border styles
//!
//! A border is either one glyph for every position, a 3x3 template read in
//! row-major order (the center is unused), or a table of named sides with a
//! fallback chain: exact position, then `corner` (corners only), then
//! `default`, then a blank.

use serde::{Deserialize, Serialize};

use crate::core::glyphs;

/// Where a cell sits on a box's border ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPosition {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl BorderPosition {
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            BorderPosition::TopLeft
                | BorderPosition::TopRight
                | BorderPosition::BottomLeft
                | BorderPosition::BottomRight
        )
    }

    /// Index into a row-major 3x3 template
    fn template_index(&self) -> usize {
        match self {
            BorderPosition::TopLeft => 0,
            BorderPosition::Top => 1,
            BorderPosition::TopRight => 2,
            BorderPosition::Left => 3,
            BorderPosition::Right => 5,
            BorderPosition::BottomLeft => 6,
            BorderPosition::Bottom => 7,
            BorderPosition::BottomRight => 8,
        }
    }
}

/// Independent glyphs per border position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSides {
    pub top: Option<char>,
    pub bottom: Option<char>,
    pub left: Option<char>,
    pub right: Option<char>,
    pub top_left: Option<char>,
    pub top_right: Option<char>,
    pub bottom_left: Option<char>,
    pub bottom_right: Option<char>,
    /// Fallback for the four corners
    pub corner: Option<char>,
    /// Fallback for every position
    pub default: Option<char>,
}

impl BorderSides {
    pub fn glyph(&self, position: BorderPosition) -> char {
        let exact = match position {
            BorderPosition::TopLeft => self.top_left,
            BorderPosition::Top => self.top,
            BorderPosition::TopRight => self.top_right,
            BorderPosition::Left => self.left,
            BorderPosition::Right => self.right,
            BorderPosition::BottomLeft => self.bottom_left,
            BorderPosition::Bottom => self.bottom,
            BorderPosition::BottomRight => self.bottom_right,
        };
        let corner = if position.is_corner() {
            self.corner
        } else {
            None
        };

        exact.or(corner).or(self.default).unwrap_or(glyphs::SPACE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderStyle {
    /// One glyph everywhere
    Uniform(char),
    /// Row-major 3x3 glyphs; the center is ignored
    Template([char; 9]),
    Sides(BorderSides),
}

impl BorderStyle {
    /// Parse a 1-glyph or 9-glyph style string. Newlines are ignored, so a
    /// template may be written as three lines.
    pub fn parse(style: &str) -> Option<Self> {
        let glyphs: Vec<char> = style.chars().filter(|c| *c != '\n').collect();
        match glyphs.len() {
            1 => Some(BorderStyle::Uniform(glyphs[0])),
            9 => {
                let mut template = [glyphs::SPACE; 9];
                template.copy_from_slice(&glyphs);
                Some(BorderStyle::Template(template))
            }
            _ => None,
        }
    }

    /// ┌─┐ │ │ └─┘
    pub fn single() -> Self {
        BorderStyle::Template([
            glyphs::CORNER_TOP_LEFT,
            glyphs::BORDER_HORIZONTAL,
            glyphs::CORNER_TOP_RIGHT,
            glyphs::BORDER_VERTICAL,
            glyphs::SPACE,
            glyphs::BORDER_VERTICAL,
            glyphs::CORNER_BOTTOM_LEFT,
            glyphs::BORDER_HORIZONTAL,
            glyphs::CORNER_BOTTOM_RIGHT,
        ])
    }

    /// ╔═╗ ║ ║ ╚═╝
    pub fn double() -> Self {
        BorderStyle::Template([
            glyphs::DOUBLE_TOP_LEFT,
            glyphs::DOUBLE_HORIZONTAL,
            glyphs::DOUBLE_TOP_RIGHT,
            glyphs::DOUBLE_VERTICAL,
            glyphs::SPACE,
            glyphs::DOUBLE_VERTICAL,
            glyphs::DOUBLE_BOTTOM_LEFT,
            glyphs::DOUBLE_HORIZONTAL,
            glyphs::DOUBLE_BOTTOM_RIGHT,
        ])
    }

    /// Glyph drawn at a border position
    pub fn glyph(&self, position: BorderPosition) -> char {
        match self {
            BorderStyle::Uniform(glyph) => *glyph,
            BorderStyle::Template(template) => template[position.template_index()],
            BorderStyle::Sides(sides) => sides.glyph(position),
        }
    }
}
