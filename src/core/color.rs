//! Colors and paint context
//!
//! Every paint operation reads its colors from a [`Paint`] value owned by the
//! engine. The paint is replaced wholesale on change, so a scoped override
//! (see `Engine::with_paint`) can restore the previous one exactly.

use serde::{Deserialize, Serialize};

/// An RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque monochromatic color
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Foreground and background applied to subsequent paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paint {
    /// Glyph and full-block color
    pub foreground: Rgba,
    /// Cell background color
    pub background: Rgba,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            foreground: Rgba::WHITE,
            background: Rgba::BLACK,
        }
    }
}

impl Paint {
    pub fn new(foreground: Rgba, background: Rgba) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Copy of this paint with a different foreground
    pub fn with_foreground(self, foreground: Rgba) -> Self {
        Self { foreground, ..self }
    }

    /// Copy of this paint with a different background
    pub fn with_background(self, background: Rgba) -> Self {
        Self { background, ..self }
    }
}
