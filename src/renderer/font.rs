//! Glyph Rasterization
//!
//! Turns characters into coverage masks for one tile at a time. Masks are
//! cached per character until the pixel size changes.

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::error::{Error, Result};

/// A rasterized glyph: a coverage bitmap plus its placement
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    /// Horizontal offset from the cell's left edge
    pub left: i32,
    /// Vertical offset from the baseline to the bitmap's top edge
    pub top: i32,
    pub advance: f32,
    /// Coverage (grayscale, 1 byte per pixel)
    pub coverage: Vec<u8>,
}

/// A loaded font with a per-glyph raster cache
pub struct GlyphFont {
    font: Font,
    /// Font size in pixels
    size: f32,
    cache: HashMap<char, GlyphMask>,
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFont")
            .field("size", &self.size)
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl GlyphFont {
    /// Load a font from a file
    pub fn from_path(path: &Path, size: f32) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data, size)
    }

    /// Create a font from TTF/OTF bytes
    pub fn from_bytes(data: &[u8], size: f32) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| Error::Font(e.to_string()))?;

        Ok(Self {
            font,
            size,
            cache: HashMap::new(),
        })
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Change the pixel size; cached rasters are dropped
    pub fn set_size(&mut self, size: f32) {
        if (size - self.size).abs() > f32::EPSILON {
            self.size = size;
            self.cache.clear();
        }
    }

    /// Rasterize a character, using cache if available
    pub fn rasterize(&mut self, c: char) -> &GlyphMask {
        let font = &self.font;
        let size = self.size;
        self.cache.entry(c).or_insert_with(|| {
            let (metrics, coverage) = font.rasterize(c, size);
            GlyphMask {
                width: metrics.width as u32,
                height: metrics.height as u32,
                left: metrics.xmin,
                top: -(metrics.height as i32 + metrics.ymin),
                advance: metrics.advance_width,
                coverage,
            }
        })
    }

    /// Whether the font has an outline for `c`
    pub fn has_glyph(&self, c: char) -> bool {
        self.font.lookup_glyph_index(c) != 0
    }
}
