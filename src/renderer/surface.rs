//! Pixel surfaces
//!
//! The engine draws onto anything implementing [`Surface`]. [`Canvas`] is the
//! in-memory RGBA implementation used by the headless runner and the tests;
//! a windowing backend would implement the trait over its own framebuffer.

use std::collections::HashMap;

use crate::core::Rgba;

use super::font::GlyphMask;

/// A rectangle in pixel space. Position may be negative (off-surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A drawable pixel surface with a known layout size
pub trait Surface {
    /// Natural (layout) size of the surface, in pixels
    fn client_size(&self) -> (f32, f32);

    /// Current backing store size, in pixels
    fn size(&self) -> (u32, u32);

    /// Reallocate the backing store; previous contents are lost
    fn resize(&mut self, width: u32, height: u32);

    /// Fill a rectangle with a flat color, clipped to the surface
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);

    /// Blend a coverage mask at `(x, y)` (top-left) in `color`
    fn draw_mask(&mut self, x: i64, y: i64, mask: &GlyphMask, color: Rgba);
}

/// Resolves locator strings (e.g. `"#canvas"`) to surfaces
pub trait SurfaceProvider {
    type Surface: Surface;

    fn locate(&mut self, locator: &str) -> Option<Self::Surface>;
}

/// Simple software surface
/// Renders into an RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Pixel buffer (RGBA)
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    /// Layout size reported by the host
    client_width: f32,
    client_height: f32,
}

impl Canvas {
    /// Create a canvas whose backing store matches its layout size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: vec![0u8; (width as usize) * (height as usize) * 4],
            width,
            height,
            client_width: width as f32,
            client_height: height as f32,
        }
    }

    /// Report a new layout size; the backing store is left alone
    pub fn set_client_size(&mut self, width: f32, height: f32) {
        self.client_width = width;
        self.client_height = height;
    }

    /// Read one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let p = &self.buffer[idx..idx + 4];
        Some(Rgba::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Get the pixel buffer
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Clip a rectangle to the surface, returning pixel ranges
    fn clip(&self, rect: PixelRect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.x.saturating_add(rect.width as i64).min(self.width as i64);
        let y1 = rect.y.saturating_add(rect.height as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

impl Surface for Canvas {
    fn client_size(&self) -> (f32, f32) {
        (self.client_width, self.client_height)
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.buffer = vec![0u8; (width as usize) * (height as usize) * 4];
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let rgba = color.to_array();

        for row in y0..y1 {
            let start = ((row as usize) * (self.width as usize) + x0 as usize) * 4;
            let end = ((row as usize) * (self.width as usize) + x1 as usize) * 4;
            for pixel in self.buffer[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }

    fn draw_mask(&mut self, x: i64, y: i64, mask: &GlyphMask, color: Rgba) {
        for gy in 0..mask.height {
            let py = y.saturating_add(gy as i64);
            if py < 0 || py >= self.height as i64 {
                continue;
            }

            for gx in 0..mask.width {
                let px = x.saturating_add(gx as i64);
                if px < 0 || px >= self.width as i64 {
                    continue;
                }

                let coverage = mask
                    .coverage
                    .get((gy as usize) * (mask.width as usize) + gx as usize)
                    .copied()
                    .unwrap_or(0);
                if coverage == 0 {
                    continue;
                }

                let idx = ((py as usize) * (self.width as usize) + px as usize) * 4;
                // Alpha blend
                let a = coverage as f32 / 255.0 * (color.a as f32 / 255.0);
                let inv_a = 1.0 - a;
                let pixel = &mut self.buffer[idx..idx + 4];
                pixel[0] = (color.r as f32 * a + pixel[0] as f32 * inv_a) as u8;
                pixel[1] = (color.g as f32 * a + pixel[1] as f32 * inv_a) as u8;
                pixel[2] = (color.b as f32 * a + pixel[2] as f32 * inv_a) as u8;
                pixel[3] = pixel[3].max((a * 255.0) as u8);
            }
        }
    }
}

/// Named canvases, resolved by locator
#[derive(Debug, Default)]
pub struct CanvasRegistry {
    canvases: HashMap<String, Canvas>,
}

impl CanvasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locator: impl Into<String>, canvas: Canvas) {
        self.canvases.insert(locator.into(), canvas);
    }
}

impl SurfaceProvider for CanvasRegistry {
    type Surface = Canvas;

    /// Takes the canvas out of the registry
    fn locate(&mut self, locator: &str) -> Option<Canvas> {
        self.canvases.remove(locator)
    }
}
