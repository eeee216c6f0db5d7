//! Renderer Module
//!
//! Pixel-level collaborators of the engine: the surface abstraction, the
//! in-memory RGBA canvas, and glyph rasterization.

mod font;
mod surface;

pub use font::{GlyphFont, GlyphMask};
pub use surface::{Canvas, CanvasRegistry, PixelRect, Surface, SurfaceProvider};
