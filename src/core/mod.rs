//! Core Module
//!
//! Surface-independent data and algorithms:
//! - Glyph buffer and grid positions
//! - Colors and the paint context
//! - Word wrapping
//! - Named glyphs and the extended-ASCII table
//! - Deterministic snapshots
//!
//! Nothing in here touches pixels.

mod color;
mod grid;
mod snapshot;

pub mod glyphs;
pub mod wrap;

pub use color::{Paint, Rgba};
pub use grid::{GlyphBuffer, GridPos};
pub use snapshot::GridSnapshot;
