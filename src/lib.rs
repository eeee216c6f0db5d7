//! Glyph Grid Library
//!
//! A character-grid renderer and text layout engine. Text is drawn one glyph
//! per fixed-size tile onto a pixel surface, and a small layout layer builds
//! bordered boxes, word-wrapped paragraphs and clickable spans on top of it.
//!
//! - `core`: Colors, the logical glyph buffer, word wrapping, snapshots
//! - `renderer`: Pixel surfaces and font rasterization
//! - `engine`: Grid sizing, cell writing, pointer mapping
//! - `input`: Keyboard and pointer events
//! - `layout`: Boxes, borders and text items

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod renderer;

pub use builder::EngineBuilder;
pub use config::{EngineConfig, FixedGrid};
pub use crate::core::{GridPos, GridSnapshot, Paint, Rgba};
pub use engine::{Engine, Printed, SizeMode, TileMetrics};
pub use error::{Error, Result};
