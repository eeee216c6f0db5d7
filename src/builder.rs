//! Engine builder
//!
//! Collects construction options and applies them in a fixed order: tiles,
//! paint, font, then the optional fixed grid (so a matched grid also scales
//! the font).

use crate::config::{EngineConfig, FixedGrid};
use crate::core::Paint;
use crate::engine::Engine;
use crate::error::Result;
use crate::renderer::{GlyphFont, Surface};

pub struct EngineBuilder<S: Surface> {
    surface: S,
    config: EngineConfig,
    font: Option<GlyphFont>,
}

impl<S: Surface> EngineBuilder<S> {
    pub fn new(surface: S, tile_width: u32) -> Self {
        Self::from_config(
            surface,
            EngineConfig {
                tile_width,
                ..EngineConfig::default()
            },
        )
    }

    pub fn from_config(surface: S, config: EngineConfig) -> Self {
        Self {
            surface,
            config,
            font: None,
        }
    }

    /// Line height, independent from the tile width
    pub fn line_height(mut self, line_height: u32) -> Self {
        self.config.tile_height = Some(line_height);
        self
    }

    pub fn glyph_size(mut self, glyph_size: f32) -> Self {
        self.config.glyph_size = Some(glyph_size);
        self
    }

    /// Fixed grid of `columns x rows`, optionally scaling tiles to the client
    pub fn size(mut self, columns: usize, rows: usize, match_tile: bool) -> Self {
        self.config.grid = Some(FixedGrid {
            columns,
            rows,
            match_tile,
        });
        self
    }

    pub fn font(mut self, font: GlyphFont) -> Self {
        self.font = Some(font);
        self
    }

    pub fn replace_full_block(mut self, replace: bool) -> Self {
        self.config.replace_full_block = replace;
        self
    }

    pub fn paint(mut self, paint: Paint) -> Self {
        self.config.foreground = paint.foreground;
        self.config.background = paint.background;
        self
    }

    pub fn build(self) -> Result<Engine<S>> {
        let config = self.config;
        let mut engine = Engine::new(self.surface, config.tile_width, config.tile_height)?;

        if let Some(glyph_size) = config.glyph_size {
            engine.set_glyph_size(glyph_size);
        }
        engine.set_paint(config.paint());
        engine.set_replace_full_block(config.replace_full_block);
        if let Some(font) = self.font {
            engine.set_font(font);
        }
        if let Some(grid) = config.grid {
            engine.set_size(grid.columns, grid.rows, grid.match_tile);
        }

        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::Rgba;
    use crate::engine::SizeMode;
    use crate::error::Error;
    use crate::renderer::Canvas;

    #[test]
    fn test_builder_defaults_fit_client() {
        let engine = EngineBuilder::new(Canvas::new(64, 32), 16).build().unwrap();
        assert_eq!((engine.columns(), engine.rows()), (4, 2));
        assert_eq!(engine.mode(), SizeMode::Auto);
        assert!(engine.replace_full_block());
    }

    #[test]
    fn test_builder_fixed_grid() {
        let engine = EngineBuilder::new(Canvas::new(10, 10), 16)
            .line_height(18)
            .size(45, 30, false)
            .replace_full_block(false)
            .build()
            .unwrap();

        assert_eq!((engine.columns(), engine.rows()), (45, 30));
        assert_eq!(engine.tile().height, 18);
        assert_eq!(engine.tile().glyph_size, 18.0);
        assert_eq!(engine.surface().size(), (45 * 16, 30 * 18));
        assert!(!engine.replace_full_block());
    }

    #[test]
    fn test_builder_paint_and_glyph_size() {
        let paint = Paint::new(Rgba::rgb(0, 255, 0), Rgba::gray(20));
        let engine = EngineBuilder::new(Canvas::new(32, 32), 8)
            .glyph_size(7.0)
            .paint(paint)
            .build()
            .unwrap();
        assert_eq!(engine.paint(), paint);
        assert_eq!(engine.tile().glyph_size, 7.0);
    }

    #[test]
    fn test_builder_from_config() {
        let config = EngineConfig::from_json(
            r#"{"tile_width": 4, "grid": {"columns": 3, "rows": 2, "match_tile": true}}"#,
        )
        .unwrap();
        let mut canvas = Canvas::new(1, 1);
        canvas.set_client_size(24.0, 24.0);

        let engine = EngineBuilder::from_config(canvas, config).build().unwrap();
        // scale = min(24 / 12, 24 / 8) = 2
        assert_eq!(engine.tile().width, 8);
        assert_eq!(engine.surface().size(), (24, 16));
    }

    #[test]
    fn test_builder_rejects_zero_tiles() {
        let err = EngineBuilder::new(Canvas::new(8, 8), 0).build().unwrap_err();
        assert!(matches!(err, Error::InvalidTileSize { .. }));
    }
}
