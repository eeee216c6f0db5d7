//! Configuration for the engine

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Paint, Rgba};
use crate::error::Result;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tile width in pixels
    pub tile_width: u32,
    /// Line height in pixels (defaults to the tile width)
    pub tile_height: Option<u32>,
    /// Font pixel size (defaults to the line height)
    pub glyph_size: Option<f32>,
    /// Paint full blocks as solid cells
    pub replace_full_block: bool,
    pub foreground: Rgba,
    pub background: Rgba,
    /// Fixed logical grid; `None` follows the surface's client size
    pub grid: Option<FixedGrid>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let paint = Paint::default();
        Self {
            tile_width: 16,
            tile_height: None,
            glyph_size: None,
            replace_full_block: true,
            foreground: paint.foreground,
            background: paint.background,
            grid: None,
        }
    }
}

/// Fixed grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedGrid {
    pub columns: usize,
    pub rows: usize,
    /// Scale tiles to fill the client area
    #[serde(default)]
    pub match_tile: bool,
}

impl EngineConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn paint(&self) -> Paint {
        Paint::new(self.foreground, self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.tile_width, 16);
        assert!(config.replace_full_block);
        assert_eq!(config.paint(), Paint::default());
        assert!(config.grid.is_none());
    }

    #[test]
    fn test_partial_json() {
        let config = EngineConfig::from_json(
            r#"{"tile_width": 8, "tile_height": 18, "grid": {"columns": 45, "rows": 30}}"#,
        )
        .unwrap();
        assert_eq!(config.tile_width, 8);
        assert_eq!(config.tile_height, Some(18));
        assert_eq!(
            config.grid,
            Some(FixedGrid {
                columns: 45,
                rows: 30,
                match_tile: false
            })
        );
        assert!(config.replace_full_block);
    }

    #[test]
    fn test_invalid_json() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"foreground": {{"r": 255, "g": 0, "b": 0, "a": 255}}, "replace_full_block": false}}"#
        )
        .unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.foreground, Rgba::rgb(255, 0, 0));
        assert!(!config.replace_full_block);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/engine.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
