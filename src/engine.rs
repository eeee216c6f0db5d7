//! Glyph Grid Engine
//!
//! The engine maps a pixel surface onto a grid of fixed-size tiles and is the
//! only writer of that grid. It combines:
//! - The grid model: tile metrics, auto-fit or fixed sizing, coordinate mapping
//! - The cell writer: `print`, `print_boxed` and `fill`
//! - The glyph buffer recording the last glyph drawn on every valid cell
//! - Input state and listeners fed by the host
//!
//! All drawing is synchronous and never fails. Irregular input (empty text,
//! zero widths, off-grid positions) draws nothing or gets truncated.

use tracing::{debug, trace, warn};

use crate::core::glyphs::{FULL_BLOCK, SPACE};
use crate::core::wrap::{self, char_len, truncate_chars};
use crate::core::{GlyphBuffer, GridPos, GridSnapshot, Paint, Rgba};
use crate::error::{Error, ListenerError, Result};
use crate::input::{Event, EventKind, InputState, Listeners};
use crate::renderer::{Canvas, GlyphFont, PixelRect, Surface, SurfaceProvider};

/// Pixel dimensions of one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMetrics {
    /// Horizontal advance per cell
    pub width: u32,
    /// Line height
    pub height: u32,
    /// Font pixel size; glyph baselines sit this far below the cell top
    pub glyph_size: f32,
}

/// How the grid dimensions are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeMode {
    /// Follow the surface's client size
    Auto,
    /// Fixed logical grid, ignoring client resizes
    Fixed {
        columns: usize,
        rows: usize,
        match_tile: bool,
    },
}

/// Outcome of a wrapped print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Printed {
    /// Lines the text wrapped into, drawn or not
    pub lines: usize,
    /// Characters actually painted
    pub chars: usize,
}

/// The character-grid engine
pub struct Engine<S: Surface = Canvas> {
    surface: S,
    /// Tile metrics as configured
    configured: TileMetrics,
    /// Tile metrics in effect (differs after a match-tile resize)
    tile: TileMetrics,
    mode: SizeMode,
    buffer: GlyphBuffer,
    paint: Paint,
    /// Paint full blocks as solid rectangles instead of glyphs
    replace_full_block: bool,
    font: Option<GlyphFont>,
    input: InputState,
    listeners: Listeners,
}

impl<S: Surface> std::fmt::Debug for Engine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("tile", &self.tile)
            .field("mode", &self.mode)
            .field("columns", &self.buffer.cols())
            .field("rows", &self.buffer.rows())
            .field("paint", &self.paint)
            .field("replace_full_block", &self.replace_full_block)
            .finish()
    }
}

impl<S: Surface> Engine<S> {
    /// Create an engine over `surface`.
    ///
    /// `tile_height` (the line height) defaults to `tile_width`. The grid is
    /// fitted to the surface's client size immediately.
    pub fn new(surface: S, tile_width: u32, tile_height: Option<u32>) -> Result<Self> {
        let tile_height = tile_height.unwrap_or(tile_width);
        if tile_width == 0 || tile_height == 0 {
            return Err(Error::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }

        let metrics = TileMetrics {
            width: tile_width,
            height: tile_height,
            glyph_size: tile_height as f32,
        };

        let mut engine = Self {
            surface,
            configured: metrics,
            tile: metrics,
            mode: SizeMode::Auto,
            buffer: GlyphBuffer::new(0, 0),
            paint: Paint::default(),
            replace_full_block: true,
            font: None,
            input: InputState::new(),
            listeners: Listeners::new(),
        };
        engine.update_resolution();
        Ok(engine)
    }

    /// Create an engine over the surface a locator resolves to
    pub fn locate<P>(
        provider: &mut P,
        locator: &str,
        tile_width: u32,
        tile_height: Option<u32>,
    ) -> Result<Self>
    where
        P: SurfaceProvider<Surface = S>,
    {
        let surface = provider
            .locate(locator)
            .ok_or_else(|| Error::SurfaceNotFound(locator.to_string()))?;
        Self::new(surface, tile_width, tile_height)
    }

    // ---- Grid model ----

    /// Fit the grid to the surface's client size.
    ///
    /// The pixel size is rounded to the nearest multiple of the tile size and
    /// the glyph buffer is reallocated; everything painted before is lost.
    /// Leaves fixed-size mode.
    pub fn update_resolution(&mut self) {
        self.mode = SizeMode::Auto;
        self.tile = self.configured;
        self.apply_font_size();

        let (client_width, client_height) = self.surface.client_size();
        let columns = (client_width / self.tile.width as f32).round().max(0.0) as usize;
        let rows = (client_height / self.tile.height as f32).round().max(0.0) as usize;
        self.regrid(columns, rows);
    }

    /// Switch to a fixed logical grid.
    ///
    /// With `match_tile`, tiles are scaled (keeping their aspect ratio) to the
    /// largest whole-pixel size that fits the client area. Otherwise the
    /// surface is resized to `columns x rows` tiles of the configured size.
    pub fn set_size(&mut self, columns: usize, rows: usize, match_tile: bool) {
        self.mode = SizeMode::Fixed {
            columns,
            rows,
            match_tile,
        };
        self.tile = self.configured;

        if match_tile && columns > 0 && rows > 0 {
            let (client_width, client_height) = self.surface.client_size();
            let scale = (client_width / (columns as f32 * self.configured.width as f32))
                .min(client_height / (rows as f32 * self.configured.height as f32));

            if scale.is_finite() && scale > 0.0 {
                self.tile = TileMetrics {
                    width: ((self.configured.width as f32 * scale).floor() as u32).max(1),
                    height: ((self.configured.height as f32 * scale).floor() as u32).max(1),
                    glyph_size: (self.configured.glyph_size * scale).max(1.0),
                };
            } else {
                warn!(
                    "Cannot match tiles to client size {:?}, keeping configured tiles",
                    self.surface.client_size()
                );
            }
        }

        self.apply_font_size();
        self.regrid(columns, rows);
    }

    /// Set the line height and re-apply the current sizing mode
    pub fn set_line_height(&mut self, line_height: u32) {
        if line_height == 0 {
            warn!("Ignoring zero line height");
            return;
        }
        self.configured.height = line_height;
        self.reapply_mode();
    }

    /// Set the font pixel size and re-apply the current sizing mode
    pub fn set_glyph_size(&mut self, glyph_size: f32) {
        if !(glyph_size.is_finite() && glyph_size > 0.0) {
            warn!("Ignoring glyph size {}", glyph_size);
            return;
        }
        self.configured.glyph_size = glyph_size;
        self.reapply_mode();
    }

    /// The host reports a client size change.
    ///
    /// Only an auto-fit grid follows it; returns whether the grid was rebuilt.
    pub fn handle_client_resize(&mut self) -> bool {
        match self.mode {
            SizeMode::Auto => {
                self.update_resolution();
                true
            }
            SizeMode::Fixed { .. } => false,
        }
    }

    fn reapply_mode(&mut self) {
        match self.mode {
            SizeMode::Auto => self.update_resolution(),
            SizeMode::Fixed {
                columns,
                rows,
                match_tile,
            } => self.set_size(columns, rows, match_tile),
        }
    }

    fn regrid(&mut self, columns: usize, rows: usize) {
        let width = saturating_u32(columns).saturating_mul(self.tile.width);
        let height = saturating_u32(rows).saturating_mul(self.tile.height);
        self.surface.resize(width, height);
        self.buffer = GlyphBuffer::new(columns, rows);
        debug!(
            "Grid {}x{} with {}x{} tiles ({}x{} px)",
            columns, rows, self.tile.width, self.tile.height, width, height
        );
    }

    fn apply_font_size(&mut self) {
        if let Some(font) = self.font.as_mut() {
            font.set_size(self.tile.glyph_size);
        }
    }

    /// Map a surface pixel position to the cell under it
    pub fn coordinate(&self, x: f32, y: f32) -> Option<GridPos> {
        let col = (x / self.tile.width as f32).floor();
        let row = (y / self.tile.height as f32).floor();
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.buffer.cols() && row < self.buffer.rows() {
            Some(GridPos::new(col, row))
        } else {
            None
        }
    }

    /// The last glyph drawn at a cell; `None` when empty or off-grid
    pub fn glyph_at(&self, col: usize, row: usize) -> Option<char> {
        self.buffer.get(col, row)
    }

    pub fn columns(&self) -> usize {
        self.buffer.cols()
    }

    pub fn rows(&self) -> usize {
        self.buffer.rows()
    }

    pub fn tile(&self) -> TileMetrics {
        self.tile
    }

    pub fn mode(&self) -> SizeMode {
        self.mode
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_buffer(&self.buffer)
    }

    // ---- Paint state ----

    pub fn paint(&self) -> Paint {
        self.paint
    }

    pub fn set_paint(&mut self, paint: Paint) {
        self.paint = paint;
    }

    pub fn set_foreground(&mut self, color: impl Into<Rgba>) {
        self.paint = self.paint.with_foreground(color.into());
    }

    pub fn set_background(&mut self, color: impl Into<Rgba>) {
        self.paint = self.paint.with_background(color.into());
    }

    /// Run `f` with `paint` applied, then restore the previous paint
    pub fn with_paint<R>(&mut self, paint: Paint, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = std::mem::replace(&mut self.paint, paint);
        let result = f(self);
        self.paint = previous;
        result
    }

    pub fn set_replace_full_block(&mut self, replace: bool) {
        self.replace_full_block = replace;
    }

    pub fn replace_full_block(&self) -> bool {
        self.replace_full_block
    }

    /// Use `font` for glyph rendering; it is resized to the current glyph size
    pub fn set_font(&mut self, font: GlyphFont) {
        self.font = Some(font);
        self.apply_font_size();
    }

    pub fn font_mut(&mut self) -> Option<&mut GlyphFont> {
        self.font.as_mut()
    }

    // ---- Cell writer ----

    /// Paint one row of glyphs starting at cell `(x, y)`.
    ///
    /// The background behind the whole run is filled first. Spaces leave it
    /// showing; full blocks become solid cells when substitution is on.
    /// Cells outside the grid still reach the surface but are never recorded
    /// in the glyph buffer.
    pub fn print(&mut self, text: &str, x: i64, y: i64) {
        let len = char_len(text);
        if len == 0 {
            return;
        }

        let tile = self.tile;
        let (tw, th) = (tile.width as i64, tile.height as i64);
        let paint = self.paint;

        let top = y.saturating_mul(th);

        self.surface.fill_rect(
            PixelRect::new(
                x.saturating_mul(tw),
                top,
                tile.width.saturating_mul(saturating_u32(len)),
                tile.height,
            ),
            paint.background,
        );

        for (n, glyph) in text.chars().enumerate() {
            let col = x.saturating_add(n as i64);
            let left = col.saturating_mul(tw);

            if glyph == FULL_BLOCK && self.replace_full_block {
                self.surface.fill_rect(
                    PixelRect::new(left, top, tile.width, tile.height),
                    paint.foreground,
                );
            } else if glyph != SPACE {
                self.draw_glyph(
                    glyph,
                    left,
                    top.saturating_add(tile.glyph_size.round() as i64),
                    paint.foreground,
                );
            }

            if self.buffer.contains(col, y) {
                self.buffer.set(col as usize, y as usize, glyph);
            }
        }
    }

    fn draw_glyph(&mut self, glyph: char, x: i64, baseline: i64, color: Rgba) {
        match self.font.as_mut() {
            Some(font) => {
                let mask = font.rasterize(glyph);
                self.surface.draw_mask(
                    x.saturating_add(mask.left as i64),
                    baseline.saturating_add(mask.top as i64),
                    mask,
                    color,
                );
            }
            None => trace!("No font set, skipping glyph {:?}", glyph),
        }
    }

    /// Wrap `text` to `width` and print it line by line from `(x, y)`.
    ///
    /// Stops after `height` rows (default: down to the last grid row) or once
    /// `max_chars` characters have been painted; the line that crosses the
    /// budget is truncated. Returns the number of wrapped lines, which does
    /// not depend on either limit.
    pub fn print_boxed(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: usize,
        height: Option<usize>,
        max_chars: Option<usize>,
    ) -> usize {
        self.print_wrapped(text, x, y, width, height, max_chars).lines
    }

    /// Like [`print_boxed`](Self::print_boxed), also reporting characters painted
    pub fn print_wrapped(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: usize,
        height: Option<usize>,
        max_chars: Option<usize>,
    ) -> Printed {
        if width == 0 {
            trace!("Zero width box, nothing to print");
            return Printed::default();
        }

        let lines = self.split(text, width);
        let height = height
            .unwrap_or_else(|| (self.buffer.rows() as i64).saturating_sub(y).max(0) as usize);
        let budget = max_chars.unwrap_or(usize::MAX);
        let mut used = 0;

        for (n, line) in lines.iter().enumerate().take(height) {
            if used >= budget {
                break;
            }
            let remaining = budget - used;
            let line = truncate_chars(line, remaining);
            self.print(line, x, y.saturating_add(n as i64));
            used += char_len(line);
        }

        Printed {
            lines: lines.len(),
            chars: used,
        }
    }

    /// Word-wrap `text` to `width` columns
    pub fn split(&self, text: &str, width: usize) -> Vec<String> {
        wrap::split(text, width)
    }

    /// Fill the whole grid with one glyph
    pub fn fill(&mut self, glyph: char) {
        let (width, height) = self.surface.size();
        let whole = PixelRect::new(0, 0, width, height);

        match glyph {
            SPACE => {
                self.surface.fill_rect(whole, self.paint.background);
                self.buffer.fill(glyph);
            }
            FULL_BLOCK => {
                self.surface.fill_rect(whole, self.paint.foreground);
                self.buffer.fill(glyph);
            }
            _ => {
                let row: String = std::iter::repeat(glyph).take(self.columns()).collect();
                for y in 0..self.rows() {
                    self.print(&row, 0, y as i64);
                }
            }
        }
    }

    // ---- Input ----

    /// Register a listener
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&Event) -> std::result::Result<(), ListenerError> + 'static,
    {
        self.listeners.on(kind, handler);
    }

    /// Register a listener by event name (`keydown`, `mousemove`, ...)
    pub fn on_named<F>(&mut self, name: &str, handler: F) -> Result<()>
    where
        F: FnMut(&Event) -> std::result::Result<(), ListenerError> + 'static,
    {
        self.listeners.on_named(name, handler)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Last known cell under the pointer
    pub fn pointer(&self) -> Option<GridPos> {
        self.input.pointer()
    }

    pub fn is_key_down(&self, code: &str) -> bool {
        self.input.is_key_down(code)
    }

    pub fn key_down(&mut self, code: &str) -> Result<()> {
        self.input.set_key(code, true);
        self.dispatch_key(EventKind::KeyDown, code)
    }

    pub fn key_up(&mut self, code: &str) -> Result<()> {
        self.input.set_key(code, false);
        self.dispatch_key(EventKind::KeyUp, code)
    }

    /// Pointer pressed at surface pixel `(x, y)`
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<()> {
        self.input.set_pointer_down(true);
        self.dispatch_pointer(EventKind::PointerDown, x, y)
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> Result<()> {
        self.input.set_pointer_down(false);
        self.dispatch_pointer(EventKind::PointerUp, x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<()> {
        self.dispatch_pointer(EventKind::PointerMove, x, y)
    }

    /// The surface lost focus
    pub fn blur(&mut self) -> Result<()> {
        self.input.set_pointer_down(false);
        self.listeners.dispatch(EventKind::Blur, &Event::Blur)
    }

    fn dispatch_key(&mut self, kind: EventKind, code: &str) -> Result<()> {
        let event = Event::Key {
            code: code.to_string(),
        };
        self.listeners.dispatch(kind, &event)
    }

    fn dispatch_pointer(&mut self, kind: EventKind, x: f32, y: f32) -> Result<()> {
        let cell = self.coordinate(x, y);
        self.input.set_pointer(cell);
        self.listeners.dispatch(kind, &Event::Pointer { x, y, cell })
    }
}

/// Pixel counts past `u32::MAX` saturate instead of wrapping
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    /// 10x3 grid of 8x16 tiles
    fn engine() -> Engine {
        Engine::new(Canvas::new(80, 48), 8, Some(16)).unwrap()
    }

    #[test]
    fn test_new_fits_client_size() {
        let engine = engine();
        assert_eq!(engine.columns(), 10);
        assert_eq!(engine.rows(), 3);
        assert_eq!(engine.surface().size(), (80, 48));
        assert_eq!(engine.mode(), SizeMode::Auto);
    }

    #[test]
    fn test_tile_height_defaults_to_width() {
        let engine = Engine::new(Canvas::new(64, 64), 16, None).unwrap();
        assert_eq!(engine.tile().height, 16);
        assert_eq!((engine.columns(), engine.rows()), (4, 4));
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let err = Engine::new(Canvas::new(10, 10), 0, None).unwrap_err();
        assert!(matches!(err, Error::InvalidTileSize { width: 0, height: 0 }));
        assert!(Engine::new(Canvas::new(10, 10), 8, Some(0)).is_err());
    }

    #[test]
    fn test_update_resolution_rounds_to_tiles() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_client_size(85.0, 55.0);
        let engine = Engine::new(canvas, 8, Some(16)).unwrap();
        // 85 / 8 = 10.6 -> 11, 55 / 16 = 3.4 -> 3
        assert_eq!((engine.columns(), engine.rows()), (11, 3));
        assert_eq!(engine.surface().size(), (88, 48));
    }

    #[test]
    fn test_update_resolution_clears_buffer() {
        let mut engine = engine();
        engine.print("abc", 0, 0);
        engine.update_resolution();
        assert_eq!(engine.glyph_at(0, 0), None);
    }

    #[test]
    fn test_set_size_forces_surface() {
        let mut engine = engine();
        engine.set_size(20, 5, false);
        assert_eq!((engine.columns(), engine.rows()), (20, 5));
        assert_eq!(engine.surface().size(), (160, 80));
    }

    #[test]
    fn test_set_size_match_tile() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_client_size(400.0, 300.0);
        let mut engine = Engine::new(canvas, 8, Some(16)).unwrap();
        engine.set_size(20, 10, true);

        // scale = min(400 / 160, 300 / 160) = 1.875
        let tile = engine.tile();
        assert_eq!((tile.width, tile.height), (15, 30));
        assert_eq!(engine.surface().size(), (20 * 15, 10 * 30));
    }

    #[test]
    fn test_fixed_size_ignores_client_resize() {
        let mut engine = engine();
        engine.set_size(4, 2, false);
        engine.surface_mut().set_client_size(800.0, 800.0);
        assert!(!engine.handle_client_resize());
        assert_eq!((engine.columns(), engine.rows()), (4, 2));

        engine.update_resolution();
        assert_eq!((engine.columns(), engine.rows()), (100, 50));
        engine.surface_mut().set_client_size(80.0, 80.0);
        assert!(engine.handle_client_resize());
        assert_eq!((engine.columns(), engine.rows()), (10, 5));
    }

    #[test]
    fn test_set_line_height_keeps_invariant() {
        let mut engine = engine();
        engine.set_size(10, 3, false);
        engine.set_line_height(20);
        assert_eq!(engine.tile().height, 20);
        assert_eq!(engine.surface().size(), (80, 60));

        engine.set_line_height(0);
        assert_eq!(engine.tile().height, 20);
    }

    #[test]
    fn test_coordinate() {
        let engine = engine();
        assert_eq!(engine.coordinate(0.0, 0.0), Some(GridPos::new(0, 0)));
        assert_eq!(engine.coordinate(17.0, 33.0), Some(GridPos::new(2, 2)));
        assert_eq!(engine.coordinate(79.9, 47.9), Some(GridPos::new(9, 2)));
        assert_eq!(engine.coordinate(80.0, 0.0), None);
        assert_eq!(engine.coordinate(-0.5, 0.0), None);
        assert_eq!(engine.coordinate(0.0, 48.0), None);
    }

    #[test]
    fn test_print_records_glyphs() {
        let mut engine = engine();
        engine.print("AB", 3, 2);
        assert_eq!(engine.glyph_at(3, 2), Some('A'));
        assert_eq!(engine.glyph_at(4, 2), Some('B'));
        assert_eq!(engine.glyph_at(5, 2), None);
    }

    #[test]
    fn test_print_off_grid_leaves_buffer() {
        let mut engine = engine();
        engine.print("xyz", -2, 0);
        assert_eq!(engine.glyph_at(0, 0), Some('z'));
        assert_eq!(engine.glyph_at(1, 0), None);

        engine.print("xyz", 50, 1);
        engine.print("xyz", 0, -1);
        engine.print("xyz", 0, 3);
        assert_eq!(engine.snapshot().to_trimmed_text(), "z\n\n");
    }

    #[test]
    fn test_print_partially_past_right_edge() {
        let mut engine = engine();
        engine.print("abcd", 8, 0);
        assert_eq!(engine.glyph_at(8, 0), Some('a'));
        assert_eq!(engine.glyph_at(9, 0), Some('b'));
        assert_eq!(engine.glyph_at(0, 1), None);
    }

    #[test]
    fn test_print_background_whole_run() {
        let mut engine = engine();
        engine.set_background(Rgba::rgb(0, 0, 255));
        engine.print(" a ", 0, 0);
        // Space cells still get the background
        assert_eq!(engine.surface().pixel(1, 1), Some(Rgba::rgb(0, 0, 255)));
        assert_eq!(engine.surface().pixel(20, 15), Some(Rgba::rgb(0, 0, 255)));
        assert_eq!(engine.surface().pixel(24, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_print_full_block_substitution() {
        let mut engine = engine();
        engine.set_foreground(Rgba::rgb(255, 0, 0));
        engine.print("█", 1, 0);
        assert_eq!(engine.surface().pixel(9, 1), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(engine.glyph_at(1, 0), Some(FULL_BLOCK));

        engine.set_replace_full_block(false);
        engine.print("█", 2, 0);
        // Without a font the glyph path paints nothing over the background
        assert_eq!(engine.surface().pixel(17, 1), Some(Rgba::BLACK));
        assert_eq!(engine.glyph_at(2, 0), Some(FULL_BLOCK));
    }

    #[test]
    fn test_print_empty_is_noop() {
        let mut engine = engine();
        engine.print("", 0, 0);
        assert_eq!(engine.surface().pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_print_boxed_wraps() {
        let mut engine = engine();
        let lines = engine.print_boxed("one two three", 0, 0, 7, None, None);
        assert_eq!(lines, 2);
        assert_eq!(engine.snapshot().to_trimmed_text(), "one two\nthree\n");
    }

    #[test]
    fn test_print_boxed_unbreakable_word() {
        let mut engine = engine();
        let lines = engine.print_boxed("supercalifragilistic", 0, 0, 5, None, None);
        assert_eq!(lines, 1);
        // Clipped by the grid, not split
        assert_eq!(engine.snapshot().lines[0], "supercalif");
        assert_eq!(engine.glyph_at(0, 1), None);
    }

    #[test]
    fn test_print_boxed_height_limit() {
        let mut engine = engine();
        let lines = engine.print_boxed("a b c d", 0, 0, 1, Some(2), None);
        assert_eq!(lines, 4);
        assert_eq!(engine.snapshot().to_trimmed_text(), "a\nb\n");
    }

    #[test]
    fn test_print_boxed_default_height_stops_at_grid() {
        let mut engine = engine();
        let printed = engine.print_wrapped("a b c d", 0, 1, 1, None, None);
        assert_eq!(printed, Printed { lines: 4, chars: 2 });
    }

    #[test]
    fn test_print_boxed_char_budget_truncates() {
        let mut engine = engine();
        let printed = engine.print_wrapped("hello world", 0, 0, 6, None, Some(8));
        assert_eq!(printed, Printed { lines: 2, chars: 8 });
        assert_eq!(engine.snapshot().to_trimmed_text(), "hello\nwor\n");
    }

    #[test]
    fn test_print_boxed_zero_width() {
        let mut engine = engine();
        assert_eq!(engine.print_boxed("text", 0, 0, 0, None, None), 0);
        assert_eq!(engine.glyph_at(0, 0), None);
    }

    #[test]
    fn test_fill_space() {
        let mut engine = Engine::new(Canvas::new(40, 24), 8, Some(8)).unwrap();
        engine.set_background(Rgba::rgb(1, 2, 3));
        engine.fill(SPACE);
        for row in 0..3 {
            for col in 0..5 {
                assert_eq!(engine.glyph_at(col, row), Some(' '));
            }
        }
        assert_eq!(engine.surface().pixel(39, 23), Some(Rgba::rgb(1, 2, 3)));
    }

    #[test]
    fn test_fill_full_block_uses_foreground() {
        let mut engine = engine();
        engine.set_foreground(Rgba::rgb(9, 9, 9));
        engine.fill(FULL_BLOCK);
        assert_eq!(engine.glyph_at(9, 2), Some(FULL_BLOCK));
        assert_eq!(engine.surface().pixel(79, 47), Some(Rgba::rgb(9, 9, 9)));
    }

    #[test]
    fn test_fill_other_glyph() {
        let mut engine = engine();
        engine.fill('#');
        assert_eq!(engine.snapshot().lines, vec!["##########"; 3]);
    }

    #[test]
    fn test_with_paint_restores() {
        let mut engine = engine();
        let before = engine.paint();
        let highlight = before.with_foreground(Rgba::rgb(255, 255, 0));
        let seen = engine.with_paint(highlight, |e| e.paint());
        assert_eq!(seen, highlight);
        assert_eq!(engine.paint(), before);
    }

    #[test]
    fn test_pointer_events_update_state() {
        let mut engine = engine();
        engine.pointer_move(20.0, 20.0).unwrap();
        assert_eq!(engine.pointer(), Some(GridPos::new(2, 1)));
        engine.pointer_down(20.0, 20.0).unwrap();
        assert!(engine.input().is_pointer_down());
        engine.blur().unwrap();
        assert!(!engine.input().is_pointer_down());
        engine.pointer_move(500.0, 20.0).unwrap();
        assert_eq!(engine.pointer(), None);
    }

    #[test]
    fn test_key_events_and_listeners() {
        let mut engine = engine();
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        engine
            .on_named("keydown", move |event| {
                if let Event::Key { code } = event {
                    assert_eq!(code, "Space");
                }
                seen.set(seen.get() + 1);
                Ok(())
            })
            .unwrap();

        engine.key_down("Space").unwrap();
        assert!(engine.is_key_down("Space"));
        engine.key_up("Space").unwrap();
        assert!(!engine.is_key_down("Space"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_listener_error_surfaces() {
        let mut engine = engine();
        engine.on(EventKind::PointerUp, |_| Err("listener failed".into()));
        let err = engine.pointer_up(1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::Listener {
                event: EventKind::PointerUp,
                ..
            }
        ));
        // State was updated before dispatch
        assert_eq!(engine.pointer(), Some(GridPos::new(0, 0)));
    }

    #[test]
    fn test_events_do_not_paint() {
        let mut engine = engine();
        engine.key_down("KeyA").unwrap();
        engine.pointer_down(1.0, 1.0).unwrap();
        assert_eq!(engine.snapshot(), GridSnapshot::from_buffer(&GlyphBuffer::new(10, 3)));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let mut engine = engine();
        engine.print("ab█", i64::MAX - 1, i64::MIN);
        engine.print("ab", i64::MIN, i64::MAX);
        engine.print_boxed("one two three", i64::MAX, i64::MIN, 4, None, None);
        engine.print_boxed("one two three", 0, i64::MIN, 4, Some(3), None);
        assert_eq!(engine.snapshot(), GridSnapshot::from_buffer(&GlyphBuffer::new(10, 3)));
    }

    #[test]
    fn test_saturating_u32() {
        assert_eq!(saturating_u32(7), 7);
        assert_eq!(saturating_u32(u32::MAX as usize), u32::MAX);
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);
    }
}
