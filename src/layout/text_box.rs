//! Text boxes
//!
//! A box is a fixed rectangle of cells with an optional border ring and a
//! padding margin inside it. Text printed into the box is wrapped to the
//! content rectangle and never overflows it vertically.

use tracing::trace;

use crate::engine::Engine;
use crate::renderer::Surface;

use super::border::{BorderPosition, BorderStyle};
use super::component::TextItem;
use super::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    border: Option<BorderStyle>,
    /// Blank cells between border and content
    padding: usize,
}

impl TextBox {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            border: None,
            padding: 0,
        }
    }

    pub fn with_border(mut self, style: BorderStyle) -> Self {
        self.border = Some(style);
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn set_border(&mut self, style: Option<BorderStyle>) {
        self.border = style;
    }

    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
    }

    pub fn border(&self) -> Option<&BorderStyle> {
        self.border.as_ref()
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Outer rectangle as `(x, y, width, height)`
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Interior after border and padding; `None` when it has no area.
    ///
    /// The ring is always reserved, with or without a border style.
    pub fn content_rect(&self) -> Option<Rect> {
        let inset = i64::try_from(self.padding)
            .unwrap_or(i64::MAX)
            .saturating_add(1);
        let width = self.width.saturating_sub(inset.saturating_mul(2));
        let height = self.height.saturating_sub(inset.saturating_mul(2));
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Rect::new(
            self.x.saturating_add(inset),
            self.y.saturating_add(inset),
            width as usize,
            height as usize,
        ))
    }

    /// Classify a cell on the border ring; `None` for interior or outside cells
    pub fn position(&self, col: i64, row: i64) -> Option<BorderPosition> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }
        let right = self.x.saturating_add(self.width - 1);
        let bottom = self.y.saturating_add(self.height - 1);
        if col < self.x || col > right || row < self.y || row > bottom {
            return None;
        }

        let position = if col == self.x {
            if row == self.y {
                BorderPosition::TopLeft
            } else if row == bottom {
                BorderPosition::BottomLeft
            } else {
                BorderPosition::Left
            }
        } else if col == right {
            if row == self.y {
                BorderPosition::TopRight
            } else if row == bottom {
                BorderPosition::BottomRight
            } else {
                BorderPosition::Right
            }
        } else if row == self.y {
            BorderPosition::Top
        } else if row == bottom {
            BorderPosition::Bottom
        } else {
            return None;
        };
        Some(position)
    }

    /// Border glyph for a cell
    pub fn border_at(&self, col: i64, row: i64) -> Option<char> {
        let style = self.border.as_ref()?;
        self.position(col, row).map(|position| style.glyph(position))
    }

    /// Paint the border ring. Without a style, nothing is drawn.
    pub fn print_border<S: Surface>(&self, engine: &mut Engine<S>) {
        let Some(style) = &self.border else {
            return;
        };
        if self.width <= 0 || self.height <= 0 {
            trace!("Degenerate box {:?}, no border", self.bounds());
            return;
        }

        let right = self.x.saturating_add(self.width - 1);
        let bottom = self.y.saturating_add(self.height - 1);

        if let BorderStyle::Uniform(glyph) = style {
            let horizontal: String = std::iter::repeat(*glyph)
                .take(self.width as usize)
                .collect();
            engine.print(&horizontal, self.x, self.y);
            engine.print(&horizontal, self.x, bottom);

            for row in self.y.saturating_add(1)..bottom {
                print_glyph(engine, *glyph, self.x, row);
                print_glyph(engine, *glyph, right, row);
            }
            return;
        }

        for col in self.x..=right {
            for row in [self.y, bottom] {
                if let Some(glyph) = self.border_at(col, row) {
                    print_glyph(engine, glyph, col, row);
                }
            }
        }
        for row in self.y.saturating_add(1)..bottom {
            for col in [self.x, right] {
                if let Some(glyph) = self.border_at(col, row) {
                    print_glyph(engine, glyph, col, row);
                }
            }
        }
    }

    /// Wrap `text` into the content rectangle.
    ///
    /// Returns the number of wrapped lines, 0 when the box has no content area.
    pub fn print_text<S: Surface>(
        &self,
        engine: &mut Engine<S>,
        text: &str,
        max_chars: Option<usize>,
    ) -> usize {
        let Some(content) = self.content_rect() else {
            return 0;
        };
        engine.print_boxed(
            text,
            content.x,
            content.y,
            content.width,
            Some(content.height),
            max_chars,
        )
    }

    /// Lay out `items` top to bottom in the content rectangle.
    ///
    /// The character budget is shared: each item spends what it painted and
    /// the next one gets the rest. Layout stops once the budget is spent or
    /// the next item would start below the content rectangle. Returns the
    /// rows consumed, at most the content height.
    pub fn print_items<S: Surface>(
        &self,
        engine: &mut Engine<S>,
        items: &mut [TextItem],
        max_chars: Option<usize>,
    ) -> usize {
        let Some(content) = self.content_rect() else {
            return 0;
        };

        let mut y = content.y;
        let mut budget = max_chars;

        for item in items.iter_mut() {
            if y >= content.bottom() || budget == Some(0) {
                break;
            }

            let area = Rect::new(content.x, y, content.width, (content.bottom() - y) as usize);
            let printed = item.draw_limited(engine, area, budget);
            y += printed.lines as i64;
            if let Some(remaining) = budget.as_mut() {
                *remaining = remaining.saturating_sub(printed.chars);
            }
        }

        (y.min(content.bottom()) - content.y) as usize
    }
}

fn print_glyph<S: Surface>(engine: &mut Engine<S>, glyph: char, col: i64, row: i64) {
    let mut buf = [0u8; 4];
    engine.print(glyph.encode_utf8(&mut buf), col, row);
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// A box filling the whole grid
impl<S: Surface> From<&Engine<S>> for TextBox {
    fn from(engine: &Engine<S>) -> Self {
        TextBox::new(0, 0, engine.columns() as i64, engine.rows() as i64)
    }
}
