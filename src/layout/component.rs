//! Text items
//!
//! Items are laid out top to bottom inside a box. Each one draws itself
//! into an area and reports how many rows it took, so the next item starts
//! right below it.

use std::fmt;

use crate::core::wrap::char_len;
use crate::core::{GridPos, Rgba};
use crate::engine::{Engine, Printed};
use crate::renderer::Surface;

use super::Rect;

/// Handler run when a span is clicked
pub type ClickHandler = Box<dyn FnMut(GridPos)>;

/// A piece of text in a box layout
pub enum TextItem {
    Plain(String),
    Span(InteractiveSpan),
}

impl TextItem {
    pub fn text(&self) -> &str {
        match self {
            TextItem::Plain(text) => text,
            TextItem::Span(span) => span.text(),
        }
    }

    /// Draw into `area`, returning the rows consumed
    pub fn draw<S: Surface>(&mut self, engine: &mut Engine<S>, area: Rect) -> usize {
        self.draw_limited(engine, area, None).lines
    }

    /// Draw with a character budget
    pub fn draw_limited<S: Surface>(
        &mut self,
        engine: &mut Engine<S>,
        area: Rect,
        max_chars: Option<usize>,
    ) -> Printed {
        match self {
            TextItem::Plain(text) => engine.print_wrapped(
                text,
                area.x,
                area.y,
                area.width,
                Some(area.height),
                max_chars,
            ),
            TextItem::Span(span) => span.draw_limited(engine, area, max_chars),
        }
    }

    /// Activate the item if `pos` hits it
    pub fn click(&mut self, pos: GridPos) -> bool {
        match self {
            TextItem::Plain(_) => false,
            TextItem::Span(span) => span.click(pos),
        }
    }
}

impl fmt::Debug for TextItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextItem::Plain(text) => f.debug_tuple("Plain").field(text).finish(),
            TextItem::Span(span) => f.debug_tuple("Span").field(span).finish(),
        }
    }
}

impl From<&str> for TextItem {
    fn from(text: &str) -> Self {
        TextItem::Plain(text.to_string())
    }
}

impl From<String> for TextItem {
    fn from(text: String) -> Self {
        TextItem::Plain(text)
    }
}

impl From<InteractiveSpan> for TextItem {
    fn from(span: InteractiveSpan) -> Self {
        TextItem::Span(span)
    }
}

/// Text that highlights under the pointer and can be clicked.
///
/// Hover state is recomputed on every draw from the engine's last known
/// pointer cell and the span's freshly wrapped extent.
pub struct InteractiveSpan {
    text: String,
    /// Foreground while hovered
    highlight: Rgba,
    on_click: Option<ClickHandler>,
    /// Extent at the last draw
    bounds: Option<Rect>,
    hovered: bool,
}

impl fmt::Debug for InteractiveSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveSpan")
            .field("text", &self.text)
            .field("highlight", &self.highlight)
            .field("bounds", &self.bounds)
            .field("hovered", &self.hovered)
            .finish()
    }
}

impl InteractiveSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: Rgba::rgb(255, 255, 0),
            on_click: None,
            bounds: None,
            hovered: false,
        }
    }

    pub fn with_highlight(mut self, color: Rgba) -> Self {
        self.highlight = color;
        self
    }

    pub fn on_click(mut self, handler: impl FnMut(GridPos) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Extent at the last draw; `None` before the first draw
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn hit_test(&self, pos: GridPos) -> bool {
        self.bounds.is_some_and(|bounds| bounds.contains(pos))
    }

    /// Run the click handler if `pos` lies on the span
    pub fn click(&mut self, pos: GridPos) -> bool {
        if !self.hit_test(pos) {
            return false;
        }
        if let Some(handler) = self.on_click.as_mut() {
            handler(pos);
        }
        true
    }

    pub fn draw<S: Surface>(&mut self, engine: &mut Engine<S>, area: Rect) -> usize {
        self.draw_limited(engine, area, None).lines
    }

    pub fn draw_limited<S: Surface>(
        &mut self,
        engine: &mut Engine<S>,
        area: Rect,
        max_chars: Option<usize>,
    ) -> Printed {
        let lines = engine.split(&self.text, area.width);
        let (width, height) = painted_extent(&lines, area.height, max_chars);
        let bounds = Rect::new(area.x, area.y, width, height);

        self.hovered = engine.pointer().is_some_and(|pos| bounds.contains(pos));
        self.bounds = Some(bounds);

        let paint = if self.hovered {
            engine.paint().with_foreground(self.highlight)
        } else {
            engine.paint()
        };
        let text = &self.text;
        engine.with_paint(paint, |engine| {
            engine.print_wrapped(
                text,
                area.x,
                area.y,
                area.width,
                Some(area.height),
                max_chars,
            )
        })
    }
}

/// Extent of the part of `lines` a wrapped print paints: at most `height`
/// rows, truncated once `max_chars` characters are spent
fn painted_extent(lines: &[String], height: usize, max_chars: Option<usize>) -> (usize, usize) {
    let mut budget = max_chars.unwrap_or(usize::MAX);
    let (mut width, mut rows) = (0, 0);

    for line in lines.iter().take(height) {
        if budget == 0 {
            break;
        }
        let len = char_len(line).min(budget);
        budget -= len;
        width = width.max(len);
        rows += 1;
    }

    (width, rows)
}
