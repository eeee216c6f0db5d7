//! Input Module
//!
//! Host input events update shared input state and are forwarded to
//! registered listeners. Events never paint: the next frame's draw reads the
//! state (pointer cell, keys down) and decides what to show.
//!
//! # Dispatch
//!
//! Listeners run synchronously in registration order. A listener returning
//! an error aborts the remaining dispatch for that event and the error is
//! returned to whoever delivered the event.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::core::GridPos;
use crate::error::{Error, ListenerError, Result};

/// Recognized event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    PointerDown,
    PointerUp,
    PointerMove,
    /// The surface lost focus
    Blur,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::KeyDown,
        EventKind::KeyUp,
        EventKind::PointerDown,
        EventKind::PointerUp,
        EventKind::PointerMove,
        EventKind::Blur,
    ];

    /// The event name accepted by `on_named`
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::KeyDown => "keydown",
            EventKind::KeyUp => "keyup",
            EventKind::PointerDown => "mousedown",
            EventKind::PointerUp => "mouseup",
            EventKind::PointerMove => "mousemove",
            EventKind::Blur => "blur",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownEvent(s.to_string()))
    }
}

/// Payload handed to listeners
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Key press or release, identified by its physical key code
    Key { code: String },
    /// Pointer event at a surface-relative pixel position
    Pointer {
        x: f32,
        y: f32,
        /// Grid cell under the pointer, `None` when off-grid
        cell: Option<GridPos>,
    },
    Blur,
}

/// A registered event listener
pub type Handler = Box<dyn FnMut(&Event) -> std::result::Result<(), ListenerError>>;

/// Ordered listener list
#[derive(Default)]
pub struct Listeners {
    handlers: Vec<(EventKind, Handler)>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|(kind, _)| kind))
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one event kind
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&Event) -> std::result::Result<(), ListenerError> + 'static,
    {
        self.handlers.push((kind, Box::new(handler)));
    }

    /// Register a listener by event name
    pub fn on_named<F>(&mut self, name: &str, handler: F) -> Result<()>
    where
        F: FnMut(&Event) -> std::result::Result<(), ListenerError> + 'static,
    {
        let kind = name.parse()?;
        self.on(kind, handler);
        Ok(())
    }

    /// Run every listener registered for `kind`, in registration order
    pub fn dispatch(&mut self, kind: EventKind, event: &Event) -> Result<()> {
        for (registered, handler) in &mut self.handlers {
            if *registered == kind {
                handler(event).map_err(|source| Error::Listener {
                    event: kind,
                    source,
                })?;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// State written by input events, read at draw time
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known grid cell under the pointer
    pointer: Option<GridPos>,
    pointer_down: bool,
    /// Sparse: only keys seen at least once have an entry
    keys_down: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> Option<GridPos> {
        self.pointer
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys_down.get(code).copied().unwrap_or(false)
    }

    /// `None` if the key was never pressed or released
    pub fn key_state(&self, code: &str) -> Option<bool> {
        self.keys_down.get(code).copied()
    }

    pub(crate) fn set_key(&mut self, code: &str, down: bool) {
        self.keys_down.insert(code.to_string(), down);
    }

    pub(crate) fn set_pointer(&mut self, cell: Option<GridPos>) {
        self.pointer = cell;
    }

    pub(crate) fn set_pointer_down(&mut self, down: bool) {
        self.pointer_down = down;
    }
}
