//! Error types for engine construction and usage
//!
//! Drawing never fails: degenerate boxes, empty text and off-grid prints are
//! silently ignored or truncated. Only construction and registration paths
//! return errors.

use std::io;

use thiserror::Error;

use crate::input::EventKind;

/// Error type returned by listeners
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Engine error type
#[derive(Error, Debug)]
pub enum Error {
    /// A surface locator did not resolve to any surface
    #[error("Couldn't find surface '{0}'")]
    SurfaceNotFound(String),

    /// Tile dimensions must be at least one pixel
    #[error("Invalid tile size {width}x{height}")]
    InvalidTileSize { width: u32, height: u32 },

    /// Event name not recognized by `on_named`
    #[error("Unknown event name '{0}'")]
    UnknownEvent(String),

    /// A listener failed; remaining listeners for the event were not run
    #[error("Listener for '{event}' failed: {source}")]
    Listener {
        event: EventKind,
        #[source]
        source: ListenerError,
    },

    /// Font could not be parsed
    #[error("Font error: {0}")]
    Font(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
