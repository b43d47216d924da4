//! Errors raised while building levels from raw grid data.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level grid has no tiles")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile code {code} at ({x}, {y})")]
    UnknownTile { x: usize, y: usize, code: u8 },

    #[error("level grid is {width}x{height}, larger than {max}x{max}")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("no levels to load")]
    NoLevels,

    /// Wraps an error from one level of a multi-level document.
    #[error("level {index}: {cause}")]
    InLevel { index: usize, cause: Box<LevelError> },

    #[error("invalid level document: {0}")]
    Json(String),
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        LevelError::Json(err.to_string())
    }
}
