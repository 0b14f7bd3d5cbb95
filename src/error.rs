//! Error types for rectgrid

use std::io;

use thiserror::Error;

use crate::geometry::Rectangle;

/// Result type alias for rectgrid operations
pub type Result<T> = std::result::Result<T, RectGridError>;

/// Errors that can occur while turning a rectangle list into a grid
#[derive(Error, Debug)]
pub enum RectGridError {
    /// The input file could not be opened or read
    #[error("Error reading file: {0}")]
    FileRead(#[source] io::Error),

    /// A line did not hold exactly four integer coordinates
    #[error("Invalid rectangle format ({line})")]
    InvalidFormat { line: String },

    /// No rectangles reached the renderer
    #[error("Cannot render an empty rectangle list")]
    EmptyInput,

    /// Bounding box has no cells on at least one axis (inverted corners)
    #[error("Degenerate grid: {cells_x}x{cells_y} cells")]
    DegenerateGrid { cells_x: i64, cells_y: i64 },

    /// A re-anchored rectangle has a corner outside the i32 range
    #[error("Rectangle {rect:?} cannot be moved without leaving the coordinate range")]
    CoordinateOverflow { rect: Rectangle },

    /// Grid config could not be read, parsed or validated
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The output document could not be written
    #[error("Failed to write HTML: {0}")]
    Write(#[source] io::Error),
}

impl RectGridError {
    /// Only a missing or unreadable input file is reported and swallowed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RectGridError::FileRead(_))
    }
}
