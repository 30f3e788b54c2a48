// ---------------------------------------------------------------------------
// LayoutError: failures while building a city layout
// ---------------------------------------------------------------------------

use std::fmt;

use crate::zone::Zone;

/// Errors raised by the grid allocator, the packer and parameter loading.
///
/// Running out of free cells is not an error: packing simply stops.
#[derive(Debug)]
pub enum LayoutError {
    /// Cell id is outside the grid, or a footprint runs past a grid edge.
    CellOutOfRange { cell: usize },
    /// A footprint cell belongs to another zone (or to no zone).
    CellOutsideZone { cell: usize, zone: Zone },
    /// Anchor is a buffer cell that belongs to no zone.
    UnzonedCell { cell: usize },
    /// A footprint cell already carries a building.
    FootprintOccupied { cell: usize },
    /// Width, depth or height of zero.
    EmptyFootprint,
    /// Layout parameters failed validation.
    InvalidParams(String),
    /// Statistics or parameters were not valid JSON.
    Json(String),
    /// Reading an input file failed.
    Io(std::io::Error),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::CellOutOfRange { cell } => write!(f, "Cell {cell} is outside the grid"),
            LayoutError::CellOutsideZone { cell, zone } => {
                write!(f, "Cell {cell} is not part of the {} zone", zone.name())
            }
            LayoutError::UnzonedCell { cell } => write!(f, "Cell {cell} belongs to no zone"),
            LayoutError::FootprintOccupied { cell } => write!(f, "Cell {cell} is already built on"),
            LayoutError::EmptyFootprint => write!(f, "Tower dimensions must be at least 1"),
            LayoutError::InvalidParams(msg) => write!(f, "Invalid layout parameters: {msg}"),
            LayoutError::Json(msg) => write!(f, "JSON error: {msg}"),
            LayoutError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(e: std::io::Error) -> Self {
        LayoutError::Io(e)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        LayoutError::Json(e.to_string())
    }
}
