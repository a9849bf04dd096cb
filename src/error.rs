//! Errors raised while reading a grid or querying its components.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GridError {
    /// The grid is empty, not square, or has rows of different lengths.
    InvalidGrid { reason: String },

    /// A coordinate or linear index lies outside the grid.
    OutOfBounds { row: usize, col: usize, dim: usize },

    /// A token in the input could not be read as an integer.
    Parse { line: usize, token: String },

    /// The union-find areas and the flood-fill areas differ on `cells` cells.
    Disagreement { cells: usize },

    /// The configuration header is not a JSON object.
    Config { reason: String },

    Io(io::Error),
}

impl GridError {
    pub fn invalid<S: Into<String>>(reason: S) -> GridError {
        GridError::InvalidGrid { reason: reason.into() }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidGrid { reason } => {
                write!(f, "invalid grid: {}", reason)
            }
            GridError::OutOfBounds { row, col, dim } => {
                write!(f, "row={}, col={} pair out of bounds for a {}x{} grid", row, col, dim, dim)
            }
            GridError::Parse { line, token } => {
                write!(f, "line {}: expected an integer, got {:?}", line, token)
            }
            GridError::Disagreement { cells } => {
                write!(f, "union-find and flood fill disagree on {} cells", cells)
            }
            GridError::Config { reason } => write!(f, "bad configuration: {}", reason),
            GridError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> GridError {
        GridError::Io(e)
    }
}
