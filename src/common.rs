//! Common error types for minegrid: malformed specifications and grid misuse.

use alloc::string::String;
use core::fmt;

/// Errors raised while reading or assembling a grid specification.
///
/// Row indices are 0-based and count data rows only (the header is not a row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The input ended before a header line was seen.
    MissingHeader,
    /// The header is not two integers separated by a single space.
    InvalidHeader { line: String },
    /// A data row ended before `expected` cells were read.
    TooFewColumns {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A data row carries more than `expected` cells.
    TooManyColumns { row: usize, expected: usize },
    /// Data continues after the declared number of rows.
    TooManyRows { expected: usize },
    /// The input ended after `found` complete rows.
    TooFewRows { expected: usize, found: usize },
    /// A character other than `.` or `*` appeared in the data region.
    InvalidCharacter {
        row: usize,
        column: usize,
        found: char,
    },
    /// Rows of a nested matrix do not share one length.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A `height x width` layout does not fit in memory.
    TooLarge { height: usize, width: usize },
    /// More mines were requested than the grid has cells.
    TooManyMines { mines: usize, cells: usize },
    /// The underlying reader failed.
    #[cfg(feature = "std")]
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::MissingHeader => write!(f, "specification is empty, expected a '<rows> <columns>' header"),
            SpecError::InvalidHeader { line } => {
                write!(f, "invalid dimensions header {:?}, expected '<rows> <columns>'", line)
            }
            SpecError::TooFewColumns { row, expected, found } => write!(
                f,
                "not enough columns in row {}: expected {}, found {}",
                row, expected, found
            ),
            SpecError::TooManyColumns { row, expected } => {
                write!(f, "too many columns in row {}: expected {}", row, expected)
            }
            SpecError::TooManyRows { expected } => {
                write!(f, "too many rows: expected {}", expected)
            }
            SpecError::TooFewRows { expected, found } => {
                write!(f, "not enough rows: expected {}, found {}", expected, found)
            }
            SpecError::InvalidCharacter { row, column, found } => write!(
                f,
                "invalid character {:?} in row {} at column {}, expected '.' or '*'",
                found, row, column
            ),
            SpecError::Ragged { row, expected, found } => write!(
                f,
                "specification is not rectangular: row {} has {} cells, expected {}",
                row, found, expected
            ),
            SpecError::TooLarge { height, width } => {
                write!(f, "a {}x{} specification is too large to allocate", height, width)
            }
            SpecError::TooManyMines { mines, cells } => {
                write!(f, "cannot place {} mines in {} cells", mines, cells)
            }
            #[cfg(feature = "std")]
            SpecError::Io { kind, message } => write!(f, "read error ({:?}): {}", kind, message),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for SpecError {
    fn from(err: std::io::Error) -> Self {
        SpecError::Io {
            kind: err.kind(),
            message: alloc::string::ToString::to_string(&err),
        }
    }
}

/// Errors returned by grid construction and access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    Degenerate { height: usize, width: usize },
    /// Coordinates lie outside `[0, height) x [0, width)`.
    OutOfBounds {
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Degenerate { height, width } => {
                write!(f, "degenerate grid {}x{}: both dimensions must be at least 1", height, width)
            }
            GridError::OutOfBounds {
                row,
                column,
                height,
                width,
            } => write!(
                f,
                "cell ({}, {}) is out of bounds for a {}x{} grid",
                row, column, height, width
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
