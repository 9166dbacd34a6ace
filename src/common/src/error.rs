//! System-wide error types for the Bones console.

use core::fmt;

/// Console error types.
///
/// The character output path itself never fails; these cover the
/// configuration and positioning helpers around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConsoleError {
    /// Value does not name one of the 16 palette entries
    InvalidColor(u8),
    /// Cursor position lies outside the grid
    OutOfBounds {
        /// Requested column
        col: usize,
        /// Requested row
        row: usize,
    },
    /// Tab stops must be at least one column and fit on a row
    InvalidTabWidth(usize),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::InvalidColor(value) => write!(f, "invalid color code {:#x}", value),
            ConsoleError::OutOfBounds { col, row } => {
                write!(f, "position ({}, {}) is outside the screen", col, row)
            }
            ConsoleError::InvalidTabWidth(width) => write!(f, "invalid tab width {}", width),
        }
    }
}
