use std::fmt;

use crate::geom::Point;

/// Errors that can occur when building or parsing a [`MazeGrid`](crate::MazeGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width, height or cell size is not positive.
    InvalidDimensions { width: i32, height: i32, cell_size: i32 },
    /// The number of wall entries does not match `width * height`.
    SizeMismatch { expected: usize, found: usize },
    /// Text maze whose line count or line width is not of the form `2n + 1`.
    Malformed { lines: usize, width: usize },
    /// Text maze line with a different width than the first line.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// Unexpected character at a corner or wall position of a text maze.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "maze: invalid dimensions {width}x{height} with cell size {cell_size}"
            ),
            Self::SizeMismatch { expected, found } => {
                write!(f, "maze: expected {expected} wall entries, found {found}")
            }
            Self::Malformed { lines, width } => write!(
                f,
                "maze text: {lines} lines of width {width}, both must be odd and at least 3"
            ),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze text: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "maze text: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
