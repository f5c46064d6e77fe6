//! Errors raised while building a [`Grid`](crate::Grid) or validating
//! positions against it.

use std::fmt;

use crate::geom::Point;

/// Invalid input: the grid or a requested position cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row with no cells.
    Empty,
    /// Row `row` has `found` cells where `expected` were required.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A numeric marker other than open or blocked.
    InvalidMarker { value: i64, pos: Point },
    /// A map character other than open or blocked.
    InvalidChar { ch: char, pos: Point },
    /// A side longer than a [`Point`] coordinate can address.
    TooLarge { width: usize, height: usize },
    /// A start or goal position outside the grid.
    OutOfBounds { pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidMarker { value, pos } => {
                write!(f, "grid: invalid cell marker {value} at {pos}")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid: {height}x{width} exceeds the addressable size")
            }
            Self::OutOfBounds { pos } => write!(f, "grid: position {pos} is out of bounds"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(GridError::Empty.to_string(), "grid: no cells");
        let e = GridError::Ragged {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(e.to_string(), "grid: row 2 has 1 cells, expected 3");
        let e = GridError::InvalidMarker {
            value: 7,
            pos: Point::at(1, 0),
        };
        assert_eq!(e.to_string(), "grid: invalid cell marker 7 at (1, 0)");
        let e = GridError::OutOfBounds {
            pos: Point::at(-1, 4),
        };
        assert_eq!(e.to_string(), "grid: position (-1, 4) is out of bounds");
        let e = GridError::TooLarge {
            width: 1 << 31,
            height: 2,
        };
        assert_eq!(
            e.to_string(),
            "grid: 2x2147483648 exceeds the addressable size"
        );
    }
}
