//! Grid positions.
//!
//! Positions are spoken of as `(row, column)` pairs. A [`Point`] keeps the
//! column in `x` and the row in `y`, so a knight offset `(dr, dc)` applies as
//! `p.shift(dc, dr)`.

use std::cmp::Ordering;
use std::fmt;

/// A grid position. `x` is the column, `y` the row; both may be negative
/// for positions off the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Point at column `x`, row `y`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point at `row`, `col`.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// The point as a `(row, col)` pair.
    #[inline]
    pub const fn to_row_col(self) -> (i32, i32) {
        (self.y, self.x)
    }

    /// Offset by `dx` columns and `dy` rows.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major: the order in which a grid stores its cells.
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_row_col().cmp(&other.to_row_col())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

impl From<(i32, i32)> for Point {
    /// Reads the tuple as `(row, col)`.
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::at(row, col)
    }
}
