//! The [`Grid`] type: a rectangular, immutable map of [`Cell`]s.
//!
//! A grid is validated once at construction (non-empty, rectangular, only
//! open/blocked markers, both sides addressable by a [`Point`]) and never
//! changes afterwards, so every query is a plain O(1) lookup into row-major
//! storage.

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::Point;

/// A rectangular grid of open and blocked cells.
///
/// With the `serde` feature a grid (de)serializes as rows of numeric markers,
/// and deserialization runs the same validation as [`Grid::from_markers`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")
)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

/// Lossy coordinate for error reports on rows that are rejected anyway.
fn coord(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

/// Reject grids with a side that does not fit a [`Point`] coordinate.
fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(GridError::TooLarge { width, height });
    }
    Ok(())
}

impl Grid {
    /// Build a grid from numeric rows (`0` open, `1` blocked).
    ///
    /// Fails if there are no rows, the first row is empty, a row's length
    /// differs from the first row's, or a value is not a recognized marker.
    pub fn from_markers(rows: &[Vec<i64>]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        check_dimensions(width, rows.len())?;
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = Cell::from_marker(value).ok_or(GridError::InvalidMarker {
                    value,
                    pos: Point::new(coord(x), coord(y)),
                })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    /// Build a grid from rows of cells that are already decoded.
    pub fn from_cells(rows: &[Vec<Cell>]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        check_dimensions(width, rows.len())?;
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row: y,
                expected: width,
                found: row.len(),
            });
        }
        Ok(Self {
            cells: rows.concat(),
            width,
            height: rows.len(),
        })
    }

    /// Parse a text map, one line per row.
    ///
    /// `.` or `0` is open, `#` or `1` is blocked. Leading/trailing whitespace
    /// is trimmed from the whole string and from each line.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let row = line
                .trim()
                .chars()
                .enumerate()
                .map(|(x, ch)| {
                    Cell::from_char(ch).ok_or(GridError::InvalidChar {
                        ch,
                        pos: Point::new(coord(x), coord(y)),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_cells(&rows)
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Top-left corner.
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::at(0, 0)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.width() - 1, self.height() - 1)
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.point(i), c))
    }

    /// Iterate over open positions in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter_map(|(p, c)| if c.is_open() { Some(p) } else { None })
    }

    /// Count the open cells.
    pub fn count_open(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Rows of numeric markers, the inverse of [`from_markers`](Self::from_markers).
    pub fn to_markers(&self) -> Vec<Vec<i64>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.marker()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::from_markers(&rows)
    }
}

impl From<Grid> for Vec<Vec<i64>> {
    fn from(grid: Grid) -> Self {
        grid.to_markers()
    }
}

impl std::str::FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse(".#.\n...").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[0,1,0],[0,0,0]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<Grid>("[[0,0],[0]]").is_err());
        assert!(serde_json::from_str::<Grid>("[[0,3]]").is_err());
        assert!(serde_json::from_str::<Grid>("[]").is_err());
    }
}
