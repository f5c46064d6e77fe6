//! Text rendering of a grid with a path drawn over it.

use knightport_core::{Cell, Grid, Point};

pub const START_MARK: char = 'S';
pub const END_MARK: char = 'E';
pub const BLOCKED_MARK: char = '#';
pub const OPEN_MARK: char = '.';

/// Marker for the `step`-th position of a path (neither first nor last).
#[inline]
pub fn step_mark(step: usize) -> char {
    char::from_digit((step % 10) as u32, 10).unwrap_or(OPEN_MARK)
}

/// Render `grid` one character per cell, one string per row.
pub fn render_grid(grid: &Grid) -> Vec<String> {
    let width = grid.width() as usize;
    let mut rows = Vec::with_capacity(grid.height() as usize);
    let mut row = String::with_capacity(width);
    for (p, cell) in grid.iter() {
        row.push(match cell {
            Cell::Open => OPEN_MARK,
            Cell::Blocked => BLOCKED_MARK,
        });
        if p.x as usize + 1 == width {
            rows.push(std::mem::take(&mut row));
        }
    }
    rows
}

/// Render `grid` with `path` drawn over it.
///
/// The first position is marked [`START_MARK`], the last [`END_MARK`], and
/// every position in between with the last digit of its step index. A
/// single-position path shows only the start. An empty path renders
/// nothing.
pub fn render_path(grid: &Grid, path: &[Point]) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    let mut canvas: Vec<Vec<char>> = render_grid(grid)
        .into_iter()
        .map(|row| row.chars().collect())
        .collect();
    let last = path.len() - 1;
    for (i, &p) in path.iter().enumerate() {
        if !grid.in_bounds(p) {
            continue;
        }
        let mark = if i == 0 {
            START_MARK
        } else if i == last {
            END_MARK
        } else {
            step_mark(i)
        };
        canvas[p.y as usize][p.x as usize] = mark;
    }
    canvas
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_grid() {
        let grid = Grid::parse(".#.\n..#").unwrap();
        assert_eq!(render_grid(&grid), vec![".#.", "..#"]);
    }

    #[test]
    fn path_markers() {
        let grid = Grid::parse("...\n...\n..#").unwrap();
        let path = [Point::at(0, 0), Point::at(1, 2), Point::at(2, 0), Point::at(0, 1)];
        assert_eq!(render_path(&grid, &path), vec!["SE.", "..1", "2.#"]);
    }

    #[test]
    fn teleport_path() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        let path = [Point::at(0, 0), Point::at(2, 2)];
        assert_eq!(render_path(&grid, &path), vec!["S..", "...", "..E"]);
    }

    #[test]
    fn single_position_path_shows_start() {
        let grid = Grid::parse(".").unwrap();
        assert_eq!(render_path(&grid, &[Point::at(0, 0)]), vec!["S"]);
    }

    #[test]
    fn empty_path_renders_nothing() {
        let grid = Grid::parse("..").unwrap();
        assert!(render_path(&grid, &[]).is_empty());
    }

    #[test]
    fn step_marks_cycle() {
        assert_eq!(step_mark(1), '1');
        assert_eq!(step_mark(9), '9');
        assert_eq!(step_mark(10), '0');
        assert_eq!(step_mark(23), '3');
    }

    #[test]
    fn long_path_wraps_digits() {
        let grid = Grid::parse(&".".repeat(13)).unwrap();
        let path: Vec<Point> = (0..13).map(|c| Point::at(0, c)).collect();
        assert_eq!(render_path(&grid, &path), vec!["S12345678901E"]);
    }
}
