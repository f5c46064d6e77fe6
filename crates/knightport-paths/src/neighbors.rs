use knightport_core::{Grid, Point};

use crate::traits::Pather;

/// The eight L-shaped knight offsets as `(row, col)` deltas, in canonical
/// enumeration order.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Whether `to` is one knight move away from `from`.
#[inline]
pub fn is_knight_move(from: Point, to: Point) -> bool {
    let dr = (to.row() - from.row()).abs();
    let dc = (to.col() - from.col()).abs();
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

/// Knight-move generator over a [`Grid`].
///
/// Yields the in-bounds open cells one knight move away from a position, in
/// [`KNIGHT_OFFSETS`] order.
#[derive(Clone, Copy, Debug)]
pub struct KnightMoves<'a> {
    grid: &'a Grid,
}

impl<'a> KnightMoves<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Iterate over the legal knight moves from `p`.
    pub fn moves_from(self, p: Point) -> impl Iterator<Item = Point> + 'a {
        let grid = self.grid;
        KNIGHT_OFFSETS
            .into_iter()
            .map(move |(dr, dc)| p.shift(dc, dr))
            .filter(move |&q| grid.is_open(q))
    }
}

impl Pather for KnightMoves<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.moves_from(p));
    }
}
