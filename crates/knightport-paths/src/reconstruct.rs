//! Path recovery from the predecessor table.

use knightport_core::{Grid, Point};

use crate::PortalSearch;
use crate::portal::ROOT;

impl PortalSearch {
    /// Walk predecessor links from state `goal` back to the start state and
    /// return the positions in traversal order.
    ///
    /// `goal` must have been discovered by the last search over `grid`.
    pub(crate) fn reconstruct(&self, grid: &Grid, goal: usize) -> Vec<Point> {
        let mut path = Vec::with_capacity(self.nodes[goal].dist as usize + 1);
        let mut s = goal;
        while s != ROOT {
            path.push(Self::state(grid, s).pos);
            s = self.nodes[s].parent;
        }
        path.reverse();
        path
    }
}
