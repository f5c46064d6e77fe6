//! Breadth-first search over the augmented `position × teleport_used` graph.
//!
//! Every edge, knight move or teleport, costs 1, so a FIFO frontier visits
//! states in non-decreasing distance order and the first time a goal state
//! leaves the queue its distance is minimal. One search starting from
//! `(start, false)` covers both the plain and the teleporting traversals:
//! every state reachable without the teleport stays reachable with it
//! available, so the joint search never reports a longer path than a
//! knight-moves-only search would.

use knightport_core::{Grid, GridError, Point};

use crate::PortalSearch;
use crate::neighbors::KnightMoves;
use crate::portal::{ROOT, SearchResult};
use crate::traits::Pather;

impl PortalSearch {
    /// Find the shortest knight path from `start` to `goal`, optionally
    /// spending one teleport between any two distinct open cells.
    ///
    /// Returns [`GridError::OutOfBounds`] if either endpoint is outside the
    /// grid. A blocked endpoint or a disconnected goal yields an unreachable
    /// result, not an error.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
        allow_teleport: bool,
    ) -> Result<SearchResult, GridError> {
        self.find_path_with(grid, &KnightMoves::new(grid), start, goal, allow_teleport)
    }

    /// Like [`find_path`](Self::find_path) with move edges supplied by
    /// `pather` instead of knight moves. Neighbors outside the grid or on
    /// blocked cells are ignored.
    ///
    /// With the teleport enabled each state that still holds it fans out to
    /// every open cell, which is quadratic in the grid area in the worst
    /// case. Once every teleport landing state has been discovered further
    /// fan-outs are skipped, since they could not add anything.
    pub fn find_path_with<P: Pather>(
        &mut self,
        grid: &Grid,
        pather: &P,
        start: Point,
        goal: Point,
        allow_teleport: bool,
    ) -> Result<SearchResult, GridError> {
        let si = grid
            .index(start)
            .ok_or(GridError::OutOfBounds { pos: start })?;
        let gi = grid
            .index(goal)
            .ok_or(GridError::OutOfBounds { pos: goal })?;

        if !grid.is_open(start) || !grid.is_open(goal) {
            log::debug!("portal search {start} -> {goal}: endpoint blocked");
            return Ok(SearchResult::unreachable(0));
        }
        if si == gi {
            return Ok(SearchResult {
                path: vec![start],
                distance: 0,
                used_teleport: false,
                visited: 1,
            });
        }

        log::debug!(
            "portal search {start} -> {goal} on {}x{} grid (teleport {})",
            grid.height(),
            grid.width(),
            if allow_teleport { "on" } else { "off" }
        );

        self.prepare(grid);
        let len = grid.len();
        // Teleport landing states not yet discovered. Only open cells can
        // ever be discovered, so this reaches zero exactly when the whole
        // teleported layer has been seen.
        let mut landings_left = if allow_teleport { self.open.len() } else { 0 };

        self.visit(si, ROOT, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(cs) = self.queue.pop_front() else {
                break None;
            };
            let cell = cs % len;
            if cell == gi {
                break Some(cs);
            }
            let used = cs >= len;
            let layer = if used { len } else { 0 };
            let nd = self.nodes[cs].dist + 1;

            nbuf.clear();
            pather.neighbors(grid.point(cell), &mut nbuf);

            for &np in nbuf.iter() {
                if !grid.is_open(np) {
                    continue;
                }
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.visit(layer + ni, cs, nd) && used {
                    landings_left -= 1;
                }
            }

            if used || landings_left == 0 {
                continue;
            }
            log::trace!("teleport fan-out from {} at distance {}", grid.point(cell), nd - 1);
            for k in 0..self.open.len() {
                let r = self.open[k];
                if r == cell {
                    continue;
                }
                if self.visit(len + r, cs, nd) {
                    landings_left -= 1;
                }
            }
        };

        self.nbuf = nbuf;

        let Some(gs) = found else {
            log::debug!(
                "portal search {start} -> {goal}: unreachable after {} states",
                self.discovered
            );
            return Ok(SearchResult::unreachable(self.discovered));
        };

        let result = SearchResult {
            path: self.reconstruct(grid, gs),
            distance: self.nodes[gs].dist,
            used_teleport: gs >= len,
            visited: self.discovered,
        };
        log::debug!(
            "portal search {start} -> {goal}: distance {} (teleport {}), {} states",
            result.distance,
            if result.used_teleport { "used" } else { "unused" },
            result.visited
        );
        Ok(result)
    }
}
