use std::collections::VecDeque;

use knightport_core::{Grid, Point};

/// Sentinel distance meaning "unreachable".
pub const UNREACHABLE: i32 = i32::MAX;

/// Parent link of the start state.
pub(crate) const ROOT: usize = usize::MAX;

/// A vertex of the augmented search graph: a position plus whether the
/// teleport has already been spent getting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Point,
    pub teleport_used: bool,
}

/// Outcome of a portal search.
///
/// When `path` is non-empty it starts at the start position, ends at the
/// goal, and holds `distance + 1` positions. An unreachable goal yields an
/// empty path, [`UNREACHABLE`] distance and `used_teleport == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Vec<Point>,
    pub distance: i32,
    pub used_teleport: bool,
    /// Number of states discovered by the search.
    pub visited: usize,
}

impl SearchResult {
    pub(crate) fn unreachable(visited: usize) -> Self {
        Self {
            path: Vec::new(),
            distance: UNREACHABLE,
            used_teleport: false,
            visited,
        }
    }

    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

// ---------------------------------------------------------------------------
// Internal per-state bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct StateNode {
    pub(crate) parent: usize,
    pub(crate) dist: i32,
    pub(crate) generation: u32,
}

impl Default for StateNode {
    fn default() -> Self {
        Self {
            parent: ROOT,
            dist: UNREACHABLE,
            generation: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// PortalSearch
// ---------------------------------------------------------------------------

/// Breadth-first search over `position × teleport_used`.
///
/// `PortalSearch` owns the visited/predecessor table and the frontier queue
/// so that repeated queries reuse their allocations. States are stored flat:
/// state `(p, false)` lives at `index(p)` and `(p, true)` at
/// `grid.len() + index(p)`.
///
/// A `PortalSearch` is not shared between threads; give each thread its own.
#[derive(Default)]
pub struct PortalSearch {
    pub(crate) nodes: Vec<StateNode>,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<usize>,
    /// Flat indices of the open cells of the current grid, row-major.
    pub(crate) open: Vec<usize>,
    pub(crate) discovered: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PortalSearch {
    /// Create a search with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search whose caches already fit grids of `cells` cells.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            nodes: vec![StateNode::default(); 2 * cells],
            queue: VecDeque::with_capacity(cells),
            open: Vec::with_capacity(cells),
            nbuf: Vec::with_capacity(8),
            ..Self::default()
        }
    }

    /// Number of states the caches currently hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Reset the caches for a search over `grid`.
    ///
    /// Bumping the generation lazily invalidates every node; the table is
    /// only touched eagerly when it must grow or the counter wraps.
    pub(crate) fn prepare(&mut self, grid: &Grid) {
        let states = 2 * grid.len();
        if self.nodes.len() < states {
            self.nodes.resize(states, StateNode::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.queue.clear();
        self.open.clear();
        self.open
            .extend(grid.open_cells().filter_map(|p| grid.index(p)));
        self.discovered = 0;
    }

    /// Mark state `s` as discovered from `parent` at `dist` and enqueue it.
    ///
    /// Returns `false` if `s` was already discovered in this search.
    #[inline]
    pub(crate) fn visit(&mut self, s: usize, parent: usize, dist: i32) -> bool {
        let n = &mut self.nodes[s];
        if n.generation == self.generation {
            return false;
        }
        n.generation = self.generation;
        n.parent = parent;
        n.dist = dist;
        self.discovered += 1;
        self.queue.push_back(s);
        true
    }

    /// Decode a flat state index against `grid`.
    #[inline]
    pub(crate) fn state(grid: &Grid, s: usize) -> State {
        let len = grid.len();
        State {
            pos: grid.point(s % len),
            teleport_used: s >= len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_grows_to_two_layers() {
        let grid = Grid::parse("...\n.#.").unwrap();
        let mut ps = PortalSearch::new();
        assert_eq!(ps.capacity(), 0);
        ps.prepare(&grid);
        assert_eq!(ps.capacity(), 12);
        assert_eq!(ps.generation, 1);
        assert_eq!(ps.open, vec![0, 1, 2, 3, 5]);
    }

    #[test]
    fn prepare_smaller_grid_preserves_capacity() {
        let big = Grid::parse(&".....\n".repeat(5)).unwrap();
        let small = Grid::parse("..\n..").unwrap();
        let mut ps = PortalSearch::with_capacity(big.len());
        assert_eq!(ps.capacity(), 50);
        ps.prepare(&small);
        assert_eq!(ps.capacity(), 50);
        assert_eq!(ps.open.len(), 4);
    }

    #[test]
    fn visit_only_once_per_generation() {
        let grid = Grid::parse("..\n..").unwrap();
        let mut ps = PortalSearch::new();
        ps.prepare(&grid);
        assert!(ps.visit(3, ROOT, 0));
        assert!(!ps.visit(3, 1, 5));
        assert_eq!(ps.nodes[3].dist, 0);
        assert_eq!(ps.discovered, 1);
        assert_eq!(ps.queue.len(), 1);

        // A new search forgets the previous one.
        ps.prepare(&grid);
        assert!(ps.queue.is_empty());
        assert!(ps.visit(3, 1, 2));
        assert_eq!(ps.nodes[3].parent, 1);
    }

    #[test]
    fn generation_wrap_resets_nodes() {
        let grid = Grid::parse("..").unwrap();
        let mut ps = PortalSearch::new();
        ps.prepare(&grid);
        ps.visit(0, ROOT, 0);
        ps.generation = u32::MAX;
        ps.prepare(&grid);
        assert_eq!(ps.generation, 1);
        assert!(ps.visit(0, ROOT, 0));
    }

    #[test]
    fn state_decoding() {
        let grid = Grid::parse("...\n...").unwrap();
        assert_eq!(
            PortalSearch::state(&grid, 4),
            State {
                pos: Point::at(1, 1),
                teleport_used: false
            }
        );
        assert_eq!(
            PortalSearch::state(&grid, 6 + 2),
            State {
                pos: Point::at(0, 2),
                teleport_used: true
            }
        );
    }
}
