//! Shortest knight-move paths on a grid with one teleport.
//!
//! A traveler moves across a grid of open and blocked cells using the eight
//! L-shaped knight offsets, and may once per traversal teleport from any
//! open cell to any other open cell. Both kinds of step cost 1.
//!
//! - **Move generation** ([`KnightMoves`], or any [`Pather`])
//! - **Search** over `position × teleport_used` states ([`PortalSearch::find_path`])
//! - **Rendering** of the found path ([`render_path`])
//! - **One-call solving** ([`solve`], [`solve_with`], [`solve_markers`])
//!
//! [`PortalSearch`] owns and reuses its internal tables, so repeated queries
//! incur no allocations once they have grown to the largest grid seen.
//!
//! # Cost
//!
//! Teleport edges connect every pair of open cells, so the search is
//! quadratic in the grid area in the worst case. Bound the grid size before
//! calling in when latency matters; there is no built-in timeout.

mod bfs;
mod config;
mod neighbors;
mod portal;
mod reconstruct;
mod solve;
mod traits;
mod visualize;

pub use config::SearchConfig;
pub use neighbors::{KNIGHT_OFFSETS, KnightMoves, is_knight_move};
pub use portal::{PortalSearch, SearchResult, State, UNREACHABLE};
pub use solve::{Solution, solve, solve_markers, solve_with};
pub use traits::Pather;
pub use visualize::{BLOCKED_MARK, END_MARK, OPEN_MARK, START_MARK, render_grid, render_path, step_mark};
