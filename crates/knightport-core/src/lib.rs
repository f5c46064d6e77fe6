//! **knightport-core**: grid model and geometry for knight-move pathfinding.
//!
//! This crate provides the foundational types used across the *knightport*
//! workspace: grid positions, open/blocked cells, a validated immutable
//! grid, and the error type raised for invalid input.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{BLOCKED_MARKER, Cell, OPEN_MARKER};
pub use error::GridError;
pub use geom::Point;
pub use grid::Grid;
