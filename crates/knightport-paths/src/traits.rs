use knightport_core::Point;

/// Minimal pathfinding interface: provides neighbor enumeration for the
/// move edges of a search.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// The order neighbors are appended in decides which of several equally
    /// short paths a search returns, so implementations must be deterministic.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
