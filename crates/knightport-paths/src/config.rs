use knightport_core::{Grid, GridError, Point};

/// Search options.
///
/// The defaults search from the top-left to the bottom-right corner with the
/// single teleport available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Whether the one teleport edge may be taken.
    pub allow_teleport: bool,
    /// Start position; top-left corner when `None`.
    pub start: Option<Point>,
    /// Goal position; bottom-right corner when `None`.
    pub goal: Option<Point>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_teleport: true,
            start: None,
            goal: None,
        }
    }
}

impl SearchConfig {
    /// Enable or disable the teleport edge (builder).
    pub fn with_teleport(mut self, allow: bool) -> Self {
        self.allow_teleport = allow;
        self
    }

    /// Set the start position (builder).
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the goal position (builder).
    pub fn with_goal(mut self, goal: Point) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Resolve the start and goal against `grid`.
    ///
    /// Fails with [`GridError::OutOfBounds`] if an explicit endpoint lies
    /// outside the grid.
    pub fn endpoints(&self, grid: &Grid) -> Result<(Point, Point), GridError> {
        let start = self.start.unwrap_or_else(|| grid.top_left());
        let goal = self.goal.unwrap_or_else(|| grid.bottom_right());
        for pos in [start, goal] {
            if !grid.in_bounds(pos) {
                return Err(GridError::OutOfBounds { pos });
            }
        }
        Ok((start, goal))
    }
}
