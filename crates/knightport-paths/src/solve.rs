//! One-call entry points: validate, search, render.

use knightport_core::{Grid, GridError, Point};

use crate::config::SearchConfig;
use crate::portal::{PortalSearch, SearchResult, UNREACHABLE};
use crate::visualize::render_path;

/// A finished query: the search result plus its rendering.
///
/// With the `serde` feature it (de)serializes as the output record:
/// `shortest_path` as `(row, col)` pairs, `distance` with `-1` for
/// unreachable, `used_teleport` and `path_visualization`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "SolutionRecord", from = "SolutionRecord")
)]
pub struct Solution {
    pub path: Vec<Point>,
    pub distance: i32,
    pub used_teleport: bool,
    pub visualization: Vec<String>,
}

impl Solution {
    fn new(grid: &Grid, result: SearchResult) -> Self {
        let visualization = render_path(grid, &result.path);
        Self {
            path: result.path,
            distance: result.distance,
            used_teleport: result.used_teleport,
            visualization,
        }
    }

    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// The distance, or `-1` when the goal is unreachable.
    #[inline]
    pub fn signed_distance(&self) -> i64 {
        if self.is_reachable() {
            i64::from(self.distance)
        } else {
            -1
        }
    }

    /// The path as `(row, col)` pairs.
    pub fn path_row_col(&self) -> Vec<(i32, i32)> {
        self.path.iter().map(|p| p.to_row_col()).collect()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SolutionRecord {
    shortest_path: Vec<(i32, i32)>,
    distance: i64,
    used_teleport: bool,
    path_visualization: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<Solution> for SolutionRecord {
    fn from(s: Solution) -> Self {
        Self {
            shortest_path: s.path_row_col(),
            distance: s.signed_distance(),
            used_teleport: s.used_teleport,
            path_visualization: s.visualization,
        }
    }
}

#[cfg(feature = "serde")]
impl From<SolutionRecord> for Solution {
    fn from(r: SolutionRecord) -> Self {
        Self {
            path: r.shortest_path.into_iter().map(Point::from).collect(),
            distance: i32::try_from(r.distance)
                .ok()
                .filter(|&d| d >= 0)
                .unwrap_or(UNREACHABLE),
            used_teleport: r.used_teleport,
            visualization: r.path_visualization,
        }
    }
}

/// Solve corner to corner with the teleport available.
pub fn solve(grid: &Grid) -> Result<Solution, GridError> {
    solve_with(grid, &SearchConfig::default())
}

/// Solve with explicit options.
pub fn solve_with(grid: &Grid, config: &SearchConfig) -> Result<Solution, GridError> {
    let (start, goal) = config.endpoints(grid)?;
    let result = PortalSearch::with_capacity(grid.len()).find_path(
        grid,
        start,
        goal,
        config.allow_teleport,
    )?;
    Ok(Solution::new(grid, result))
}

/// Validate numeric rows (`0` open, `1` blocked) and solve corner to corner.
pub fn solve_markers(rows: &[Vec<i64>]) -> Result<Solution, GridError> {
    let grid = Grid::from_markers(rows)?;
    solve(&grid)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn solution_serializes_as_output_record() {
        let grid = Grid::parse("...\n...").unwrap();
        let cfg = SearchConfig::default()
            .with_teleport(false)
            .with_goal(Point::at(1, 2));
        let s = solve_with(&grid, &cfg).unwrap();
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "shortest_path": [[0, 0], [1, 2]],
                "distance": 1,
                "used_teleport": false,
                "path_visualization": ["S..", "..E"],
            })
        );
        let back: Solution = serde_json::from_value(v).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn unreachable_serializes_as_minus_one() {
        let s = solve_markers(&[vec![1, 0], vec![0, 0]]).unwrap();
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["distance"], -1);
        assert_eq!(v["shortest_path"], serde_json::json!([]));
        let back: Solution = serde_json::from_value(v).unwrap();
        assert!(!back.is_reachable());
        assert_eq!(back, s);
    }

    #[test]
    fn config_from_json() {
        let cfg: SearchConfig = serde_json::from_str(
            r#"{"allow_teleport":false,"start":{"x":1,"y":0},"goal":null}"#,
        )
        .unwrap();
        assert_eq!(
            cfg,
            SearchConfig::default()
                .with_teleport(false)
                .with_start(Point::at(0, 1))
        );
    }
}
