use std::fmt;

use knightport_core::GridError;

/// Everything that can stop the command before a result is printed.
#[derive(Debug)]
pub enum CliError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Grid(GridError),
    TooLarge { cells: usize, max: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read map: {e}"),
            Self::Json(e) => write!(f, "invalid JSON map: {e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::TooLarge { cells, max } => {
                write!(f, "grid has {cells} cells, limit is {max} (see --max-cells)")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::TooLarge { .. } => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knightport_core::Point;

    #[test]
    fn too_large_names_the_flag() {
        let e = CliError::TooLarge {
            cells: 20_000,
            max: 10_000,
        };
        assert_eq!(
            e.to_string(),
            "grid has 20000 cells, limit is 10000 (see --max-cells)"
        );
        assert!(std::error::Error::source(&e).is_none());
    }

    #[test]
    fn grid_errors_show_their_own_message() {
        let e = CliError::from(GridError::OutOfBounds {
            pos: Point::at(5, 5),
        });
        assert_eq!(e.to_string(), "grid: position (5, 5) is out of bounds");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn json_map_errors_keep_the_grid_message() {
        let e = crate::load::parse_map("[[0,2]]", 100).unwrap_err();
        let msg = e.to_string();
        assert!(msg.starts_with("invalid JSON map: "), "{msg}");
        assert!(msg.contains("invalid cell marker 2 at (0, 1)"), "{msg}");
    }
}
