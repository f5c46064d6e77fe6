//! Map loading: text or JSON, from a file or stdin.

use std::io::Read;
use std::path::Path;

use knightport_core::Grid;

use crate::error::CliError;

/// Read the map at `path`, or stdin for `None` and `-`.
pub fn read_map(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

/// Decode a map. Content starting with `[` is a JSON array of 0/1 rows,
/// anything else is a text map.
pub fn parse_map(content: &str, max_cells: usize) -> Result<Grid, CliError> {
    let grid = if content.trim_start().starts_with('[') {
        // Deserializing a Grid validates it like Grid::from_markers.
        serde_json::from_str::<Grid>(content)?
    } else {
        Grid::parse(content)?
    };
    if grid.len() > max_cells {
        return Err(CliError::TooLarge {
            cells: grid.len(),
            max: max_cells,
        });
    }
    Ok(grid)
}
