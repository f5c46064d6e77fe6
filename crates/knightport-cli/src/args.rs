use std::path::PathBuf;

use clap::Parser;
use knightport_core::Point;

#[derive(Parser, Debug)]
#[command(name = "knightport")]
#[command(about = "Shortest knight-move path across a grid, with one teleport")]
pub struct Args {
    /// Map file: text rows of `.`/`#` (or `0`/`1`), or a JSON array of
    /// 0/1 rows. Reads stdin when omitted or `-`.
    pub map: Option<PathBuf>,

    /// Start position as ROW,COL (default: top-left corner)
    #[arg(short, long, value_name = "ROW,COL", value_parser = parse_position)]
    pub start: Option<Point>,

    /// Goal position as ROW,COL (default: bottom-right corner)
    #[arg(short, long, value_name = "ROW,COL", value_parser = parse_position)]
    pub goal: Option<Point>,

    /// Knight moves only, no teleport
    #[arg(long)]
    pub no_teleport: bool,

    /// Refuse grids with more than this many cells
    #[arg(long, value_name = "CELLS", default_value = "10000")]
    pub max_cells: usize,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - log search statistics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse `ROW,COL` into a point.
pub fn parse_position(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row: i32 = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row \u{201c}{row}\u{201d}: {e}"))?;
    let col: i32 = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column \u{201c}{col}\u{201d}: {e}"))?;
    Ok(Point::at(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        assert_eq!(parse_position("2,3"), Ok(Point::at(2, 3)));
        assert_eq!(parse_position(" 0 , 10 "), Ok(Point::at(0, 10)));
        assert!(parse_position("2").is_err());
        assert!(parse_position("a,1").is_err());
        assert!(parse_position("1,").is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["knightport"]).unwrap();
        assert!(args.map.is_none());
        assert!(!args.no_teleport);
        assert_eq!(args.max_cells, 10_000);
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from([
            "knightport",
            "maze.txt",
            "--start",
            "1,2",
            "-g",
            "4,4",
            "--no-teleport",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.map, Some(PathBuf::from("maze.txt")));
        assert_eq!(args.start, Some(Point::at(1, 2)));
        assert_eq!(args.goal, Some(Point::at(4, 4)));
        assert!(args.no_teleport);
        assert!(args.json);
        assert!(Args::try_parse_from(["knightport", "--start", "x"]).is_err());
    }
}
