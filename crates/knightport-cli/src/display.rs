//! Terminal and JSON output.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use knightport_core::Grid;
use knightport_paths::{BLOCKED_MARK, END_MARK, OPEN_MARK, START_MARK, Solution, render_grid};

/// Terminal color for a rendered map character.
fn mark_color(ch: char) -> Color {
    match ch {
        START_MARK => Color::Green,
        END_MARK => Color::Red,
        BLOCKED_MARK => Color::DarkGrey,
        OPEN_MARK => Color::Reset,
        _ => Color::Yellow,
    }
}

/// Write rendered rows, coloring each marker when `color` is set.
pub fn write_rows(out: &mut impl Write, rows: &[String], color: bool) -> io::Result<()> {
    for row in rows {
        if !color {
            writeln!(out, "{row}")?;
            continue;
        }
        for ch in row.chars() {
            let c = mark_color(ch);
            if c == Color::Reset {
                queue!(out, Print(ch))?;
            } else {
                queue!(
                    out,
                    SetForegroundColor(c),
                    SetAttribute(Attribute::Bold),
                    Print(ch),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

/// Human-readable report.
pub fn write_report(
    out: &mut impl Write,
    grid: &Grid,
    solution: &Solution,
    color: bool,
) -> io::Result<()> {
    if !solution.is_reachable() {
        writeln!(out, "No path.")?;
        return write_rows(out, &render_grid(grid), color);
    }
    let steps: Vec<String> = solution.path.iter().map(|p| p.to_string()).collect();
    writeln!(
        out,
        "Distance {}{}",
        solution.distance,
        if solution.used_teleport {
            " (teleport used)"
        } else {
            ""
        }
    )?;
    writeln!(out, "Path: {}", steps.join(" -> "))?;
    write_rows(out, &solution.visualization, color)
}

/// JSON report: the serialized [`Solution`] record, `-1` for an
/// unreachable distance.
pub fn write_json(out: &mut impl Write, solution: &Solution) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, solution)?;
    writeln!(out)
}
