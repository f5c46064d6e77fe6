//! knightport: shortest knight-move path with one teleport, from the
//! command line.

mod args;
mod display;
mod error;
mod load;

use std::io;

use clap::Parser;
use knightport_paths::{SearchConfig, solve_with};
use tracing_subscriber::EnvFilter;

use args::Args;
use error::CliError;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr at `warn`, or `debug` with `--verbose`; `RUST_LOG` adds
/// further directives.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let mut filter = EnvFilter::from_default_env();
    for target in ["knightport", "knightport_paths"] {
        match format!("{target}={level}").parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("warning: ignoring log directive for {target}: {e}"),
        }
    }
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let content = load::read_map(args.map.as_deref())?;
    let grid = load::parse_map(&content, args.max_cells)?;
    log::info!("loaded {}x{} grid", grid.height(), grid.width());

    let config = SearchConfig {
        allow_teleport: !args.no_teleport,
        start: args.start,
        goal: args.goal,
    };
    let solution = solve_with(&grid, &config)?;

    let mut out = io::stdout().lock();
    if args.json {
        display::write_json(&mut out, &solution)?;
    } else {
        display::write_report(&mut out, &grid, &solution, !args.no_color)?;
    }
    Ok(())
}
