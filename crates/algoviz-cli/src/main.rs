//! Algorithm trace CLI.
//!
//! Provides the `algoviz` binary, which runs either trace engine locally and
//! prints the result as JSON. Uses the same `sort::run` / `search::run`
//! entry points as the HTTP server, so traces are identical from both.

use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use algoviz_core::{Position, Trace, TraceError};
use algoviz_engine::{input, search, sort};

/// Instrumented sorting and grid-search traces.
#[derive(Parser)]
#[command(name = "algoviz", about = "Instrumented sorting and grid-search traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print per-kind step counts instead of the full trace.
    #[arg(long, global = true)]
    summary: bool,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Trace a sort: bubble, selection, insertion, quick, heap.
    Sort {
        algorithm: String,

        /// Comma-separated input, e.g. "5,3,8,1".
        #[arg(short, long, conflicts_with = "random")]
        values: Option<String>,

        /// Generate a random array of this length instead.
        #[arg(short, long)]
        random: Option<usize>,

        /// Seed for --random (default: derived from the clock).
        #[arg(short, long, requires = "random")]
        seed: Option<u64>,
    },
    /// Trace a grid search: bfs, dfs.
    Pathfind {
        algorithm: String,

        /// JSON file holding the (0|1)[][] occupancy grid; 1 is a wall.
        #[arg(short, long)]
        grid: PathBuf,

        /// Start cell as "row,col".
        #[arg(short, long, value_parser = parse_position)]
        start: Position,

        /// End cell as "row,col".
        #[arg(short, long, value_parser = parse_position)]
        end: Position,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sort {
            algorithm,
            values,
            random,
            seed,
        } => run_sort(&algorithm, values, random, seed),
        Commands::Pathfind {
            algorithm,
            grid,
            start,
            end,
        } => run_pathfind(&algorithm, &grid, start, end),
    };

    match result {
        Ok(trace) => {
            print_trace(&trace, cli.summary, cli.pretty);
        }
        Err(CliError::Trace(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        Err(CliError::Io(msg)) => {
            eprintln!("I/O error: {}", msg);
            process::exit(3);
        }
    }
}

/// Failures of a CLI run. Exit code 1 for engine errors, 3 for I/O.
#[derive(Debug)]
enum CliError {
    Trace(TraceError),
    Io(String),
}

impl From<TraceError> for CliError {
    fn from(err: TraceError) -> Self {
        CliError::Trace(err)
    }
}

fn run_sort(
    algorithm: &str,
    values: Option<String>,
    random: Option<usize>,
    seed: Option<u64>,
) -> Result<Trace, CliError> {
    let values = match (values, random) {
        (Some(text), _) => input::parse_values(&text)?,
        (None, len) => {
            let seed = seed.unwrap_or_else(clock_seed);
            let len = len.unwrap_or(input::DEFAULT_RANDOM_LEN);
            eprintln!("random input: len={} seed={}", len, seed);
            input::random_values(len, seed)
        }
    };
    Ok(sort::run_named(algorithm, &values)?)
}

fn run_pathfind(
    algorithm: &str,
    grid_path: &Path,
    start: Position,
    end: Position,
) -> Result<Trace, CliError> {
    let text = std::fs::read_to_string(grid_path).map_err(|e| {
        CliError::Io(format!("failed to read grid '{}': {}", grid_path.display(), e))
    })?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| TraceError::invalid_input(format!("grid file is not JSON: {}", e)))?;
    let grid = input::grid_from_json(&value)?;
    Ok(search::run_named(algorithm, &grid, start, end)?)
}

fn print_trace(trace: &Trace, summary: bool, pretty: bool) {
    let value = if summary {
        serde_json::json!(trace.stats())
    } else {
        serde_json::json!({ "steps": trace })
    };
    let json = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize trace: {}\"}}", e));
    println!("{}", json);
}

/// Parse a `row,col` pair.
fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid position '{}', expected row,col", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{}'", row.trim()))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", col.trim()))?;
    Ok(Position(row, col))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
