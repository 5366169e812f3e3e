//! vibeinterval - evaluate and explain offset interval expressions

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use std::path::PathBuf;
use vibeinterval::access::{read_rows, Interval, Value};
use vibeinterval::executor::IntervalProjection;
use vibeinterval::expression::{
    fold_constant, IntervalColumn, IntervalConstant, IntervalFunction, OffsetIntervalFunction,
};

/// Shift intervals by a fixed offset and print the plan and results
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the interval column (read from column 0 of each row)
    #[arg(short = 'C', long, default_value = "ts")]
    column: String,

    /// Offset added to both bounds, in microseconds
    #[arg(short, long, allow_negative_numbers = true)]
    offset: i64,

    /// Row value as LO:HI (repeatable)
    #[arg(short, long = "row", value_parser = parse_interval, allow_hyphen_values = true)]
    rows: Vec<Interval>,

    /// Bincode row file to read rows from instead of --row
    #[arg(short, long, conflicts_with = "rows")]
    input: Option<PathBuf>,

    /// Shift a constant LO:HI instead of the column
    #[arg(long, value_parser = parse_interval, allow_hyphen_values = true)]
    constant: Option<Interval>,

    /// Fold constant expressions before evaluation
    #[arg(long)]
    fold: bool,

    /// Number of parallel evaluation lanes
    #[arg(short, long, default_value = "1")]
    lanes: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_interval(s: &str) -> std::result::Result<Interval, String> {
    let (lo, hi) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LO:HI, got '{}'", s))?;
    let lo = lo
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid lower bound '{}': {}", lo, e))?;
    let hi = hi
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid upper bound '{}': {}", hi, e))?;
    Ok(Interval::new(lo, hi))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let rows = load_rows(&args)?;
    log::info!("evaluating {} rows with {} lanes", rows.len(), args.lanes);

    let child: Box<dyn IntervalFunction> = match args.constant {
        Some(interval) => Box::new(IntervalConstant::new(interval)),
        None => Box::new(IntervalColumn::with_name(0, args.column.clone())),
    };
    let mut expression: Box<dyn IntervalFunction> =
        Box::new(OffsetIntervalFunction::new(child, args.offset));
    if args.fold {
        expression = fold_constant(expression).context("Failed to fold constant expression")?;
    }

    let projection = IntervalProjection::new(expression);
    println!("EXPLAIN {}", projection.explain());

    let intervals = projection
        .project_parallel(&rows, args.lanes)
        .context("Failed to evaluate expression")?;
    for interval in intervals {
        println!("{}", interval);
    }

    Ok(())
}

/// Rows from --input, or one single-column row per --row value.
/// Without either, a single empty row so constant expressions still print.
fn load_rows(args: &Args) -> Result<Vec<Vec<Value>>> {
    if let Some(path) = &args.input {
        return read_rows(path).context("Failed to load input rows");
    }

    if args.rows.is_empty() {
        return Ok(vec![Vec::new()]);
    }

    Ok(args
        .rows
        .iter()
        .map(|interval| vec![Value::Interval(*interval)])
        .collect())
}
