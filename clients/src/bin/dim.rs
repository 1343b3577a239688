//! `young-dim`: Prints the hook lengths and SU(n) dimension of one shape.
//!
//! **Usage:**
//! ```
//! young-dim 4,2,1 [--rows <n>] [--json]
//! ```
//!
//! Without `--rows` the shape is read with its own row count, so `4,2,1`
//! is an SU(3) shape and `4,2,1,0` an SU(4) one.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use young::{dimension, exact_dimension, hook_table, Shape};

/// Hook lengths and dimension of a Young diagram.
#[derive(Parser)]
#[command(name = "young-dim", about = "Hook lengths and SU(n) dimension of a Young diagram")]
struct Args {
    /// Row lengths, comma- or space-separated.
    shape: Shape,

    /// Row capacity `n` of SU(n) (default: rows given).
    #[arg(long)]
    rows: Option<usize>,

    /// Emit the result as JSON.
    #[arg(long)]
    json: bool,
}

/// JSON form of one shape.
#[derive(Serialize)]
struct Report {
    shape: Shape,
    reduced: Shape,
    dynkin_labels: Vec<u32>,
    hooks: Vec<Vec<u32>>,
    dimension: f64,
    exact_dimension: Option<u128>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let shape = match args.rows {
        Some(n) => args
            .shape
            .padded(n)
            .with_context(|| format!("Cannot read {} with {n} rows", args.shape))?,
        None => args.shape,
    };
    let report = Report {
        dimension: dimension(&shape).with_context(|| format!("No dimension for {shape}"))?,
        exact_dimension: exact_dimension(&shape),
        hooks: hook_table(&shape),
        dynkin_labels: shape.dynkin_labels(),
        reduced: shape.reduced(),
        shape,
    };
    tracing::debug!(shape = %report.shape, dimension = report.dimension, "evaluated");

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
        println!("{json}");
        return Ok(());
    }

    println!("SU({}) shape {}", report.shape.row_count(), report.shape);
    println!();
    println!("Hook lengths:");
    for row in report.hooks.iter().filter(|r| !r.is_empty()) {
        let cells: Vec<String> = row.iter().map(|h| format!("{h:>3}")).collect();
        println!("  {}", cells.join(""));
    }
    println!();
    println!("Dimension:     {:.6}", report.dimension);
    match report.exact_dimension {
        Some(d) => println!("Exact:         {d}"),
        None => println!("Exact:         (exceeds u128)"),
    }
    println!("Dynkin labels: {:?}", report.dynkin_labels);
    println!("Reduced:       {}", report.reduced);
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
