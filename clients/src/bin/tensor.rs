//! `young-tensor`: Decomposes the tensor product of two Young diagrams.
//!
//! Both shapes are padded to a common row capacity `n` (default: the longer
//! input, plus one row if its last row is non-empty, so `2,1` and `1` are
//! read in SU(3) and `1,0` and `1` in SU(2)) and every
//! result shape is printed with its dimension and reduced form, followed by
//! the dimension count `dim(first) * dim(second)` against the sum.
//!
//! **Usage:**
//! ```
//! young-tensor --first 2,1 --second 2,1 [--rows <n>] [--grouped] [--json]
//!              [--log] [--log-path <file>] [--config <file.toml>]
//! ```
//!
//! Set `RUST_LOG=young=debug` to trace each round.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use young::{Decomposition, EngineConfig, Irreducible, ResultShape, Shape, TensorProduct};

/// Decompose a tensor product of SU(n) irreducibles.
#[derive(Parser)]
#[command(
    name = "young-tensor",
    about = "Decompose the tensor product of two Young diagrams"
)]
struct Args {
    /// First shape, as comma- or space-separated row lengths.
    #[arg(long)]
    first: Shape,

    /// Second shape.
    #[arg(long)]
    second: Shape,

    /// Row capacity `n` of SU(n) (default: longer shape, plus an empty row if needed).
    #[arg(long)]
    rows: Option<usize>,

    /// Append every round's survivors to the round log.
    #[arg(long)]
    log: bool,

    /// Round log location (overrides the configuration file).
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// TOML file with engine settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print each distinct shape once, with its multiplicity.
    #[arg(long)]
    grouped: bool,

    /// Emit the result as JSON.
    #[arg(long)]
    json: bool,
}

/// JSON form of a run.
#[derive(Serialize)]
struct Report<'a> {
    rows: usize,
    first: &'a Shape,
    second: &'a Shape,
    #[serde(skip_serializing_if = "Option::is_none")]
    terms: Option<&'a [ResultShape]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    irreducibles: Option<Vec<Irreducible>>,
    total_dimension: Option<u128>,
    expected_dimension: Option<u128>,
    log_degraded: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if let Some(path) = &args.log_path {
        config.log_path = path.clone();
    }
    tracing::debug!(
        max_permutations = config.max_permutations,
        log_path = %config.log_path.display(),
        "engine configured"
    );

    let n = args
        .rows
        .unwrap_or_else(|| args.first.joint_row_count(&args.second));
    let first = args
        .first
        .padded(n)
        .with_context(|| format!("Cannot read {} with {n} rows", args.first))?;
    let second = args
        .second
        .padded(n)
        .with_context(|| format!("Cannot read {} with {n} rows", args.second))?;

    let engine = TensorProduct::new(config);
    let product = engine
        .decompose_with_log(&first, &second, args.log)
        .with_context(|| format!("Failed to decompose {first} ⊗ {second}"))?;

    if args.json {
        print_json(n, &product, args.grouped)?;
    } else {
        print_text(n, &product, args.grouped)?;
    }

    if product.log_degraded() {
        eprintln!(
            "warning: round log {} could not be written; results are complete",
            engine.config().log_path.display()
        );
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_text(n: usize, product: &Decomposition, grouped: bool) -> Result<()> {
    println!("SU({n}): {} ⊗ {}", product.first(), product.second());
    println!();

    if grouped {
        for irr in product.irreducibles() {
            println!(
                "  {:>3} × {:<20} dim {:<8} reduced {}",
                irr.multiplicity,
                irr.shape.to_string(),
                format_dimension(irr.dimension, irr.exact_dimension),
                irr.shape.reduced()
            );
        }
    } else {
        for term in product.terms() {
            println!(
                "  {:<20} dim {:<8} reduced {}",
                term.shape.to_string(),
                format_dimension(term.dimension, term.exact_dimension),
                term.shape.reduced()
            );
        }
    }

    println!();
    let expected = product.expected_dimension()?;
    let total = product.total_dimension();
    let verdict = match (product.exact_expected_dimension(), product.exact_total_dimension()) {
        (Some(e), Some(t)) if e == t => "ok",
        (Some(e), Some(t)) if t > e => "overcount",
        (Some(_), Some(_)) => "undercount",
        _ if (expected - total).abs() <= 1e-9 * expected.max(1.0) => "ok",
        _ => "mismatch",
    };
    println!(
        "Dimension count: {expected:.0} expected, {total:.0} found ({} terms, {verdict})",
        product.len()
    );
    Ok(())
}

fn print_json(n: usize, product: &Decomposition, grouped: bool) -> Result<()> {
    let report = Report {
        rows: n,
        first: product.first(),
        second: product.second(),
        terms: (!grouped).then(|| product.terms()),
        irreducibles: grouped.then(|| product.irreducibles()),
        total_dimension: product.exact_total_dimension(),
        expected_dimension: product.exact_expected_dimension(),
        log_degraded: product.log_degraded(),
    };
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
    println!("{json}");
    Ok(())
}

fn format_dimension(float: f64, exact: Option<u128>) -> String {
    match exact {
        Some(d) => d.to_string(),
        None => format!("{float:.0}"),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
