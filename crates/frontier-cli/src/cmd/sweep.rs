//! `frontier sweep`: time every variant across several graph sizes.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;

use frontier_core::bench::{TimingReport, format_duration};
use frontier_core::compare::{CompareOptions, compare};
use frontier_core::config::FrontierConfig;
use frontier_core::graph::{AdjacencyList, GraphGenerator, clock_seed};
use frontier_core::traverse::Variant;

use crate::output::{OutputMode, pretty_kv, pretty_section, write_json};

/// Arguments for `frontier sweep`.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Comma-separated vertex counts.
    #[arg(long, value_delimiter = ',', default_value = "10,100,500,1000")]
    pub sizes: Vec<usize>,

    /// Runs per variant per size.
    #[arg(long, default_value = "5")]
    pub repeat: usize,

    /// RNG seed for the whole sweep. Defaults to config, else the wall clock.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start vertex used for every size.
    #[arg(long, default_value = "0")]
    pub start: usize,
}

/// JSON output for `frontier sweep`.
#[derive(Debug, Serialize)]
struct SweepOutput {
    seed: u64,
    repeat: usize,
    start: usize,
    rows: Vec<SweepRow>,
    all_agree: bool,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    vertices: usize,
    edges: usize,
    density: f64,
    visited: usize,
    orders_agree: bool,
    timings: Vec<VariantTiming>,
}

#[derive(Debug, Serialize)]
struct VariantTiming {
    variant: Variant,
    count: usize,
    min_us: u128,
    median_us: u128,
    p95_us: u128,
    p99_us: u128,
}

fn timings_from(report: &TimingReport) -> Vec<VariantTiming> {
    Variant::ALL
        .iter()
        .filter_map(|&variant| {
            report.get(variant.name()).map(|op| VariantTiming {
                variant,
                count: op.count,
                min_us: op.min.as_micros(),
                median_us: op.median.as_micros(),
                p95_us: op.p95.as_micros(),
                p99_us: op.p99.as_micros(),
            })
        })
        .collect()
}

/// Execute `frontier sweep`.
///
/// Exits with status 1 if any size produced disagreeing orders.
pub fn run_sweep(args: &SweepArgs, config: &FrontierConfig, output: OutputMode) -> Result<()> {
    let seed = args.seed.or(config.graph.seed).unwrap_or_else(clock_seed);
    let mut generator = GraphGenerator::from_seed(seed);
    let options = CompareOptions::all_measured(args.repeat);

    let mut rows = Vec::with_capacity(args.sizes.len());
    let mut reports = Vec::with_capacity(args.sizes.len());

    for &size in &args.sizes {
        let n = config.graph.check_vertex_count(size)?;
        let matrix = generator.generate(n);
        let list = AdjacencyList::from_matrix(&matrix);
        let comparison = compare(&matrix, &list, args.start, options)
            .with_context(|| format!("sweep at {n} vertices"))?;
        let report = comparison.bench.report();

        info!(vertices = n, edges = matrix.edge_count(), "sweep step done");
        rows.push(SweepRow {
            vertices: n,
            edges: matrix.edge_count(),
            density: matrix.density(),
            visited: comparison.runs.first().map_or(0, |r| r.order.len()),
            orders_agree: comparison.orders_agree(),
            timings: timings_from(&report),
        });
        reports.push(report);
    }

    let out = SweepOutput {
        seed,
        repeat: args.repeat.max(1),
        start: args.start,
        all_agree: rows.iter().all(|r| r.orders_agree),
        rows,
    };

    let stdout = io::stdout();
    let mut w = stdout.lock();
    match output {
        OutputMode::Json => write_json(&mut w, &out)?,
        OutputMode::Text => {
            writeln!(
                w,
                "sweep seed={} repeat={} start={}",
                out.seed, out.repeat, out.start
            )?;
            for row in &out.rows {
                write!(
                    w,
                    "size vertices={} edges={} visited={} agree={}",
                    row.vertices, row.edges, row.visited, row.orders_agree
                )?;
                for t in &row.timings {
                    write!(w, " {}_median_us={}", t.variant, t.median_us)?;
                }
                writeln!(w)?;
            }
        }
        OutputMode::Pretty => {
            pretty_section(&mut w, "BFS Sweep")?;
            pretty_kv(&mut w, "Seed", out.seed.to_string())?;
            pretty_kv(&mut w, "Repeat", out.repeat.to_string())?;
            pretty_kv(&mut w, "Start", out.start.to_string())?;
            writeln!(w)?;
            for (row, report) in out.rows.iter().zip(&reports) {
                pretty_section(
                    &mut w,
                    &format!(
                        "{} vertices, {} edges ({:.1}% dense), {} reached",
                        row.vertices,
                        row.edges,
                        row.density * 100.0,
                        row.visited
                    ),
                )?;
                write!(w, "{}", report.display_table())?;
                writeln!(w)?;
            }
            let status = if out.all_agree {
                "all variants agree at every size".to_string()
            } else {
                let bad: Vec<String> = out
                    .rows
                    .iter()
                    .filter(|r| !r.orders_agree)
                    .map(|r| r.vertices.to_string())
                    .collect();
                format!("orders differ at {}", bad.join(", "))
            };
            pretty_kv(&mut w, "Status", status)?;
            // median per variant at a glance
            for (row, report) in out.rows.iter().zip(&reports) {
                let summary: Vec<String> = Variant::ALL
                    .iter()
                    .filter_map(|v| {
                        report
                            .get(v.name())
                            .map(|op| format!("{v}={}", format_duration(op.median)))
                    })
                    .collect();
                pretty_kv(&mut w, &format!("n={}", row.vertices), summary.join("  "))?;
            }
        }
    }
    w.flush()?;

    if !out.all_agree {
        process::exit(1);
    }

    Ok(())
}
