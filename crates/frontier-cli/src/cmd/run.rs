//! `frontier run`: generate one graph and compare the three BFS variants.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::{debug, warn};

use frontier_core::bench::format_duration;
use frontier_core::compare::{CompareOptions, Comparison, compare};
use frontier_core::config::FrontierConfig;
use frontier_core::graph::{AdjacencyList, AdjacencyMatrix, GraphGenerator, clock_seed};
use frontier_core::traverse::{TraversalOrder, Variant};

use crate::output::{OutputMode, pretty_kv, pretty_section, write_json};
use crate::prompt::read_value;

/// Arguments for `frontier run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of vertices. Prompted on stdin when omitted.
    #[arg(long, short = 'n')]
    pub vertices: Option<usize>,

    /// Start vertex. Prompted on stdin when omitted.
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// RNG seed. Defaults to the config value, else the wall clock.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run each variant this many times and report the median.
    #[arg(long)]
    pub repeat: Option<usize>,

    /// Also time the adjacency-list variant.
    #[arg(long)]
    pub measure_list: bool,
}

/// JSON output for `frontier run`.
#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    seed: u64,
    vertices: usize,
    edges: usize,
    density: f64,
    fingerprint: String,
    start: usize,
    repeat: usize,
    matrix: &'a AdjacencyMatrix,
    list: &'a AdjacencyList,
    runs: Vec<RunEntry<'a>>,
    orders_agree: bool,
}

#[derive(Debug, Serialize)]
struct RunEntry<'a> {
    variant: Variant,
    order: &'a TraversalOrder,
    elapsed_us: Option<u128>,
}

/// JSON output when the start vertex is rejected.
#[derive(Debug, Serialize)]
struct InvalidStartOutput {
    error: &'static str,
    message: String,
    start: i64,
    vertices: usize,
}

/// Map a raw start value onto a vertex of an `n`-vertex graph.
fn valid_start(raw: i64, n: usize) -> Option<usize> {
    usize::try_from(raw).ok().filter(|&v| v < n)
}

fn invalid_start_message(n: usize) -> String {
    format!(
        "Invalid vertex. Please enter a vertex from 0 to {}.",
        n.saturating_sub(1)
    )
}

/// Execute `frontier run`.
///
/// An out-of-range start vertex is reported and the command still succeeds.
pub fn run_run(args: &RunArgs, config: &FrontierConfig, output: OutputMode) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompts = io::stderr();
    let stdout = io::stdout();
    let mut w = stdout.lock();

    let requested = match args.vertices {
        Some(n) => n,
        None => read_value(&mut input, &mut prompts, "Enter the number of vertices: ")?,
    };
    let n = config.graph.check_vertex_count(requested)?;

    let seed = args.seed.or(config.graph.seed).unwrap_or_else(clock_seed);
    debug!(seed, vertices = n, "generating graph");
    let matrix = GraphGenerator::from_seed(seed).generate(n);

    // The matrix is shown before asking where to start.
    match output {
        OutputMode::Pretty => {
            pretty_section(&mut w, "Adjacency matrix")?;
            write!(w, "{matrix}")?;
            writeln!(w)?;
        }
        OutputMode::Text => {
            writeln!(
                w,
                "graph seed={seed} vertices={n} edges={} fingerprint={}",
                matrix.edge_count(),
                matrix.fingerprint()
            )?;
            write!(w, "{matrix}")?;
        }
        OutputMode::Json => {}
    }
    w.flush()?;

    let raw_start = match args.start {
        Some(v) => v,
        None => read_value(&mut input, &mut prompts, "Enter the start vertex: ")?,
    };
    let Some(start) = valid_start(raw_start, n) else {
        debug!(start = raw_start, vertices = n, "start vertex out of range");
        let message = invalid_start_message(n);
        if output.is_json() {
            write_json(
                &mut w,
                &InvalidStartOutput {
                    error: "invalid_start_vertex",
                    message,
                    start: raw_start,
                    vertices: n,
                },
            )?;
        } else {
            writeln!(w, "{message}")?;
        }
        return Ok(());
    };

    let list = AdjacencyList::from_matrix(&matrix);
    let options = CompareOptions {
        repeat: args.repeat.unwrap_or(config.bench.repeat),
        measure_list: args.measure_list || config.bench.measure_list,
    };
    let comparison = compare(&matrix, &list, start, options)?;
    if !comparison.orders_agree() {
        warn!(start, "variants produced different orders");
    }

    match output {
        OutputMode::Json => {
            let out = RunOutput {
                seed,
                vertices: n,
                edges: matrix.edge_count(),
                density: matrix.density(),
                fingerprint: matrix.fingerprint(),
                start,
                repeat: options.repeat.max(1),
                matrix: &matrix,
                list: &list,
                runs: comparison
                    .runs
                    .iter()
                    .map(|r| RunEntry {
                        variant: r.variant,
                        order: &r.order,
                        elapsed_us: r.elapsed.map(|d| d.as_micros()),
                    })
                    .collect(),
                orders_agree: comparison.orders_agree(),
            };
            write_json(&mut w, &out)?;
        }
        OutputMode::Text => write_text(&mut w, &comparison, &list)?,
        OutputMode::Pretty => write_pretty(&mut w, &comparison, &list, options.repeat.max(1))?,
    }

    Ok(())
}

fn write_text(w: &mut dyn Write, comparison: &Comparison, list: &AdjacencyList) -> Result<()> {
    for run in &comparison.runs {
        if run.variant == Variant::ListQueue {
            writeln!(w, "list")?;
            write!(w, "{list}")?;
        }
        writeln!(w, "bfs variant={} order={}", run.variant, run.order)?;
        if let Some(elapsed) = run.elapsed {
            writeln!(
                w,
                "time variant={} elapsed_us={}",
                run.variant,
                elapsed.as_micros()
            )?;
        }
    }
    writeln!(w, "result orders_agree={}", comparison.orders_agree())?;
    Ok(())
}

fn write_pretty(
    w: &mut dyn Write,
    comparison: &Comparison,
    list: &AdjacencyList,
    repeat: usize,
) -> Result<()> {
    for run in &comparison.runs {
        if run.variant == Variant::ListQueue {
            pretty_section(w, "Adjacency list")?;
            write!(w, "{list}")?;
            writeln!(w)?;
        }
        pretty_section(w, &format!("BFS: {}", run.variant.description()))?;
        pretty_kv(w, "Order", run.order.to_string())?;
        if let Some(elapsed) = run.elapsed {
            let label = if repeat > 1 { "Median" } else { "Elapsed" };
            pretty_kv(
                w,
                label,
                format!("{} ({} µs)", format_duration(elapsed), elapsed.as_micros()),
            )?;
        }
        writeln!(w)?;
    }

    pretty_kv(
        w,
        "Agreement",
        if comparison.orders_agree() {
            "all variants visited vertices in the same order"
        } else {
            "variants disagree"
        },
    )?;
    Ok(())
}
