#![forbid(unsafe_code)]

mod cmd;
mod output;
mod prompt;

use clap::{Parser, Subcommand};
use frontier_core::config::load_config;
use output::OutputMode;
use std::env;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "frontier: breadth-first traversal across graph representations",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    // The bare form takes the same flags as `frontier run`.
    #[command(flatten)]
    run: cmd::run::RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Generate a graph and compare the BFS variants",
        long_about = "Generate a random undirected graph, print it as a matrix and a list, \
                      and run breadth-first search with each of the three implementations.",
        after_help = "EXAMPLES:\n    # Prompt for vertex count and start vertex\n    frontier run\n\n    \
                      # Non-interactive, reproducible\n    frontier run --vertices 8 --start 0 --seed 42\n\n    \
                      # Time all three variants over 20 runs\n    frontier run -n 500 -s 0 --repeat 20 --measure-list\n\n    \
                      # Machine-readable output\n    frontier run -n 6 -s 2 --format json"
    )]
    Run(cmd::run::RunArgs),

    #[command(
        about = "Time every BFS variant across several graph sizes",
        after_help = "EXAMPLES:\n    # Default sizes\n    frontier sweep\n\n    \
                      # Custom sizes and repeats\n    frontier sweep --sizes 50,200,800 --repeat 10 --seed 7"
    )]
    Sweep(cmd::sweep::SweepArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("FRONTIER_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "frontier=debug,info"
        } else {
            "frontier=info,warn"
        })
    });

    let format = env::var("FRONTIER_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = env::current_dir()?;
    let config = load_config(&cwd)?;
    let output = output::resolve_output_mode(cli.format, cli.json, config.output.format.as_deref());
    debug!(?output, "resolved output mode");

    match cli.command {
        Some(Commands::Run(args)) => cmd::run::run_run(&args, &config, output),
        Some(Commands::Sweep(args)) => cmd::sweep::run_sweep(&args, &config, output),
        None => cmd::run::run_run(&cli.run, &config, output),
    }
}
