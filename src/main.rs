//! Catalogue-Bench main entry point
//!
//! This is the command-line interface for the catalogue scraping benchmark.

use anyhow::Context;
use catalogue_bench::config::{load_config, BenchConfig};
use catalogue_bench::crawler::{Orchestrator, RunMode};
use catalogue_bench::output::print_report;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Catalogue-Bench: a concurrent catalogue scraping benchmark
///
/// Scrapes every page of a product catalogue together with each item's
/// detail page, then reports how many items per second were processed.
#[derive(Parser, Debug)]
#[command(name = "catalogue-bench")]
#[command(version)]
#[command(about = "Scrape a product catalogue and its detail pages", long_about = None)]
struct Cli {
    /// Use multiple worker threads for fetching items
    #[arg(long)]
    multithreaded: bool,

    /// Path to a TOML configuration file (defaults target books.toscrape.com)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => BenchConfig::default(),
    };

    let mode = RunMode::from_flag(cli.multithreaded, config.workers.count);
    match mode {
        RunMode::Single => println!("Using single worker (cooperative fetching)..."),
        RunMode::Multi { workers } => {
            println!("Using multithreading with {} workers for fetching items...", workers)
        }
    }

    let output = Orchestrator::new(config, mode)
        .run()
        .context("benchmark run failed")?;

    print_report(&output.stats);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("catalogue_bench=warn"),
            1 => EnvFilter::new("catalogue_bench=info,warn"),
            2 => EnvFilter::new("catalogue_bench=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
