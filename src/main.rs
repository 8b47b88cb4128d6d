// src/main.rs

mod analyzer;
mod cli;
mod error;
mod ingest;
mod model;
mod parser;
mod rank;
mod renderer;

use anyhow::Context;
use clap::Parser;
use cli::Args;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // `{:#}` keeps the whole cause chain on one line.
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads the sources, ranks them and writes the report to `out`.
fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let start_time = Instant::now();
    debug!(commits = %args.commits.display(), "commits file is reserved and not read");

    let data = ingest::load(&args.sources(), !args.no_progress).inspect_err(|err| {
        debug!(role = %err.role(), kind = ?err.io_error().kind(), "ingestion failed");
    })?;
    if data.events.is_empty() {
        warn!("no events found, reports will be empty");
    }
    info!(
        actors = data.actors.len(),
        repos = data.repos.len(),
        event_types = data.events.len(),
        "Ingestion finished in {:.2?}",
        start_time.elapsed()
    );

    let report = analyzer::analyze(&data);
    renderer::render_report(out, &report, args.top)
        .context("could not write report")?;

    debug!("Total time: {:.2?}", start_time.elapsed());
    Ok(())
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(args.verbose >= 2)
        .init();
}
