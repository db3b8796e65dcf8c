//! pagesim - simulate FIFO, RAND, LRU and MIN over reference traces.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{debug, info};

use pagesim::{write_report, Driver, Policy, Workload};

/// Page replacement simulator
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Workload file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run (sequence, policy) pairs on a pool of worker threads
    #[arg(short, long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let workload = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => Workload::from_path(path)
            .with_context(|| format!("Failed to read workload from {}", path.display()))?,
        _ => Workload::from_reader(io::stdin().lock()).context("Failed to read workload from stdin")?,
    };

    match workload.config.algorithm.parse::<Policy>() {
        Ok(policy) => debug!("header selects {}; simulating every policy", policy),
        Err(e) => debug!("{}; simulating every policy", e),
    }

    let driver = Driver::new(workload.frame_count());
    info!(
        "{} sequences, {} frames",
        workload.sequences.len(),
        driver.frame_count()
    );

    let reports = if args.parallel {
        driver.run_parallel(&workload.sequences)
    } else {
        driver.run(&workload.sequences)
    }
    .context("Simulation failed")?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_report(&mut out, &workload.config, &reports).context("Failed to write report")?;

    Ok(())
}
