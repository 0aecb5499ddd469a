//! lopassvel - drop navigation fixes that imply an impossible ship speed
//!
//! Reads `seconds latitude longitude` triples from stdin and writes the
//! surviving fixes with the speed over the leg into each one.

use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use underway_core::speed::{read_samples, SpeedFilter};

#[derive(Parser, Debug)]
#[command(name = "lopassvel")]
#[command(author = "Underway Contributors")]
#[command(version)]
#[command(about = "Remove navigation fixes whose point-to-point speed exceeds a threshold", long_about = None)]
#[command(after_help = "Input on stdin: seconds latitude longitude, one fix per line.\n\
Output: seconds latitude longitude speed(knots) for every kept fix.\n\
With no threshold (or 0) every fix is kept and only speeds are computed.")]
struct Cli {
    /// Number of fixes to read from stdin
    #[arg(value_name = "N_RECORDS", allow_negative_numbers = true)]
    records: i64,

    /// Maximum plausible speed in knots
    #[arg(value_name = "THRESHOLD_KNOTS")]
    threshold: Option<f32>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    if cli.records <= 0 {
        eprintln!("No records found {}", cli.records);
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    match filter(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lopassvel: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn filter(cli: &Cli) -> Result<()> {
    let count = usize::try_from(cli.records).context("record count out of range")?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("cannot read stdin")?;
    let samples = read_samples(&input, count).context("fewer fixes on stdin than requested")?;

    let filter = SpeedFilter::new(cli.threshold.unwrap_or(0.0));
    let kept = filter.apply(&samples);
    info!("kept {} of {} fixes at {} knots", kept.len(), samples.len(), filter.threshold());

    let mut out = BufWriter::new(io::stdout().lock());
    for sample in &kept {
        writeln!(out, "{}", sample).context("cannot write output")?;
    }
    out.flush().context("cannot write output")?;
    Ok(())
}
