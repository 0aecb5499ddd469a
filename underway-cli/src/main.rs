//! udmerge - merge underway navigation, depth, magnetics and gravity logs
//! into one MGD77-style table

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use log::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use underway_core::{
    constants::{
        mgd77::{DEFAULT_STATION, DEFAULT_SURVEY_LINE},
        time::TOLERANCE_SECONDS,
    },
    format::{OutputFormat, RecordWriter},
    Identifiers, MergeConfig, Merger, StreamKind,
};

const INPUT_FORMATS: &str = "\
Input formats (whitespace separated, one record per line):
  navigation: year day hour min sec msec tag lat lon ...
              2016 342 00 00 00 496 *gpo  -7.032306 -175.930304
  depth:      year day hour min sec msec lat lon depth [twt]
              2016 342 00 00 04 321  -7.03 -175.93 5790.45
  magnetics:  year day hour min sec msec lat lon mtf1 mag diur msd
              2016 342 01 54 33 229  -7.03 -175.93 35925.875 169.9 2.76 10.0
  gravity:    year day hour min sec msec lat lon gobs eot faa
              2016 342 00 00 00 863  -7.03 -175.93 978123.4 12.3 -4.5

Blank lines and lines starting with '#' are ignored.
Set RUST_LOG (e.g. RUST_LOG=debug) for detailed diagnostics on stderr.";

#[derive(Parser, Debug)]
#[command(name = "udmerge")]
#[command(author = "Underway Contributors")]
#[command(version)]
#[command(about = "Merge underway geophysical streams into one time-aligned table", long_about = None)]
#[command(after_help = INPUT_FORMATS)]
struct Cli {
    /// Cruise identifier carried into every row (e.g. KM1609)
    #[arg(short = 'i', long = "id", value_name = "CRUISE_ID")]
    cruise: Option<String>,

    /// Navigation file
    #[arg(short = 'n', long = "nav", value_name = "FILE")]
    navigation: Option<PathBuf>,

    /// Corrected depth file
    #[arg(short = 'd', long, value_name = "FILE")]
    depth: Option<PathBuf>,

    /// Magnetics file
    #[arg(short = 'm', long = "mag", value_name = "FILE")]
    magnetics: Option<PathBuf>,

    /// Gravity file
    #[arg(short = 'g', long = "grav", value_name = "FILE")]
    gravity: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Log per-record diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Tab-separated MGD77-style rows with a header line
    Text,
    /// One JSON object per row
    Jsonl,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Jsonl => OutputFormat::JsonLines,
        }
    }
}

impl Cli {
    /// Supplied inputs in precedence order
    fn inputs(&self) -> Vec<(StreamKind, &Path)> {
        [
            (StreamKind::Navigation, &self.navigation),
            (StreamKind::Depth, &self.depth),
            (StreamKind::Magnetics, &self.magnetics),
            (StreamKind::Gravity, &self.gravity),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.as_deref().map(|path| (kind, path)))
        .collect()
    }

    /// The cruise identifier, if one was given and it can be carried in
    /// the output (non-empty, no whitespace, short enough)
    fn cruise(&self) -> Option<&str> {
        self.cruise
            .as_deref()
            .filter(|id| Identifiers::new(id, DEFAULT_SURVEY_LINE, DEFAULT_STATION).is_ok())
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_usage() {
    let mut command = Cli::command();
    let _ = command.write_help(&mut io::stderr());
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let inputs = cli.inputs();
    let Some(cruise) = cli.cruise() else {
        print_usage();
        return ExitCode::SUCCESS;
    };
    if inputs.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    match merge(&cli, cruise, &inputs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("udmerge: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn merge(cli: &Cli, cruise: &str, inputs: &[(StreamKind, &Path)]) -> Result<()> {
    let mut builder = Merger::builder(cruise).config(MergeConfig::default());
    for &(kind, path) in inputs {
        builder = builder
            .open(kind, path)
            .with_context(|| format!("cannot open {} file {}", kind, path.display()))?;
    }
    let mut merger = builder.build()?;

    let mut writer = RecordWriter::new(open_output(cli.output.as_deref())?, cli.format.into());
    writer.write_header().context("cannot write output")?;
    let stats = merger.run(|record| Ok(writer.write_record(record)?))?;
    writer.flush().context("cannot write output")?;

    for cursor in merger.cursors() {
        let read = cursor.source().stats();
        let merged = cursor.stats();
        info!(
            "{}: {} lines, {} records, {} duplicates within {} s suppressed, {} invalidated, {} merged",
            cursor.kind(),
            read.lines_read,
            read.records_parsed,
            merged.duplicates_suppressed,
            TOLERANCE_SECONDS,
            read.groups_invalidated,
            merged.records_merged,
        );
    }
    info!("{} rows from {} records", stats.rounds, stats.records_merged);

    Ok(())
}
