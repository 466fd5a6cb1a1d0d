//! urldiff
//!
//! Reads URLs from two files, fetches every pairing and reports whether the
//! responses are equal.

mod args;
mod config;
mod report;

use anyhow::{Context, Result};
use args::CommandLineArgs;
use config::{AppConfig, Pairing};
use report::Reporter;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use urldiff_compare::{HttpComparator, ReqwestClient};
use urldiff_stream::{ComparisonProcessor, Pair, PairGenerator, StreamResult};

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    let config = AppConfig::from_env(&args)?;

    init_tracing(&config)?;

    info!(
        a = %config.file_a.display(),
        b = %config.file_b.display(),
        pairing = ?config.pairing,
        check_headers = config.check_headers,
        "Starting comparison"
    );

    let client = ReqwestClient::new(config.timeout).context("failed to create HTTP client")?;
    let comparator = HttpComparator::new(client).check_headers(config.check_headers);
    let processor = ComparisonProcessor::new(comparator);
    let generator = PairGenerator::new();

    let mut reporter = Reporter::new(io::stdout().lock());
    let result = match config.pairing {
        Pairing::CrossProduct => run(
            &processor,
            generator.cross_product(&config.file_a, &config.file_b),
            &mut reporter,
        ),
        Pairing::Zipped => run(
            &processor,
            generator.zipped(&config.file_a, &config.file_b),
            &mut reporter,
        ),
    };
    reporter.flush()?;

    let tally = reporter.tally();
    info!(
        total = tally.total(),
        equal = tally.equal,
        not_equal = tally.not_equal,
        undetermined = tally.undetermined,
        "Comparison finished"
    );

    result
}

fn run<I, W>(processor: &ComparisonProcessor, pairs: I, reporter: &mut Reporter<W>) -> Result<()>
where
    I: Iterator<Item = StreamResult<Pair>>,
    W: Write,
{
    for result in processor.try_run(pairs) {
        let comparison = result.context("failed to read input")?;
        reporter
            .report(&comparison)
            .context("failed to write result")?;
    }
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
