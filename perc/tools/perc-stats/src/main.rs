#![forbid(unsafe_code)]

use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use perc::{Error, PercolationStats};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Estimates the percolation threshold of an N-by-N grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid size
    n: usize,
    /// Number of independent trials
    trials: usize,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    TermLogger::init(
        args.log_level.into(),
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let stats = match args.seed {
        Some(seed) => {
            info!("using seed {seed}");
            PercolationStats::with_rng(args.n, args.trials, &mut StdRng::seed_from_u64(seed))?
        }
        None => PercolationStats::new(args.n, args.trials)?,
    };

    println!("mean                    = {}", stats.mean());
    match stats.confidence_interval() {
        Ok((lo, hi)) => {
            println!("stddev                  = {}", stats.stddev()?);
            println!("95% confidence interval = [{lo}, {hi}]");
        }
        Err(Error::UndefinedStatistic { trials }) => {
            println!("stddev                  = undefined for {trials} trial");
            println!("95% confidence interval = undefined for {trials} trial");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
