pub mod dataset;
pub mod error;
pub mod hasher;
pub mod registry;
pub mod report;
pub mod stats;
pub mod timing;

use anyhow::Result;
use clap::Parser;
use std::io;

use report::Reporter;
use timing::{MonotonicClock, TimingConfig};

#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// Benchmark to run (rabin, adler32, cyclic, md5, sha256, highway)
    ///
    /// Anything else, `--help` included, is answered with the usage text
    /// and a non-zero exit.
    #[arg(allow_hyphen_values = true)]
    pub benchmark: Option<String>,
}

/// Runs the full size sweep for one benchmark and reports to stdout.
pub fn run(name: &str) -> Result<()> {
    let spec = registry::resolve(name)?;
    let clock = MonotonicClock::new();
    let config = TimingConfig::default();

    let rows = registry::run_sweep(spec, &config, &clock)?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    for row in &rows {
        reporter.emit(row)?;
    }
    reporter.finish()?;
    Ok(())
}
