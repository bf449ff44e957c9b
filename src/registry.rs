//! Static benchmark table and the sweep driver.
//!
//! The table is built once and passed around explicitly; there is no
//! ambient mutable registration.

use crate::dataset::{Dataset, DEFAULT_SEED};
use crate::error::Error;
use crate::hasher::{
    Adler32Hasher, CrcHasher, Hasher, HighwayHasher, Md5Hasher, RabinHasher, Sha256Hasher,
};
use crate::report::format_bytes;
use crate::stats::{self, ResultRow};
use crate::timing::{self, Clock, TimingConfig};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Default input sizes, ascending: 64 B, 1 KiB, 64 KiB, 1 MiB, 16 MiB.
pub const DEFAULT_SIZES: [usize; 5] = [64, 1024, 64 * 1024, 1024 * 1024, 16 * 1024 * 1024];

/// One selectable benchmark: a name, a hasher factory, and a size sweep.
#[derive(Debug)]
pub struct BenchmarkSpec {
    pub name: &'static str,
    pub factory: fn() -> Box<dyn Hasher>,
    pub sizes: &'static [usize],
}

/// All selectable benchmarks, keyed by canonical lowercase name.
pub static BENCHMARKS: [BenchmarkSpec; 6] = [
    BenchmarkSpec {
        name: "rabin",
        factory: || Box::new(RabinHasher::new()),
        sizes: &DEFAULT_SIZES,
    },
    BenchmarkSpec {
        name: "adler32",
        factory: || Box::new(Adler32Hasher::new()),
        sizes: &DEFAULT_SIZES,
    },
    BenchmarkSpec {
        name: "cyclic",
        factory: || Box::new(CrcHasher::new()),
        sizes: &DEFAULT_SIZES,
    },
    BenchmarkSpec {
        name: "md5",
        factory: || Box::new(Md5Hasher::new()),
        sizes: &DEFAULT_SIZES,
    },
    BenchmarkSpec {
        name: "sha256",
        factory: || Box::new(Sha256Hasher::new()),
        sizes: &DEFAULT_SIZES,
    },
    BenchmarkSpec {
        name: "highway",
        factory: || Box::new(HighwayHasher::new()),
        sizes: &DEFAULT_SIZES,
    },
];

/// Looks up a benchmark by its canonical lowercase name.
pub fn resolve(name: &str) -> Result<&'static BenchmarkSpec, Error> {
    BENCHMARKS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| Error::UnknownBenchmark(name.to_string()))
}

/// Usage text enumerating every selectable benchmark.
pub fn usage() -> String {
    let mut text = String::from("Usage: hashmark <benchmark>\n\nAvailable benchmarks:\n");
    for spec in &BENCHMARKS {
        text.push_str("  ");
        text.push_str(spec.name);
        text.push('\n');
    }
    text
}

/// Measures one (benchmark, size) pair.
pub fn measure_size(
    spec: &BenchmarkSpec,
    size: usize,
    config: &TimingConfig,
    clock: &impl Clock,
) -> Result<ResultRow, Error> {
    let dataset = Dataset::generate(size, DEFAULT_SEED)?;
    let mut hasher = (spec.factory)();
    let samples = timing::measure(clock, config, hasher.as_mut(), dataset.as_bytes())?;
    Ok(ResultRow::new(spec.name, size, stats::summarize(&samples)))
}

/// Runs the full size sweep for one benchmark, yielding one row per size.
///
/// An allocation failure for one size is diagnosed and skipped; remaining
/// sizes still run. Re-running the sweep produces identical datasets and
/// digests, so results are comparable run-to-run.
pub fn run_sweep(
    spec: &BenchmarkSpec,
    config: &TimingConfig,
    clock: &impl Clock,
) -> Result<Vec<ResultRow>> {
    let pb = ProgressBar::new(spec.sizes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg}\n[{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("=>-"),
    );

    let mut rows = Vec::with_capacity(spec.sizes.len());
    for &size in spec.sizes {
        pb.set_message(format!("{}: {}", spec.name, format_bytes(size as u64)));
        match measure_size(spec, size, config, clock) {
            Ok(row) => rows.push(row),
            Err(Error::Allocation { size }) => {
                eprintln!("skipping {} dataset: allocation failed", format_bytes(size as u64));
            }
            Err(err) => return Err(err.into()),
        }
        // The bar is only redrawn here, between sizes, so the measurement
        // loop itself never shares the thread with display work.
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_all_names() {
        for name in ["rabin", "adler32", "cyclic", "md5", "sha256", "highway"] {
            let spec = resolve(name).unwrap();
            assert_eq!(spec.name, name);
            assert!(!spec.sizes.is_empty());
        }
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(resolve("MD5").is_err());
        assert!(resolve("Sha256").is_err());
    }

    #[test]
    fn test_unknown_benchmark_message() {
        let err = resolve("xyz").unwrap_err();
        assert_eq!(err.to_string(), "Unknown benchmark: xyz");
    }

    #[test]
    fn test_usage_lists_every_benchmark() {
        let text = usage();
        for spec in &BENCHMARKS {
            assert!(text.contains(spec.name), "missing {}", spec.name);
        }
    }

    #[test]
    fn test_default_sizes_ascend() {
        assert!(DEFAULT_SIZES.windows(2).all(|w| w[0] < w[1]));
    }
}
