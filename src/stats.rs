//! Robust reduction of raw timing samples.
//!
//! Median and minimum are the reported statistics; the mean is not used
//! because OS preemption produces rare long tails that drag it upward.

use std::time::Duration;

/// Summary statistics over the samples for one (benchmark, size) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub min: Duration,
    pub median: Duration,
    pub stddev: Duration,
}

/// Reduces an ordered sample sequence to summary statistics.
///
/// Panics on an empty sequence; the timing engine always records at least
/// one sample.
pub fn summarize(samples: &[Duration]) -> Summary {
    assert!(!samples.is_empty(), "no samples recorded");

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let min = sorted[0];
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2
    };

    // Population standard deviation.
    let n = sorted.len() as f64;
    let mean = sorted.iter().map(Duration::as_secs_f64).sum::<f64>() / n;
    let variance = sorted
        .iter()
        .map(|s| {
            let d = s.as_secs_f64() - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let stddev = Duration::from_secs_f64(variance.sqrt());

    Summary {
        count: sorted.len(),
        min,
        median,
        stddev,
    }
}

/// The aggregate result for one (benchmark, size) pair.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub benchmark: &'static str,
    pub size: usize,
    pub summary: Summary,
    /// Bytes per second, derived from the median sample once at construction.
    pub throughput: f64,
}

impl ResultRow {
    pub fn new(benchmark: &'static str, size: usize, summary: Summary) -> Self {
        let throughput = size as f64 / summary.median.as_secs_f64();
        Self {
            benchmark,
            size,
            summary,
            throughput,
        }
    }
}
