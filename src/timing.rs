//! Calibration, warm-up, and measurement loops.
//!
//! Raw timings of "absorb the whole dataset + finalize" are noisy at small
//! input sizes, where a single pass costs on the order of the clock read
//! itself. The engine therefore subtracts a calibrated clock-overhead floor
//! and batches passes between clock reads until a batch runs long enough to
//! dominate that overhead. The measurement path is strictly synchronous and
//! single-threaded.

use crate::error::Error;
use crate::hasher::Hasher;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Smallest duration a measurement may report after floor subtraction.
pub const EPSILON: Duration = Duration::from_nanos(1);

/// Upper bound on passes per batch, so a stuck clock cannot loop forever.
const MAX_BATCH: u32 = 1 << 24;

pub trait Clock {
    /// Monotonic time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// Back-to-back clock-read pairs used to estimate the overhead floor.
    pub calibration_iters: u32,
    /// Unrecorded passes run before measurement to prime caches.
    pub warmup_iters: u32,
    /// Recorded batches per (benchmark, size) pair.
    pub samples: usize,
    /// A batch is grown until a single batch runs at least this long.
    pub min_batch_time: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            calibration_iters: 1000,
            warmup_iters: 5,
            samples: 15,
            min_batch_time: Duration::from_millis(4),
        }
    }
}

/// Measures the cost of the timing primitive itself: the minimum observed
/// delta between two adjacent clock reads with no work in between.
pub fn calibrate(clock: &impl Clock, iters: u32) -> Duration {
    let mut floor = Duration::MAX;
    for _ in 0..iters {
        let start = clock.now();
        let end = clock.now();
        floor = floor.min(end.saturating_sub(start));
    }
    if floor == Duration::MAX {
        Duration::ZERO
    } else {
        floor
    }
}

/// One pass: reset, absorb the full dataset, finalize.
fn one_pass(hasher: &mut dyn Hasher, data: &[u8]) -> Result<(), Error> {
    hasher.reset();
    hasher.absorb(data)?;
    black_box(hasher.finalize());
    Ok(())
}

/// Wall time of `batch` consecutive passes between two clock reads.
fn timed_batch(
    clock: &impl Clock,
    hasher: &mut dyn Hasher,
    data: &[u8],
    batch: u32,
) -> Result<Duration, Error> {
    let start = clock.now();
    for _ in 0..batch {
        one_pass(hasher, data)?;
    }
    Ok(clock.now().saturating_sub(start))
}

/// Runs calibration, warm-up, and the measurement loop, returning one
/// per-pass sample per recorded batch. At least one sample is always
/// recorded, and every sample is positive.
pub fn measure(
    clock: &impl Clock,
    config: &TimingConfig,
    hasher: &mut dyn Hasher,
    data: &[u8],
) -> Result<Vec<Duration>, Error> {
    let floor = calibrate(clock, config.calibration_iters);

    for _ in 0..config.warmup_iters {
        one_pass(hasher, data)?;
    }

    // Double the batch until one batch outlasts the clock-read overhead by
    // a comfortable margin. Large inputs settle at a batch of one.
    let mut batch: u32 = 1;
    while timed_batch(clock, hasher, data, batch)? < config.min_batch_time && batch < MAX_BATCH {
        batch = batch.saturating_mul(2);
    }

    let count = config.samples.max(1);
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let elapsed = timed_batch(clock, hasher, data, batch)?;
        let adjusted = elapsed.saturating_sub(floor).max(EPSILON);
        samples.push((adjusted / batch).max(EPSILON));
    }
    Ok(samples)
}
