use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Unrecognized benchmark name from the command line.
    #[error("Unknown benchmark: {0}")]
    UnknownBenchmark(String),

    /// The dataset buffer could not be allocated.
    #[error("failed to allocate a {size} byte dataset")]
    Allocation { size: usize },

    /// A hasher was driven outside its reset/absorb/finalize lifecycle.
    #[error("hasher misuse: absorb after finalize without reset")]
    Misuse,
}
