use rayon::prelude::*;
use thiserror::Error;

/// Number of samples from which [`ExecutionStrategy::Auto`] switches to rayon.
pub const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride does not evenly split the buffer.
    ///
    /// The filters always pass a field width, which is at least one, so this
    /// only guards direct callers of [`for_each_row`].
    #[error("row stride {0} does not divide buffer of length {1}")]
    InvalidRowStride(usize, usize),
}

/// Controls how the rows of a filter pass are computed.
///
/// Every strategy produces identical output; each destination row is written
/// by exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    Serial,

    /// Use the global Rayon thread pool, one task per destination row.
    Parallel,

    /// Parallel for fields with at least [`AUTO_PARALLEL_THRESHOLD`] samples,
    /// serial otherwise.
    #[default]
    Auto,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// A two-pass smoothing call builds one pool and reuses it for both passes.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Whether this strategy distributes rows across threads for a field of
    /// `num_elements` samples.
    pub fn is_parallel(&self, num_elements: usize) -> bool {
        match self {
            ExecutionStrategy::Serial => false,
            ExecutionStrategy::Parallel | ExecutionStrategy::Fixed(_) => true,
            ExecutionStrategy::Auto => num_elements >= AUTO_PARALLEL_THRESHOLD,
        }
    }
}

/// Build a local rayon pool with `n` threads.
///
/// # Errors
///
/// Returns [`ParallelError::InvalidThreadCount`] for `n == 0` and
/// [`ParallelError::BuildError`] if rayon cannot start the pool.
pub fn build_thread_pool(n: usize) -> Result<rayon::ThreadPool, ParallelError> {
    if n == 0 {
        return Err(ParallelError::InvalidThreadCount(n));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build()
        .map_err(|e| ParallelError::BuildError(e.to_string()))
}

/// Run `op` once per row of `dst` with the given strategy.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `dst` - The destination buffer, split into rows of `stride` elements.
/// * `stride` - The row length (field width).
/// * `op` - Called with the row index and the mutable row slice.
///
/// # Errors
///
/// Returns an error if `stride` is zero or does not divide `dst`, or if a
/// [`ExecutionStrategy::Fixed`] pool cannot be built.
pub fn for_each_row<T, F>(
    strategy: ExecutionStrategy,
    dst: &mut [T],
    stride: usize,
    op: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    if stride == 0 || dst.len() % stride != 0 {
        return Err(ParallelError::InvalidRowStride(stride, dst.len()));
    }

    let run_parallel = |dst: &mut [T]| {
        dst.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(r, row)| op(r, row));
    };

    match strategy {
        ExecutionStrategy::Fixed(n) => {
            let pool = build_thread_pool(n)?;
            pool.install(|| run_parallel(dst));
        }
        s if s.is_parallel(dst.len()) => run_parallel(dst),
        _ => {
            dst.chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(r, row)| op(r, row));
        }
    }

    Ok(())
}
