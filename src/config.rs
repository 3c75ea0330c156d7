//! Tunables for the sorting engines.
//!
//! The size thresholds were tuned empirically and are platform dependent, so
//! they are carried per [`Sorter`](crate::Sorter) instead of being hard-coded.

use std::num::NonZeroUsize;
use std::thread;

/// Ranges at or below this size are left to the insertion-sort finisher.
pub const DEFAULT_SMALL_CUTOFF: usize = 32;

/// The outermost quicksort partition forks in two only for lengths above this.
pub const DEFAULT_FORK_THRESHOLD: usize = 500_000;

/// Minimum length before [`Algorithm::Default`](crate::Algorithm::Default) picks the parallel engine.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Quicksort never forks into more than this many tasks.
pub(crate) const MAX_FORK_WORKERS: usize = 2;

/// Configuration for a [`Sorter`](crate::Sorter).
///
/// ```
/// use ordsort::SortConfig;
///
/// let config = SortConfig::new().workers(4).small_cutoff(16);
/// assert_eq!(config.small_cutoff, 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Insertion-sort cutoff for quicksort. Values below 2 are treated as 2.
    pub small_cutoff: usize,
    /// Size gate for the two-task quicksort fork (exclusive).
    pub fork_threshold: usize,
    /// Size gate for the parallel engine under the default algorithm.
    pub parallel_threshold: usize,
    /// Number of workers; 0 means all available hardware threads.
    pub workers: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            small_cutoff: DEFAULT_SMALL_CUTOFF,
            fork_threshold: DEFAULT_FORK_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            workers: 0,
        }
    }
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that never starts additional threads.
    pub fn sequential() -> Self {
        Self::default().workers(1)
    }

    pub fn small_cutoff(mut self, cutoff: usize) -> Self {
        self.small_cutoff = cutoff;
        self
    }

    pub fn fork_threshold(mut self, threshold: usize) -> Self {
        self.fork_threshold = threshold;
        self
    }

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[inline]
    pub(crate) fn cutoff(&self) -> usize {
        self.small_cutoff.max(2)
    }

    /// Whether a quicksort over `len` elements forks at the top level.
    #[inline]
    pub(crate) fn forks(&self, len: usize) -> bool {
        len > self.fork_threshold
    }

    /// Worker count for a problem of size `len`: the configured (or available)
    /// count, capped at `len`, never below 1.
    pub fn resolve_workers(&self, len: usize) -> usize {
        let requested = match self.workers {
            0 => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            n => n,
        };
        requested.min(len).max(1)
    }
}
