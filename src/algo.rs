//! Sorting and selection kernels.
//!
//! - [`insertion`]: O(n²) finisher for small ranges, optionally dropping duplicates.
//! - [`heapsort`]: O(n log n) worst case, standalone and as the quicksort fallback.
//! - [`quicksort`]: median-of-three introsort with an optional two-task fork.
//! - [`select`]: quickselect for order statistics.
//! - [`parallel`]: run detection plus parallel pairwise merging.
//!
//! All kernels are generic over the element type and a [`SortKey`], which is
//! how the direct and the indirect engine share one implementation.

pub(crate) mod heapsort;
pub(crate) mod insertion;
pub(crate) mod parallel;
pub(crate) mod quicksort;
pub(crate) mod select;

use crate::core::SortKey;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Compacts a sorted slice so that no two neighbours are duplicates, keeping
/// the first of each group. Returns the retained length.
pub(crate) fn dedup_sorted<E: Copy, K: SortKey<E>>(v: &mut [E], key: &K) -> usize {
    if v.is_empty() {
        return 0;
    }

    let mut write = 1;
    for read in 1..v.len() {
        if !key.is_duplicate(&v[write - 1], &v[read]) {
            v[write] = v[read];
            write += 1;
        }
    }
    write
}

/// Builds a thread pool that lives for one call.
///
/// Returns `None` when a single thread is requested or the pool cannot be
/// created; callers then run sequentially, which yields the same result.
pub(crate) fn call_pool(threads: usize) -> Option<ThreadPool> {
    if threads < 2 {
        return None;
    }

    match ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => Some(pool),
        Err(err) => {
            log::warn!(
                "could not start {} sort workers, continuing single-threaded: {}",
                threads,
                err
            );
            None
        }
    }
}

/// Maps `f` over `items`, on `pool` when given. Returns once every item is
/// done, results in input order.
pub(crate) fn run_all<I, R, F>(pool: Option<&ThreadPool>, items: Vec<I>, f: F) -> Vec<R>
where
    I: Send,
    R: Send,
    F: Fn(I) -> R + Sync + Send,
{
    match pool {
        Some(pool) => pool.install(|| items.into_par_iter().map(f).collect()),
        None => items.into_iter().map(f).collect(),
    }
}
