//! Algorithm dispatch and the indirect (index-based) engine.
//!
//! A [`Sorter`] carries a [`SortConfig`] and exposes three families of calls:
//!
//! - **direct**: sort a slice in place ([`Sorter::sort`], [`Sorter::sort_by`]);
//! - **indirect**: sort positions into a read-only collection
//!   ([`Sorter::sort_indirect`], [`Sorter::sort_indices`]);
//! - **selection**: order statistics ([`Sorter::kth_largest`], [`Sorter::kth_largest_index`]).
//!
//! The indirect engine compares positions by the values they reference and
//! falls back to the positions themselves on ties. That makes every algorithm
//! stable and gives the same permutation no matter which one runs or how many
//! workers take part.

use crate::algo::heapsort::heapsort;
use crate::algo::insertion::{insertion_sort, insertion_sort_dedup};
use crate::algo::parallel::merge_sort;
use crate::algo::quicksort::{quicksort, quicksort_forked, recursion_budget};
use crate::algo::select::select;
use crate::algo::{call_pool, dedup_sorted};
use crate::config::{MAX_FORK_WORKERS, SortConfig};
use crate::core::{
    Algorithm, ByIndex, ByValue, Order, SortKey, SortOptions, ValueAccessor,
};
use crate::error::SortError;
use std::cmp::Ordering;

/// Entry point for sorting and selection under a given configuration.
///
/// ```
/// use ordsort::{Order, SortConfig, SortOptions, Sorter};
///
/// let sorter = Sorter::new(SortConfig::new().workers(2));
/// let mut data = vec![5, 3, 3, 1, 4];
///
/// let n = sorter.sort(&mut data, Order::Ascending, SortOptions::no_duplicates());
/// assert_eq!(&data[..n], &[1, 3, 4, 5]);
/// assert_eq!(sorter.config().workers, 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts `v` in place and returns the number of retained elements.
    ///
    /// With [`Duplicates::Remove`](crate::Duplicates::Remove) the retained
    /// prefix holds one element per group of equal elements; the content past
    /// it is unspecified.
    pub fn sort<T>(&self, v: &mut [T], order: Order, options: impl Into<SortOptions>) -> usize
    where
        T: Ord + Copy + Send + Sync,
    {
        self.sort_by(v, order, options, T::cmp)
    }

    /// Like [`sort`](Self::sort) with a three-way comparator defining the
    /// ascending order, e.g. `f64::total_cmp`.
    pub fn sort_by<T, F>(
        &self,
        v: &mut [T],
        order: Order,
        options: impl Into<SortOptions>,
        compare: F,
    ) -> usize
    where
        T: Copy + Send + Sync,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        let options = options.into();
        let algorithm = self.resolve(v.len(), options.algorithm);

        // The parallel engine merges ascending and reverses at the end.
        let (key, reverse) = match algorithm {
            Algorithm::Parallel => (
                ByValue::new(compare, Order::Ascending),
                order == Order::Descending,
            ),
            _ => (ByValue::new(compare, order), false),
        };
        self.run(v, &key, algorithm, options.dedup(), reverse)
    }

    /// Fills `indices` with the positions of `data` in sorted order and returns
    /// their count. `data` is never modified.
    ///
    /// Equal values keep their original relative order. With duplicate removal
    /// the lowest position of each group of equal values is kept, and
    /// `indices` is truncated to the retained count.
    pub fn sort_indirect<A>(
        &self,
        indices: &mut Vec<usize>,
        data: &A,
        order: Order,
        options: impl Into<SortOptions>,
    ) -> usize
    where
        A: ValueAccessor + Sync + ?Sized,
        A::Value: Ord,
    {
        self.sort_indirect_by(indices, data, order, options, <A::Value as Ord>::cmp)
    }

    /// Like [`sort_indirect`](Self::sort_indirect) with a custom comparator.
    pub fn sort_indirect_by<A, F>(
        &self,
        indices: &mut Vec<usize>,
        data: &A,
        order: Order,
        options: impl Into<SortOptions>,
        compare: F,
    ) -> usize
    where
        A: ValueAccessor + Sync + ?Sized,
        F: Fn(&A::Value, &A::Value) -> Ordering + Sync,
    {
        let options = options.into();
        indices.clear();
        indices.extend(0..data.len());

        let algorithm = self.resolve(data.len(), options.algorithm);
        let key = ByIndex::new(data, compare, order);
        let retained = self.run(indices, &key, algorithm, options.dedup(), false);
        indices.truncate(retained);
        retained
    }

    /// Returns the positions of `data` in sorted order.
    pub fn sort_indices<A>(&self, data: &A, order: Order, options: impl Into<SortOptions>) -> Vec<usize>
    where
        A: ValueAccessor + Sync + ?Sized,
        A::Value: Ord,
    {
        let mut indices = Vec::with_capacity(data.len());
        self.sort_indirect(&mut indices, data, order, options);
        indices
    }

    /// Returns the value an ascending sort would place at position `k`.
    ///
    /// `v` is partially reordered.
    ///
    /// # Errors
    ///
    /// [`SortError::InvalidRank`] if `k >= v.len()`.
    pub fn kth_largest<T: Ord + Copy>(&self, v: &mut [T], k: usize) -> Result<T, SortError> {
        self.kth_largest_by(v, k, T::cmp)
    }

    pub fn kth_largest_by<T, F>(&self, v: &mut [T], k: usize, compare: F) -> Result<T, SortError>
    where
        T: Copy,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        check_rank(k, v.len())?;
        let key = ByValue::new(compare, Order::Ascending);
        Ok(select(v, &key, k))
    }

    /// Returns the position in `data` of the value with ascending rank `k`.
    /// Equal values rank by position.
    ///
    /// # Errors
    ///
    /// [`SortError::InvalidRank`] if `k >= data.len()`.
    pub fn kth_largest_index<A>(&self, data: &A, k: usize) -> Result<usize, SortError>
    where
        A: ValueAccessor + Sync + ?Sized,
        A::Value: Ord,
    {
        check_rank(k, data.len())?;
        let mut indices: Vec<usize> = (0..data.len()).collect();
        let key = ByIndex::new(data, <A::Value as Ord>::cmp, Order::Ascending);
        Ok(select(&mut indices, &key, k))
    }

    /// Picks the concrete algorithm for a problem of size `len`.
    fn resolve(&self, len: usize, requested: Algorithm) -> Algorithm {
        let algorithm = match requested {
            Algorithm::Default => {
                let workers = self.config.resolve_workers(len);
                if len < self.config.parallel_threshold || workers == 1 {
                    Algorithm::Quicksort
                } else {
                    Algorithm::Parallel
                }
            }
            other => other,
        };
        log::debug!(
            "sorting {} elements with {:?} (requested {:?})",
            len,
            algorithm,
            requested
        );
        algorithm
    }

    /// Runs `algorithm` and returns the retained count. `reverse` only applies
    /// to the parallel engine; the other kernels sort in the key's order.
    fn run<E, K>(&self, v: &mut [E], key: &K, algorithm: Algorithm, dedup: bool, reverse: bool) -> usize
    where
        E: Copy + Send + Sync,
        K: SortKey<E>,
    {
        match algorithm {
            Algorithm::Insertion => {
                if dedup {
                    insertion_sort_dedup(v, key)
                } else {
                    insertion_sort(v, key);
                    v.len()
                }
            }
            Algorithm::Heapsort => {
                heapsort(v, key);
                if dedup { dedup_sorted(v, key) } else { v.len() }
            }
            Algorithm::Parallel => {
                let workers = self.config.resolve_workers(v.len());
                let pool = call_pool(workers);
                merge_sort(v, key, dedup, reverse, workers, pool.as_ref())
            }
            Algorithm::Quicksort | Algorithm::Default => {
                self.quicksort(v, key);
                if dedup {
                    insertion_sort_dedup(v, key)
                } else {
                    insertion_sort(v, key);
                    v.len()
                }
            }
        }
    }

    /// Quicksort pass without the finisher. Forks in two above the fork threshold.
    fn quicksort<E, K>(&self, v: &mut [E], key: &K)
    where
        E: Copy + Send,
        K: SortKey<E>,
    {
        let budget = recursion_budget(v.len());
        let cutoff = self.config.cutoff();

        if self.config.forks(v.len()) {
            let workers = self.config.resolve_workers(v.len()).min(MAX_FORK_WORKERS);
            if let Some(pool) = call_pool(workers) {
                quicksort_forked(v, key, budget, cutoff, &pool);
                return;
            }
        }
        quicksort(v, key, budget, cutoff);
    }
}

fn check_rank(rank: usize, len: usize) -> Result<(), SortError> {
    if rank >= len {
        return Err(SortError::InvalidRank { rank, len });
    }
    Ok(())
}
