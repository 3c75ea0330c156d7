//! Median-of-three quicksort with a heapsort safety valve.
//!
//! Ranges at or below the cutoff are left untouched; the caller finishes the
//! whole slice with an insertion sort afterwards. Every recursive call spends
//! one unit of the recursion budget, and a range that still exceeds the cutoff
//! once the budget is gone is handed to [`heapsort`], which keeps the worst
//! case at O(n log n) even for inputs that defeat median-of-three.

use super::heapsort::heapsort;
use crate::core::SortKey;
use rayon::ThreadPool;

/// Recursion budget for a range of `len` elements, about `2 * log2(len)`.
pub(crate) fn recursion_budget(len: usize) -> usize {
    2 * (len.max(1).ilog2() as usize + 1)
}

/// Single-threaded quicksort.
pub(crate) fn quicksort<E: Copy, K: SortKey<E>>(
    v: &mut [E],
    key: &K,
    budget: usize,
    cutoff: usize,
) {
    if v.len() <= cutoff {
        return;
    }
    if budget == 0 {
        log::trace!(
            "quicksort budget exhausted at {} elements, falling back to heapsort",
            v.len()
        );
        heapsort(v, key);
        return;
    }

    let mid = partition(v, key);
    let (left, right) = v.split_at_mut(mid);
    quicksort(left, key, budget - 1, cutoff);
    quicksort(&mut right[1..], key, budget - 1, cutoff);
}

/// Quicksort whose outermost partition runs its two halves on `pool`.
///
/// Only this level forks; both halves continue with [`quicksort`].
pub(crate) fn quicksort_forked<E, K>(
    v: &mut [E],
    key: &K,
    budget: usize,
    cutoff: usize,
    pool: &ThreadPool,
) where
    E: Copy + Send,
    K: SortKey<E>,
{
    if v.len() <= cutoff || budget == 0 {
        quicksort(v, key, budget, cutoff);
        return;
    }

    let mid = partition(v, key);
    let (left, right) = v.split_at_mut(mid);
    let right = &mut right[1..];
    log::trace!(
        "quicksort fork: {} left, {} right",
        left.len(),
        right.len()
    );
    pool.join(
        || quicksort(left, key, budget - 1, cutoff),
        || quicksort(right, key, budget - 1, cutoff),
    );
}

/// Partitions `v` around a median-of-three pivot and returns the pivot's final
/// position. Everything left of it is not greater, everything right of it is
/// not less. Requires `v.len() >= 3`.
pub(crate) fn partition<E: Copy, K: SortKey<E>>(v: &mut [E], key: &K) -> usize {
    let last = v.len() - 1;
    median_to_end(v, key);
    let pivot = v[last];

    let mut i = 0;
    let mut j = last;
    loop {
        // Stops at `last` at the latest, the pivot is never less than itself.
        while key.is_less(&v[i], &pivot) {
            i += 1;
        }
        while j > 0 {
            j -= 1;
            if !key.is_less(&pivot, &v[j]) {
                break;
            }
        }
        if i >= j {
            break;
        }
        v.swap(i, j);
        i += 1;
    }

    v.swap(i, last);
    i
}

/// Orders first, middle and last, then moves the median to the end.
fn median_to_end<E, K: SortKey<E>>(v: &mut [E], key: &K) {
    let last = v.len() - 1;
    let mid = v.len() / 2;

    if key.is_less(&v[mid], &v[0]) {
        v.swap(mid, 0);
    }
    if key.is_less(&v[last], &v[0]) {
        v.swap(last, 0);
    }
    if key.is_less(&v[last], &v[mid]) {
        v.swap(last, mid);
    }
    v.swap(mid, last);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::insertion::insertion_sort;
    use crate::core::{ByValue, Order};
    use std::cmp::Ordering;

    type Cmp = fn(&i64, &i64) -> Ordering;

    fn key() -> ByValue<Cmp> {
        ByValue::new(i64::cmp as Cmp, Order::Ascending)
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut v: Vec<i64> = vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 5, 0];
        let p = partition(&mut v, &key());
        assert!(v[..p].iter().all(|x| *x <= v[p]));
        assert!(v[p + 1..].iter().all(|x| *x >= v[p]));
    }

    #[test]
    fn zero_budget_falls_back_to_heapsort() {
        let mut v: Vec<i64> = (0..500).rev().collect();
        quicksort(&mut v, &key(), 0, 32);
        assert!(v.is_sorted());
    }

    #[test]
    fn leaves_small_ranges_for_finisher() {
        let mut v: Vec<i64> = (0..20).rev().collect();
        let before = v.clone();
        let budget = recursion_budget(v.len());
        quicksort(&mut v, &key(), budget, 32);
        assert_eq!(v, before);

        insertion_sort(&mut v, &key());
        assert!(v.is_sorted());
    }

    #[test]
    fn organ_pipe_with_tiny_budget() {
        let mut v: Vec<i64> = (0..1000).chain((0..1000).rev()).collect();
        quicksort(&mut v, &key(), 3, 8);
        insertion_sort(&mut v, &key());
        assert!(v.is_sorted());
    }

    #[test]
    fn forked_matches_sequential() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .build()
            .unwrap();
        let mut a: Vec<i64> = (0..5000).map(|i| (i * 7919) % 1013).collect();
        let mut b = a.clone();
        let budget = recursion_budget(a.len());

        quicksort_forked(&mut a, &key(), budget, 32, &pool);
        insertion_sort(&mut a, &key());
        quicksort(&mut b, &key(), budget, 32);
        insertion_sort(&mut b, &key());
        assert_eq!(a, b);
    }
}
