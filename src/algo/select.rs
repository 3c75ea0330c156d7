//! Quickselect: the element of a given rank without a full sort.

use super::quicksort::partition;
use crate::core::SortKey;

/// Returns the element that a full sort would place at position `k`.
///
/// Reorders `v` as a side effect. The caller guarantees `k < v.len()`.
pub(crate) fn select<E: Copy, K: SortKey<E>>(v: &mut [E], key: &K, k: usize) -> E {
    debug_assert!(k < v.len());

    let mut lo = 0;
    let mut hi = v.len();
    while hi - lo > 2 {
        let pivot = lo + partition(&mut v[lo..hi], key);
        if k < pivot {
            hi = pivot;
        } else if k > pivot {
            lo = pivot + 1;
        } else {
            return v[pivot];
        }
    }

    if hi - lo == 2 && key.is_less(&v[lo + 1], &v[lo]) {
        v.swap(lo, lo + 1);
    }
    v[k]
}
