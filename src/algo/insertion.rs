//! Insertion-sort finisher, with and without duplicate removal.

use crate::core::SortKey;

/// Classic shift-and-insert sort.
pub(crate) fn insertion_sort<E: Copy, K: SortKey<E>>(v: &mut [E], key: &K) {
    for i in 1..v.len() {
        let item = v[i];
        let mut j = i;
        while j > 0 && key.is_less(&item, &v[j - 1]) {
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = item;
    }
}

/// Insertion sort that grows a duplicate-free prefix and returns its length.
///
/// Of each group of duplicates the element that comes first in the key's
/// order survives, so the result matches a full sort followed by
/// [`dedup_sorted`](super::dedup_sorted).
pub(crate) fn insertion_sort_dedup<E: Copy, K: SortKey<E>>(v: &mut [E], key: &K) -> usize {
    if v.is_empty() {
        return 0;
    }

    let mut unique = 1;
    for i in 1..v.len() {
        let item = v[i];
        let mut j = unique;
        while j > 0 && key.is_less(&item, &v[j - 1]) {
            j -= 1;
        }

        if j > 0 && key.is_duplicate(&v[j - 1], &item) {
            continue;
        }
        if j < unique && key.is_duplicate(&item, &v[j]) {
            // `item` orders before its equal neighbour (position tie-break).
            v[j] = item;
            continue;
        }

        v.copy_within(j..unique, j + 1);
        v[j] = item;
        unique += 1;
    }
    unique
}
