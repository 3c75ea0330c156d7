//! Heapsort kernel, also the quicksort safety valve.

use crate::core::SortKey;

/// In-place heapsort in the key's order. Keeps duplicates.
pub(crate) fn heapsort<E, K: SortKey<E>>(v: &mut [E], key: &K) {
    let len = v.len();

    // Build a max-heap bottom-up.
    for node in (0..len / 2).rev() {
        sift_down(v, key, node, len);
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, key, 0, end);
    }
}

fn sift_down<E, K: SortKey<E>>(v: &mut [E], key: &K, mut node: usize, end: usize) {
    loop {
        let left = 2 * node + 1;
        if left >= end {
            break;
        }

        let right = left + 1;
        let child = if right < end && key.is_less(&v[left], &v[right]) {
            right
        } else {
            left
        };

        if !key.is_less(&v[node], &v[child]) {
            break;
        }
        v.swap(node, child);
        node = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ByValue, Order};

    #[test]
    fn sorts_small_inputs() {
        let key = ByValue::new(u8::cmp, Order::Ascending);
        for len in 0..20u8 {
            let mut v: Vec<u8> = (0..len).rev().collect();
            heapsort(&mut v, &key);
            assert!(v.is_sorted(), "len {}", len);
        }
    }
}
