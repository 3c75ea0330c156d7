//! Parallel run-merge engine.
//!
//! 1. **Scan**: every worker walks one contiguous slice and records where an
//!    ascending run ends (an adjacent inversion).
//! 2. **Stitch**: slice boundaries that are not real inversions are dropped, so
//!    the result only depends on the data, never on the worker count.
//! 3. **Merge**: adjacent run pairs are merged in parallel, halving the run
//!    count per pass, ping-ponging between the caller's slice and one scratch
//!    buffer. An odd last run is carried to the next pass without copying.
//!
//! The merged result is then de-duplicated and/or reversed on request.

use super::{dedup_sorted, run_all};
use crate::core::SortKey;
use cuneiform::cuneiform;
use rayon::ThreadPool;

// Cache-aligned so that neighbouring workers do not write into the same line.
#[cuneiform]
struct SliceRuns {
    starts: Vec<usize>,
}

/// Which buffer a region lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Data,
    Scratch,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::Data => Side::Scratch,
            Side::Scratch => Side::Data,
        }
    }
}

/// The caller's slice and the scratch buffer, with a handle that says which
/// one is read from in the current pass.
struct PingPong<'a, E> {
    data: &'a mut [E],
    scratch: Vec<E>,
    src: Side,
}

impl<'a, E: Copy> PingPong<'a, E> {
    fn new(data: &'a mut [E]) -> Self {
        let scratch = data.to_vec();
        Self {
            data,
            scratch,
            src: Side::Data,
        }
    }

    /// Source and destination of the current pass.
    fn split(&mut self) -> (&[E], &mut [E]) {
        match self.src {
            Side::Data => (&*self.data, &mut self.scratch[..]),
            Side::Scratch => (&self.scratch[..], &mut *self.data),
        }
    }

    fn flip(&mut self) {
        self.src = self.src.other();
    }
}

/// One pair merge of a pass.
struct MergeJob<'a, E> {
    left: &'a [E],
    /// `None` when the right run already sits at the back of `out`.
    right: Option<&'a [E]>,
    out: &'a mut [E],
}

/// Sorts `v` in the key's order and returns the number of retained elements.
///
/// `workers` sets the scan slicing; `pool`, when given, runs the scan and each
/// merge pass in parallel. The output does not depend on either.
pub(crate) fn merge_sort<E, K>(
    v: &mut [E],
    key: &K,
    dedup: bool,
    reverse: bool,
    workers: usize,
    pool: Option<&ThreadPool>,
) -> usize
where
    E: Copy + Send + Sync,
    K: SortKey<E>,
{
    let len = v.len();
    if len < 2 {
        return len;
    }

    let bounds = find_runs(v, key, workers, pool);
    let runs = bounds.len() - 1;
    log::trace!(
        "parallel engine: {} runs over {} elements ({} workers)",
        runs,
        len,
        workers
    );

    if runs == len {
        // Strictly decreasing: already duplicate-free, one reverse sorts it.
        if !reverse {
            v.reverse();
        }
        return len;
    }

    if runs == 1 {
        return finish(v, key, dedup, reverse);
    }

    let mut buffers = PingPong::new(v);
    let last_side = merge_runs(&mut buffers, bounds, key, pool);

    let PingPong { data, mut scratch, .. } = buffers;
    match last_side {
        Side::Data => finish(data, key, dedup, reverse),
        Side::Scratch => {
            let retained = if dedup {
                dedup_sorted(&mut scratch, key)
            } else {
                len
            };
            if reverse {
                let sorted = scratch[..retained].iter().rev();
                for (dst, src) in data[..retained].iter_mut().zip(sorted) {
                    *dst = *src;
                }
            } else {
                data[..retained].copy_from_slice(&scratch[..retained]);
            }
            retained
        }
    }
}

/// De-duplicates and reverses a sorted slice in place.
fn finish<E: Copy, K: SortKey<E>>(v: &mut [E], key: &K, dedup: bool, reverse: bool) -> usize {
    let retained = if dedup { dedup_sorted(v, key) } else { v.len() };
    if reverse {
        v[..retained].reverse();
    }
    retained
}

/// Scan and stitch. Returns the run starts followed by `v.len()`.
fn find_runs<E, K>(v: &[E], key: &K, workers: usize, pool: Option<&ThreadPool>) -> Vec<usize>
where
    E: Sync,
    K: SortKey<E>,
{
    let chunk = v.len().div_ceil(workers.max(1));
    let slices: Vec<(usize, &[E])> = v
        .chunks(chunk)
        .enumerate()
        .map(|(i, slice)| (i * chunk, slice))
        .collect();

    let scans = run_all(pool, slices, |(offset, slice)| scan_slice(slice, offset, key));
    stitch(v, key, scans)
}

fn scan_slice<E, K: SortKey<E>>(slice: &[E], offset: usize, key: &K) -> SliceRuns {
    let mut starts = vec![offset];
    for i in 1..slice.len() {
        if key.is_less(&slice[i], &slice[i - 1]) {
            starts.push(offset + i);
        }
    }
    SliceRuns { starts }
}

fn stitch<E, K: SortKey<E>>(v: &[E], key: &K, scans: Vec<SliceRuns>) -> Vec<usize> {
    let total: usize = scans.iter().map(|s| s.starts.len()).sum();
    let mut bounds = Vec::with_capacity(total + 1);

    for scan in scans {
        let mut starts = scan.starts.into_iter();
        if let Some(first) = starts.next() {
            // A slice seam only starts a run if it is a real inversion.
            if first == 0 || key.is_less(&v[first], &v[first - 1]) {
                bounds.push(first);
            }
        }
        bounds.extend(starts);
    }

    bounds.push(v.len());
    bounds
}

/// Merges all runs down to one and returns the buffer holding it.
fn merge_runs<E, K>(
    buffers: &mut PingPong<'_, E>,
    mut bounds: Vec<usize>,
    key: &K,
    pool: Option<&ThreadPool>,
) -> Side
where
    E: Copy + Send + Sync,
    K: SortKey<E>,
{
    // Every run lives in the source buffer, except that the last one may have
    // been carried over from an earlier pass and live in `last_side`.
    let mut last_side = Side::Data;
    let mut passes = 0;

    while bounds.len() > 2 {
        let runs = bounds.len() - 1;
        let pairs = runs / 2;
        let odd = runs % 2 == 1;
        let dst_side = buffers.src.other();

        let (src, dst) = buffers.split();
        let mut jobs = Vec::with_capacity(pairs);
        let mut rest = dst;
        for p in 0..pairs {
            let (lo, mid, hi) = (bounds[2 * p], bounds[2 * p + 1], bounds[2 * p + 2]);
            let current = std::mem::take(&mut rest);
            let (out, tail) = current.split_at_mut(hi - lo);
            rest = tail;

            let right_in_dst = !odd && p + 1 == pairs && last_side == dst_side;
            jobs.push(MergeJob {
                left: &src[lo..mid],
                right: (!right_in_dst).then(|| &src[mid..hi]),
                out,
            });
        }

        run_all(pool, jobs, |job| match job.right {
            Some(right) => merge(job.left, right, job.out, key),
            None => merge_into_tail(job.left, job.out, key),
        });

        if !odd {
            last_side = dst_side;
        }
        buffers.flip();
        passes += 1;

        let mut next: Vec<usize> = bounds.iter().step_by(2).copied().collect();
        if odd {
            next.push(bounds[runs]);
        }
        bounds = next;
    }

    log::trace!("parallel engine: merged in {} passes", passes);
    last_side
}

/// Stable merge of two adjacent runs into `out`. Ties take from `left`.
fn merge<E: Copy, K: SortKey<E>>(left: &[E], right: &[E], out: &mut [E], key: &K) {
    debug_assert_eq!(left.len() + right.len(), out.len());

    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j == right.len() || (i < left.len() && !key.is_less(&right[j], &left[i]));
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Like [`merge`], but the right run is already stored at `out[left.len()..]`.
///
/// The write position trails the unread part of the right run by exactly the
/// number of unmerged left elements, so nothing unread is overwritten, and
/// once `left` is exhausted the remaining right elements are in place.
fn merge_into_tail<E: Copy, K: SortKey<E>>(left: &[E], out: &mut [E], key: &K) {
    let (mut i, mut j, mut k) = (0, left.len(), 0);
    while i < left.len() {
        if j < out.len() && key.is_less(&out[j], &left[i]) {
            out[k] = out[j];
            j += 1;
        } else {
            out[k] = left[i];
            i += 1;
        }
        k += 1;
    }
}
