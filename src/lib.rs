//! # ordsort
//!
//! `ordsort` is an in-memory sorting and order-statistics library: ascending and
//! descending sorts, optional duplicate elimination, k-th element selection, and
//! an index-based ("indirect") sort that orders positions into a read-only
//! collection instead of moving the data.
//!
//! ## Key Features
//!
//! - **Introsort**: median-of-three quicksort with a recursion budget that hands
//!   hostile inputs to heapsort, finished by an insertion sort.
//! - **Parallel run-merge**: detects existing ascending runs across worker slices,
//!   then merges them pairwise in parallel. The result never depends on the
//!   number of workers.
//! - **Stable indirect sort**: equal values keep their original relative order,
//!   for every algorithm and both orders.
//! - **Explicit parallelism**: worker counts and size thresholds live in a
//!   [`SortConfig`]; threads are started per call and nothing global is touched.
//!
//! ## Usage
//!
//! ### In-place sort
//!
//! ```rust
//! use ordsort::{sort, Order, SortOptions};
//!
//! let mut data = vec![5, 3, 3, 1, 4];
//! let n = sort(&mut data, Order::Descending, SortOptions::new());
//!
//! assert_eq!(n, 5);
//! assert_eq!(data, vec![5, 4, 3, 3, 1]);
//! ```
//!
//! ### Duplicate removal
//!
//! The return value is the number of retained elements; anything past it is
//! unspecified.
//!
//! ```rust
//! use ordsort::{sort, Algorithm, Duplicates, Order};
//!
//! let mut data = vec![5, 3, 3, 1, 4];
//! let n = sort(&mut data, Order::Ascending, Algorithm::Heapsort | Duplicates::Remove);
//!
//! assert_eq!(&data[..n], &[1, 3, 4, 5]);
//! ```
//!
//! ### Indirect sort
//!
//! ```rust
//! use ordsort::{sort_indices, Order, SortOptions};
//!
//! let scores = vec![20, 10, 20, 5];
//! let rows = sort_indices(&scores, Order::Descending, SortOptions::new());
//!
//! // Equal scores keep row order.
//! assert_eq!(rows, vec![0, 2, 1, 3]);
//! ```
//!
//! ### Selection
//!
//! ```rust
//! use ordsort::kth_largest;
//!
//! let mut data = vec![5, 3, 3, 1, 4];
//! assert_eq!(kth_largest(&mut data, 0).unwrap(), 1);
//! assert_eq!(kth_largest(&mut data, 4).unwrap(), 5);
//! assert!(kth_largest(&mut data, 5).is_err());
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Quicksort / Heapsort**: O(n log n) worst case, in place.
//! - **Parallel**: O(n) on presorted or strictly reversed input, O(n log n)
//!   otherwise; one scratch buffer of `n` elements.
//! - **Insertion**: O(n²), intended for small inputs.
//! - **Selection**: expected O(n).

mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod sorter;

pub use crate::config::SortConfig;
pub use crate::core::{Algorithm, Duplicates, Order, SortOptions, ValueAccessor};
pub use crate::error::SortError;
pub use crate::sorter::Sorter;

use std::cmp::Ordering;

pub mod prelude {
    pub use crate::config::SortConfig;
    pub use crate::core::{Algorithm, Duplicates, Order, SortOptions, ValueAccessor};
    pub use crate::error::SortError;
    pub use crate::sorter::Sorter;
    pub use crate::{
        kth_largest, kth_largest_by, kth_largest_index, sort, sort_by, sort_indices,
        sort_indirect, sort_indirect_by,
    };
}

/// Sorts `v` in place with the default configuration. See [`Sorter::sort`].
pub fn sort<T>(v: &mut [T], order: Order, options: impl Into<SortOptions>) -> usize
where
    T: Ord + Copy + Send + Sync,
{
    Sorter::default().sort(v, order, options)
}

/// See [`Sorter::sort_by`].
pub fn sort_by<T, F>(v: &mut [T], order: Order, options: impl Into<SortOptions>, compare: F) -> usize
where
    T: Copy + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    Sorter::default().sort_by(v, order, options, compare)
}

/// See [`Sorter::sort_indirect`].
pub fn sort_indirect<A>(
    indices: &mut Vec<usize>,
    data: &A,
    order: Order,
    options: impl Into<SortOptions>,
) -> usize
where
    A: ValueAccessor + Sync + ?Sized,
    A::Value: Ord,
{
    Sorter::default().sort_indirect(indices, data, order, options)
}

/// See [`Sorter::sort_indirect_by`].
pub fn sort_indirect_by<A, F>(
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
    Sorter::default().sort_indirect_by(indices, data, order, options, compare)
}

/// See [`Sorter::sort_indices`].
pub fn sort_indices<A>(data: &A, order: Order, options: impl Into<SortOptions>) -> Vec<usize>
where
    A: ValueAccessor + Sync + ?Sized,
    A::Value: Ord,
{
    Sorter::default().sort_indices(data, order, options)
}

/// See [`Sorter::kth_largest`].
pub fn kth_largest<T: Ord + Copy>(v: &mut [T], k: usize) -> Result<T, SortError> {
    Sorter::default().kth_largest(v, k)
}

/// See [`Sorter::kth_largest_by`].
pub fn kth_largest_by<T, F>(v: &mut [T], k: usize, compare: F) -> Result<T, SortError>
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    Sorter::default().kth_largest_by(v, k, compare)
}

/// See [`Sorter::kth_largest_index`].
pub fn kth_largest_index<A>(data: &A, k: usize) -> Result<usize, SortError>
where
    A: ValueAccessor + Sync + ?Sized,
    A::Value: Ord,
{
    Sorter::default().kth_largest_index(data, k)
}
