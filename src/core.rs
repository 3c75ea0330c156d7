//! Core types for ordsort.
//!
//! This module defines:
//! - [`Order`], [`Algorithm`], [`Duplicates`] and [`SortOptions`]: what a caller asks for.
//! - [`ValueAccessor`]: The trait the indirect engine reads values through.
//! - SortKey: Internal comparator seam shared by every kernel.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::BitOr;

/// Requested direction of the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    /// Applies this order to an ascending three-way comparison result.
    #[inline(always)]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Order::Ascending => ord,
            Order::Descending => ord.reverse(),
        }
    }
}

/// Sorting algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Quicksort for small inputs or a single worker, otherwise Parallel.
    #[default]
    Default,
    /// Median-of-three introsort with an insertion-sort finisher.
    Quicksort,
    /// In-place heapsort, O(n log n) worst case.
    Heapsort,
    /// Insertion sort, O(n²). Only sensible for small inputs.
    Insertion,
    /// Parallel run detection followed by a parallel pairwise merge.
    Parallel,
}

/// What happens to elements that compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duplicates {
    #[default]
    Keep,
    /// Keep one element per group of equal elements.
    Remove,
}

/// Algorithm selector combined with a duplicate policy.
///
/// ```
/// use ordsort::{Algorithm, Duplicates, SortOptions};
///
/// let a = SortOptions::new()
///     .algorithm(Algorithm::Heapsort)
///     .duplicates(Duplicates::Remove);
/// let b = Algorithm::Heapsort | Duplicates::Remove;
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortOptions {
    pub algorithm: Algorithm,
    pub duplicates: Duplicates,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default algorithm with duplicate removal.
    pub fn no_duplicates() -> Self {
        Self::new().duplicates(Duplicates::Remove)
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }

    #[inline]
    pub(crate) fn dedup(&self) -> bool {
        self.duplicates == Duplicates::Remove
    }
}

impl From<Algorithm> for SortOptions {
    fn from(algorithm: Algorithm) -> Self {
        Self::new().algorithm(algorithm)
    }
}

impl From<Duplicates> for SortOptions {
    fn from(duplicates: Duplicates) -> Self {
        Self::new().duplicates(duplicates)
    }
}

impl BitOr<Duplicates> for Algorithm {
    type Output = SortOptions;

    fn bitor(self, rhs: Duplicates) -> SortOptions {
        SortOptions::new().algorithm(self).duplicates(rhs)
    }
}

impl BitOr<Algorithm> for Duplicates {
    type Output = SortOptions;

    fn bitor(self, rhs: Algorithm) -> SortOptions {
        rhs | self
    }
}

/// A trait for reading values from a collection by position without copying.
///
/// The indirect engine sorts positions into a collection implementing this trait
/// and never mutates it.
///
/// # Examples
///
/// Implementing for a column stored as a struct-of-arrays:
///
/// ```
/// use ordsort::core::ValueAccessor;
///
/// struct Rows {
///     ids: Vec<u32>,
///     scores: Vec<i64>,
/// }
///
/// impl ValueAccessor for Rows {
///     type Value = i64;
///
///     fn value(&self, index: usize) -> &i64 {
///         &self.scores[index]
///     }
///
///     fn len(&self) -> usize {
///         self.scores.len()
///     }
/// }
/// ```
pub trait ValueAccessor {
    type Value;

    /// Returns the value at the given position.
    fn value(&self, index: usize) -> &Self::Value;

    /// Returns the number of values in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ValueAccessor for [T] {
    type Value = T;

    fn value(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T> ValueAccessor for Vec<T> {
    type Value = T;

    fn value(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> ValueAccessor for VecDeque<T> {
    type Value = T;

    fn value(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Comparator seam shared by all kernels.
///
/// `compare` is the full sort order; `is_duplicate` decides which neighbours
/// collapse under [`Duplicates::Remove`]. For the direct engine the two agree,
/// for the indirect engine `compare` additionally breaks ties by position.
pub(crate) trait SortKey<E>: Sync {
    fn compare(&self, a: &E, b: &E) -> Ordering;

    fn is_duplicate(&self, a: &E, b: &E) -> bool;

    #[inline(always)]
    fn is_less(&self, a: &E, b: &E) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Compares elements directly.
pub(crate) struct ByValue<F> {
    cmp: F,
    order: Order,
}

impl<F> ByValue<F> {
    pub(crate) fn new(cmp: F, order: Order) -> Self {
        Self { cmp, order }
    }
}

impl<T, F> SortKey<T> for ByValue<F>
where
    F: Fn(&T, &T) -> Ordering + Sync,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.order.apply((self.cmp)(a, b))
    }

    #[inline(always)]
    fn is_duplicate(&self, a: &T, b: &T) -> bool {
        (self.cmp)(a, b) == Ordering::Equal
    }
}

/// Compares positions by the values they reference, lower position first on ties.
pub(crate) struct ByIndex<'a, A: ?Sized, F> {
    data: &'a A,
    cmp: F,
    order: Order,
}

impl<'a, A: ?Sized, F> ByIndex<'a, A, F> {
    pub(crate) fn new(data: &'a A, cmp: F, order: Order) -> Self {
        Self { data, cmp, order }
    }
}

impl<A, F> SortKey<usize> for ByIndex<'_, A, F>
where
    A: ValueAccessor + Sync + ?Sized,
    F: Fn(&A::Value, &A::Value) -> Ordering + Sync,
{
    #[inline(always)]
    fn compare(&self, a: &usize, b: &usize) -> Ordering {
        let by_value = (self.cmp)(self.data.value(*a), self.data.value(*b));
        self.order.apply(by_value).then(a.cmp(b))
    }

    #[inline(always)]
    fn is_duplicate(&self, a: &usize, b: &usize) -> bool {
        (self.cmp)(self.data.value(*a), self.data.value(*b)) == Ordering::Equal
    }
}
