//! Parallel fork/join reduction over a UTF-16 buffer.
//!
//! The range is halved by code-unit count until a piece is no longer than
//! the configured leaf size. Each leaf is reduced sequentially from the
//! combiner's identity, and sibling results are merged left to right, so the
//! combiner only has to be associative.
//!
//! A split point never falls between the two halves of a surrogate pair:
//! when the unit before the midpoint is a high surrogate and the unit at it
//! is a low surrogate, the midpoint moves one unit right.

use core::num::NonZeroUsize;
use core::ops::{ControlFlow, Range};

use tracing::{debug, trace};

use crate::code_point::{CodePoint, is_high_surrogate, is_low_surrogate};
use crate::decode::reduce_unchecked;
use crate::error::{Error, check_range};

/// Default leaf size in code units.
///
/// Large enough that a leaf's decode work outweighs handing the other half
/// to the worker pool.
pub const DEFAULT_LEAF_SIZE: usize = 4096;

const DEFAULT_LEAF: NonZeroUsize = match NonZeroUsize::new(DEFAULT_LEAF_SIZE) {
    Some(n) => n,
    None => unreachable!(),
};

/// An associative merge of two partial results, with an identity element.
///
/// `combine(identity(), x)` and `combine(x, identity())` must both equal `x`,
/// and `combine` must be associative. It need not be commutative: the left
/// argument always covers the earlier part of the buffer.
pub trait Combine<A> {
    /// The identity element; also the seed of every leaf reduction.
    fn identity(&self) -> A;

    /// Merges the result for an earlier range with the result for the range
    /// right after it.
    fn combine(&self, left: A, right: A) -> A;
}

impl<A, C: Combine<A> + ?Sized> Combine<A> for &C {
    fn identity(&self) -> A {
        (**self).identity()
    }

    fn combine(&self, left: A, right: A) -> A {
        (**self).combine(left, right)
    }
}

/// A [`Combine`] built from two closures. See [`combiner`].
#[derive(Debug, Clone, Copy)]
pub struct FnCombiner<I, C> {
    identity: I,
    combine: C,
}

/// Builds a [`Combine`] from an identity constructor and a merge function.
///
/// ```rust
/// use core::ops::ControlFlow;
/// use utf16_codepoints::{CodePointSeq, FoldOptions, combiner};
///
/// let units: Vec<u16> = "b\u{1F41D}e".encode_utf16().collect();
/// let count = CodePointSeq::new(&units).fold(
///     FoldOptions::default(),
///     combiner(|| 0usize, |a, b| a + b),
///     |n, _| ControlFlow::Continue(n + 1),
/// );
/// assert_eq!(count, 3);
/// ```
pub fn combiner<A, I, C>(identity: I, combine: C) -> FnCombiner<I, C>
where
    I: Fn() -> A,
    C: Fn(A, A) -> A,
{
    FnCombiner { identity, combine }
}

impl<A, I, C> Combine<A> for FnCombiner<I, C>
where
    I: Fn() -> A,
    C: Fn(A, A) -> A,
{
    fn identity(&self) -> A {
        (self.identity)()
    }

    fn combine(&self, left: A, right: A) -> A {
        (self.combine)(left, right)
    }
}

/// Configuration for [`fold_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldOptions {
    /// Ranges of at most this many code units are reduced sequentially
    /// instead of being split further.
    ///
    /// # Default
    ///
    /// [`DEFAULT_LEAF_SIZE`]
    pub leaf_size: NonZeroUsize,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            leaf_size: DEFAULT_LEAF,
        }
    }
}

impl FoldOptions {
    /// Options with the given leaf size; zero is raised to one.
    #[must_use]
    pub fn with_leaf_size(leaf_size: usize) -> Self {
        Self {
            leaf_size: NonZeroUsize::new(leaf_size).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Folds the code points in `range` of `units`, splitting the work across
/// the worker pool.
///
/// Every leaf starts from `combiner.identity()` and applies `step` to its
/// code points in order; partial results are merged with
/// `combiner.combine(left, right)`. For an associative combiner the result
/// equals a sequential reduction of the same range.
///
/// A `Break` from `step` ends the leaf that produced it; other leaves are
/// unaffected.
///
/// With the `parallel` feature disabled, both halves of every split run on
/// the calling thread. A panic in either half propagates to the caller.
///
/// # Errors
///
/// Returns [`Error::RangeOutOfBounds`] if `range` is not a sub-range of
/// `units`.
pub fn fold_range<A, C, F>(
    units: &[u16],
    range: Range<usize>,
    options: FoldOptions,
    combiner: C,
    step: F,
) -> Result<A, Error>
where
    A: Send,
    C: Combine<A> + Sync,
    F: Fn(A, CodePoint) -> ControlFlow<A, A> + Sync,
{
    check_range(&range, units.len())?;
    Ok(fold_in(units, range, options, &combiner, &step))
}

/// `fold_range` without the bounds check; `range` must already be valid.
pub(crate) fn fold_in<A, C, F>(
    units: &[u16],
    range: Range<usize>,
    options: FoldOptions,
    combiner: &C,
    step: &F,
) -> A
where
    A: Send,
    C: Combine<A> + Sync,
    F: Fn(A, CodePoint) -> ControlFlow<A, A> + Sync,
{
    debug!(
        start = range.start,
        end = range.end,
        leaf_size = options.leaf_size.get(),
        "fold"
    );
    fold_unchecked(units, range, options.leaf_size.get(), combiner, step)
}

fn fold_unchecked<A, C, F>(
    units: &[u16],
    range: Range<usize>,
    leaf_size: usize,
    combiner: &C,
    step: &F,
) -> A
where
    A: Send,
    C: Combine<A> + Sync,
    F: Fn(A, CodePoint) -> ControlFlow<A, A> + Sync,
{
    let Range { start, end } = range;
    let len = end - start;

    if len <= leaf_size || (len == 2 && is_pair(units, start)) {
        trace!(start, end, "leaf");
        return reduce_unchecked(units, start..end, combiner.identity(), step);
    }

    let mut mid = start + len / 2;
    if is_pair(units, mid - 1) {
        mid += 1;
    }
    trace!(start, mid, end, "split");

    let (left, right) = join(
        || fold_unchecked(units, start..mid, leaf_size, combiner, step),
        || fold_unchecked(units, mid..end, leaf_size, combiner, step),
    );
    combiner.combine(left, right)
}

#[inline]
fn is_pair(units: &[u16], at: usize) -> bool {
    is_high_surrogate(units[at]) && is_low_surrogate(units[at + 1])
}

/// Runs `left` here and offers `right` to the pool.
#[cfg(feature = "parallel")]
fn join<L, R, LA, RA>(left: L, right: R) -> (LA, RA)
where
    L: FnOnce() -> LA + Send,
    R: FnOnce() -> RA + Send,
    LA: Send,
    RA: Send,
{
    rayon::join(left, right)
}

#[cfg(not(feature = "parallel"))]
fn join<L, R, LA, RA>(left: L, right: R) -> (LA, RA)
where
    L: FnOnce() -> LA + Send,
    R: FnOnce() -> RA + Send,
    LA: Send,
    RA: Send,
{
    (left(), right())
}
