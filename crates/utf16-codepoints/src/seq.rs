//! A borrowed UTF-16 buffer exposed as a restartable sequence of code points.

use alloc::vec::Vec;
use core::fmt;
use core::ops::ControlFlow;

use crate::code_point::CodePoint;
use crate::decode::{CodePoints, reduce_unchecked};
use crate::fold::{Combine, FoldOptions, fold_in};
use crate::sink::{Reducer, Utf16Sink};

/// A borrowed UTF-16 buffer viewed as a sequence of code points.
///
/// The buffer is never copied or modified. Every call to [`iter`](Self::iter),
/// [`reduce`](Self::reduce) or [`fold`](Self::fold) starts a fresh,
/// independent traversal.
///
/// ```rust
/// use utf16_codepoints::CodePointSeq;
///
/// let units = [0x62, 0xD83D, 0xDC1D, 0x65];
/// let seq = CodePointSeq::new(&units);
/// let values: Vec<u32> = seq.iter().map(u32::from).collect();
/// assert_eq!(values, [98, 128_029, 101]);
/// assert_eq!(seq.to_string(), "b🐝e");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePointSeq<'a> {
    units: &'a [u16],
}

impl<'a> CodePointSeq<'a> {
    /// Wraps a buffer of UTF-16 code units.
    #[must_use]
    pub const fn new(units: &'a [u16]) -> Self {
        Self { units }
    }

    /// The underlying code units.
    #[must_use]
    pub const fn units(&self) -> &'a [u16] {
        self.units
    }

    /// Returns `true` if the buffer holds no code units.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Lazily decodes the buffer from the start.
    #[must_use]
    pub fn iter(&self) -> CodePoints<'a> {
        CodePoints::new(self.units)
    }

    /// Reduces every code point in order, stopping early on `Break`.
    pub fn reduce<A, F>(&self, init: A, step: F) -> A
    where
        F: FnMut(A, CodePoint) -> ControlFlow<A, A>,
    {
        reduce_unchecked(self.units, 0..self.units.len(), init, step)
    }

    /// Runs a [`Reducer`] over the whole sequence: init, step each code
    /// point, complete.
    pub fn reduce_with<R: Reducer>(&self, reducer: &R) -> R::Output {
        let acc = self.reduce(reducer.init(), |acc, cp| reducer.step(acc, cp));
        reducer.complete(acc)
    }

    /// Folds the whole sequence in parallel. See [`fold_range`](crate::fold_range).
    pub fn fold<A, C, F>(&self, options: FoldOptions, combiner: C, step: F) -> A
    where
        A: Send,
        C: Combine<A> + Sync,
        F: Fn(A, CodePoint) -> ControlFlow<A, A> + Sync,
    {
        fold_in(self.units, 0..self.units.len(), options, &combiner, &step)
    }

    /// Folds the whole sequence in parallel with a reducer that is also its
    /// own combiner, then completes the result.
    pub fn fold_with<R>(&self, options: FoldOptions, reducer: &R) -> R::Output
    where
        R: Reducer + Combine<R::Acc> + Sync,
        R::Acc: Send,
    {
        let acc = self.fold(options, reducer, |acc, cp| reducer.step(acc, cp));
        reducer.complete(acc)
    }

    /// Re-encodes the decoded code points; always equal to [`units`](Self::units).
    #[must_use]
    pub fn to_units(&self) -> Vec<u16> {
        self.reduce_with(&Utf16Sink)
    }
}

impl<'a> From<&'a [u16]> for CodePointSeq<'a> {
    fn from(units: &'a [u16]) -> Self {
        Self::new(units)
    }
}

impl<'a> From<&'a Vec<u16>> for CodePointSeq<'a> {
    fn from(units: &'a Vec<u16>) -> Self {
        Self::new(units)
    }
}

impl<'a> IntoIterator for &CodePointSeq<'a> {
    type Item = CodePoint;
    type IntoIter = CodePoints<'a>;

    fn into_iter(self) -> CodePoints<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for CodePointSeq<'a> {
    type Item = CodePoint;
    type IntoIter = CodePoints<'a>;

    fn into_iter(self) -> CodePoints<'a> {
        self.iter()
    }
}

impl fmt::Debug for CodePointSeq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writes the decoded text, with U+FFFD standing in for lone surrogates.
impl fmt::Display for CodePointSeq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|cp| fmt::Display::fmt(&cp, f))
    }
}
