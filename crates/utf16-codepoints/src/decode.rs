//! Lenient UTF-16 decoding over a borrowed buffer.
//!
//! A high surrogate immediately followed by a low surrogate decodes to one
//! supplementary code point. Every other unit, including an unpaired
//! surrogate, decodes to a code point equal to its own value. Nothing is
//! rejected and nothing is replaced.

use core::iter::FusedIterator;
use core::ops::{ControlFlow, Range};

use crate::code_point::{CodePoint, combine_surrogates, is_high_surrogate, is_low_surrogate};
use crate::error::{Error, check_range};

/// Decodes the code point starting at `index`.
///
/// Returns the code point and the number of code units it occupies (1 or 2).
///
/// # Panics
///
/// Panics if `index >= units.len()`. Use [`try_decode_at`] for a checked
/// variant.
#[inline]
#[must_use]
pub fn decode_at(units: &[u16], index: usize) -> (CodePoint, usize) {
    match try_decode_at(units, index) {
        Ok(decoded) => decoded,
        Err(e) => panic!("{e}"),
    }
}

/// Decodes the code point starting at `index`, or reports an out-of-range
/// offset.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfBounds`] if `index >= units.len()`.
#[inline]
pub fn try_decode_at(units: &[u16], index: usize) -> Result<(CodePoint, usize), Error> {
    let Some(&unit) = units.get(index) else {
        return Err(Error::IndexOutOfBounds {
            index,
            len: units.len(),
        });
    };

    if is_high_surrogate(unit) {
        if let Some(&next) = units.get(index + 1) {
            if is_low_surrogate(next) {
                return Ok((combine_surrogates(unit, next), 2));
            }
        }
    }

    Ok((CodePoint::from_unit(unit), 1))
}

/// Reduces the code points in `range` of `units` with `step`.
///
/// `step` returns [`ControlFlow::Continue`] to keep going or
/// [`ControlFlow::Break`] to stop; on `Break` the carried accumulator is
/// returned at once and nothing further is decoded.
///
/// Decoding looks at the whole buffer, so a surrogate pair that starts on the
/// last unit of `range` is still decoded as a pair.
///
/// # Errors
///
/// Returns [`Error::RangeOutOfBounds`] if `range` is not a sub-range of
/// `units`.
pub fn reduce_range<A, F>(units: &[u16], range: Range<usize>, init: A, step: F) -> Result<A, Error>
where
    F: FnMut(A, CodePoint) -> ControlFlow<A, A>,
{
    check_range(&range, units.len())?;
    Ok(reduce_unchecked(units, range, init, step))
}

/// `reduce_range` without the bounds check; `range` must already be valid.
pub(crate) fn reduce_unchecked<A, F>(units: &[u16], range: Range<usize>, init: A, mut step: F) -> A
where
    F: FnMut(A, CodePoint) -> ControlFlow<A, A>,
{
    let mut acc = init;
    let mut i = range.start;
    while i < range.end {
        let (cp, width) = decode_at(units, i);
        acc = match step(acc, cp) {
            ControlFlow::Continue(acc) => acc,
            ControlFlow::Break(acc) => return acc,
        };
        i += width;
    }
    acc
}

/// A lazy iterator over the code points of a UTF-16 buffer.
///
/// Created by [`CodePointSeq::iter`](crate::CodePointSeq::iter).
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> CodePoints<'a> {
    pub(crate) fn new(units: &'a [u16]) -> Self {
        Self { units, pos: 0 }
    }

    /// The code units not yet decoded.
    #[must_use]
    pub fn remaining(&self) -> &'a [u16] {
        &self.units[self.pos..]
    }
}

impl Iterator for CodePoints<'_> {
    type Item = CodePoint;

    #[inline]
    fn next(&mut self) -> Option<CodePoint> {
        let (cp, width) = try_decode_at(self.units, self.pos).ok()?;
        self.pos += width;
        Some(cp)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.units.len() - self.pos;
        (left.div_ceil(2), Some(left))
    }
}

impl FusedIterator for CodePoints<'_> {}
