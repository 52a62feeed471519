//! Incremental decoding of code units that arrive one at a time.
//!
//! [`StreamDecoder`] holds at most one pending high surrogate between calls.
//! It has two interfaces over the same state machine:
//!
//! - [`feed`](StreamDecoder::feed) / [`flush`](StreamDecoder::flush) return
//!   whatever became decodable,
//! - [`feed_with`](StreamDecoder::feed_with) /
//!   [`finish_with`](StreamDecoder::finish_with) push code points into a
//!   reducing step that may ask to stop.
//!
//! ```rust
//! use utf16_codepoints::StreamDecoder;
//!
//! let mut decoder = StreamDecoder::new();
//! let mut out = Vec::new();
//! for unit in [0x62, 0xD83D, 0xDC1D, 0x65] {
//!     out.extend(decoder.feed(unit));
//! }
//! out.extend(decoder.flush());
//! let values: Vec<u32> = out.into_iter().map(u32::from).collect();
//! assert_eq!(values, [98, 128_029, 101]);
//! ```

use core::iter::FusedIterator;
use core::ops::ControlFlow;

use tracing::trace;

use crate::code_point::{CodePoint, combine_surrogates, is_high_surrogate, is_low_surrogate};

/// A resumable UTF-16 decoder that carries a pending high surrogate across
/// calls.
///
/// Not synchronized: a decoder belongs to whichever caller is feeding it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamDecoder {
    pending: Option<u16>,
}

impl StreamDecoder {
    /// Creates a decoder with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// The buffered high surrogate, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<u16> {
        self.pending
    }

    /// Returns `true` if no unit is buffered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    /// Feeds one code unit and returns the code points it completes.
    ///
    /// Yields nothing when `unit` is a high surrogate that has to wait for its
    /// partner, one code point in the common case, and two when a pending high
    /// surrogate turns out to be unpaired and `unit` is an ordinary unit.
    pub fn feed(&mut self, unit: u16) -> Emitted {
        let mut out = Emitted::default();
        let _ = self.feed_with((), unit, |(), cp| {
            out.push(cp);
            ControlFlow::Continue(())
        });
        out
    }

    /// Ends the current stream, returning a trailing unpaired high surrogate
    /// if one is pending. The decoder is empty afterwards and can start a new
    /// stream.
    pub fn flush(&mut self) -> Option<CodePoint> {
        let high = self.pending.take()?;
        trace!(unit = high, "flushing unpaired high surrogate");
        Some(CodePoint::from_unit(high))
    }

    /// Feeds one code unit, passing every completed code point to `step`.
    ///
    /// Returns `Break` as soon as `step` does. The pending slot is always empty
    /// after a `Break`; in particular, a high surrogate that arrived while an
    /// earlier unpaired one was being emitted is dropped rather than
    /// buffered, because the consumer has stopped.
    pub fn feed_with<A, F>(&mut self, acc: A, unit: u16, mut step: F) -> ControlFlow<A, A>
    where
        F: FnMut(A, CodePoint) -> ControlFlow<A, A>,
    {
        match self.pending.take() {
            None if is_high_surrogate(unit) => {
                self.pending = Some(unit);
                ControlFlow::Continue(acc)
            }
            None => step(acc, CodePoint::from_unit(unit)),
            Some(high) if is_low_surrogate(unit) => step(acc, combine_surrogates(high, unit)),
            Some(high) if is_high_surrogate(unit) => {
                let acc = step(acc, CodePoint::from_unit(high))?;
                self.pending = Some(unit);
                ControlFlow::Continue(acc)
            }
            Some(high) => {
                let acc = step(acc, CodePoint::from_unit(high))?;
                step(acc, CodePoint::from_unit(unit))
            }
        }
    }

    /// Ends the current stream, passing a trailing unpaired high surrogate to
    /// `step`, and returns the final accumulator.
    ///
    /// Callers that stopped on a `Break` from [`feed_with`](Self::feed_with)
    /// need not call this: nothing is pending at that point.
    pub fn finish_with<A, F>(&mut self, acc: A, mut step: F) -> A
    where
        F: FnMut(A, CodePoint) -> ControlFlow<A, A>,
    {
        match self.flush() {
            Some(cp) => match step(acc, cp) {
                ControlFlow::Continue(acc) | ControlFlow::Break(acc) => acc,
            },
            None => acc,
        }
    }
}

/// Reduces a stream of code units with `step`, flushing at the end.
///
/// Stops pulling from `units` as soon as `step` returns `Break`.
///
/// ```rust
/// use core::ops::ControlFlow;
/// use utf16_codepoints::decode_stream;
///
/// let first_two = decode_stream([0x62u16, 0xD83D, 0xDC1D, 0x65], Vec::new(), |mut v, cp| {
///     v.push(cp.to_u32());
///     if v.len() == 2 { ControlFlow::Break(v) } else { ControlFlow::Continue(v) }
/// });
/// assert_eq!(first_two, [98, 0x1F41D]);
/// ```
pub fn decode_stream<I, A, F>(units: I, init: A, mut step: F) -> A
where
    I: IntoIterator<Item = u16>,
    F: FnMut(A, CodePoint) -> ControlFlow<A, A>,
{
    let mut decoder = StreamDecoder::new();
    let mut acc = init;
    for unit in units {
        acc = match decoder.feed_with(acc, unit, &mut step) {
            ControlFlow::Continue(acc) => acc,
            ControlFlow::Break(acc) => return acc,
        };
    }
    decoder.finish_with(acc, step)
}

/// Code points completed by a single [`StreamDecoder::feed`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emitted {
    slots: [Option<CodePoint>; 2],
    next: usize,
}

impl Emitted {
    fn push(&mut self, cp: CodePoint) {
        let slot = if self.slots[0].is_none() { 0 } else { 1 };
        self.slots[slot] = Some(cp);
    }
}

impl Iterator for Emitted {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        let cp = self.slots.get_mut(self.next)?.take()?;
        self.next += 1;
        Some(cp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.slots[self.next.min(2)..]
            .iter()
            .filter(|s| s.is_some())
            .count();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Emitted {}
impl FusedIterator for Emitted {}

/// Decodes an iterator of code units into code points.
///
/// Created by [`decode_units`].
#[derive(Debug, Clone)]
pub struct DecodeUnits<I> {
    input: I,
    decoder: StreamDecoder,
    ready: Emitted,
    done: bool,
}

/// Adapts an iterator of UTF-16 code units into an iterator of code points,
/// decoding lazily with a [`StreamDecoder`].
pub fn decode_units<I>(units: I) -> DecodeUnits<I::IntoIter>
where
    I: IntoIterator<Item = u16>,
{
    DecodeUnits {
        input: units.into_iter(),
        decoder: StreamDecoder::new(),
        ready: Emitted::default(),
        done: false,
    }
}

impl<I> Iterator for DecodeUnits<I>
where
    I: Iterator<Item = u16>,
{
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        loop {
            if let Some(cp) = self.ready.next() {
                return Some(cp);
            }
            if self.done {
                return None;
            }
            match self.input.next() {
                Some(unit) => self.ready = self.decoder.feed(unit),
                None => {
                    self.done = true;
                    return self.decoder.flush();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.input.size_hint();
        let ready = self.ready.len();
        let pending = usize::from(!self.decoder.is_empty());
        (
            ready + lo.div_ceil(2),
            hi.and_then(|h| h.checked_add(ready + pending)),
        )
    }
}

impl<I> FusedIterator for DecodeUnits<I> where I: Iterator<Item = u16> {}
