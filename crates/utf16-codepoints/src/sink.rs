//! Reducing functions that turn decoded code points back into text.
//!
//! A [`Reducer`] has three call shapes: create an empty accumulator, add one
//! code point to it, and finish it into an output value. The decoder treats
//! it as an opaque protocol; the two sinks here serialize code points back
//! out, either losslessly as UTF-16 or lossily as a Rust `String`.

use alloc::{string::String, vec::Vec};
use core::ops::ControlFlow;

use crate::code_point::{CodePoint, encode_utf16};
use crate::fold::Combine;

/// A three-phase reducing function over code points.
pub trait Reducer {
    /// Working accumulator.
    type Acc;
    /// Finished value produced by [`Reducer::complete`].
    type Output;

    /// Creates an empty accumulator.
    fn init(&self) -> Self::Acc;

    /// Adds one code point. `Break` asks the caller to stop feeding.
    fn step(&self, acc: Self::Acc, cp: CodePoint) -> ControlFlow<Self::Acc, Self::Acc>;

    /// Turns the accumulator into the finished value.
    fn complete(&self, acc: Self::Acc) -> Self::Output;
}

/// Re-encodes code points as UTF-16.
///
/// Surrogate code points are written back as the single unit they came
/// from, so decoding and then collecting with this sink reproduces any input
/// buffer exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Sink;

impl Reducer for Utf16Sink {
    type Acc = Vec<u16>;
    type Output = Vec<u16>;

    fn init(&self) -> Vec<u16> {
        Vec::new()
    }

    #[inline]
    fn step(&self, mut acc: Vec<u16>, cp: CodePoint) -> ControlFlow<Vec<u16>, Vec<u16>> {
        let (units, len) = encode_utf16(cp);
        acc.extend_from_slice(&units[..len]);
        ControlFlow::Continue(acc)
    }

    fn complete(&self, acc: Vec<u16>) -> Vec<u16> {
        acc
    }
}

impl Combine<Vec<u16>> for Utf16Sink {
    fn identity(&self) -> Vec<u16> {
        Vec::new()
    }

    fn combine(&self, mut left: Vec<u16>, right: Vec<u16>) -> Vec<u16> {
        left.extend_from_slice(&right);
        left
    }
}

/// Collects code points into a `String`, writing U+FFFD for surrogates.
///
/// Meant for display; use [`Utf16Sink`] when the exact units matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LossyStringSink;

impl Reducer for LossyStringSink {
    type Acc = String;
    type Output = String;

    fn init(&self) -> String {
        String::new()
    }

    #[inline]
    fn step(&self, mut acc: String, cp: CodePoint) -> ControlFlow<String, String> {
        acc.push(cp.to_char_lossy());
        ControlFlow::Continue(acc)
    }

    fn complete(&self, acc: String) -> String {
        acc
    }
}

impl Combine<String> for LossyStringSink {
    fn identity(&self) -> String {
        String::new()
    }

    fn combine(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::decode::reduce_range;

    #[test]
    fn utf16_sink_reproduces_ill_formed_input() {
        let units = [0xDC00, 0x62, 0xD83D, 0xDC1D, 0xD800];
        let sink = Utf16Sink;
        let acc = reduce_range(&units, 0..units.len(), sink.init(), |acc, cp| {
            sink.step(acc, cp)
        })
        .unwrap();
        assert_eq!(sink.complete(acc), units.to_vec());
    }

    #[test]
    fn lossy_sink_replaces_surrogates() {
        let units = [0x62, 0xD83D, 0xDC1D, 0xDFFF];
        let sink = LossyStringSink;
        let acc = reduce_range(&units, 0..units.len(), sink.init(), |acc, cp| {
            sink.step(acc, cp)
        })
        .unwrap();
        assert_eq!(sink.complete(acc), "b🐝\u{FFFD}");
    }

    #[test]
    fn combine_concatenates_in_order() {
        let sink = Utf16Sink;
        let joined = sink.combine(vec![1, 2], vec![3]);
        assert_eq!(joined, vec![1, 2, 3]);
        assert!(sink.identity().is_empty());
    }
}
