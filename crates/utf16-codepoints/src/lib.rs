//! Lenient UTF-16 decoding into code points.
//!
//! A buffer of UTF-16 code units is decoded without validation: surrogate
//! pairs become supplementary code points and unpaired surrogates come out as
//! code points equal to their own value. The decoded view can be
//!
//! - iterated lazily ([`CodePointSeq::iter`]),
//! - reduced sequentially with early termination ([`reduce_range`],
//!   [`CodePointSeq::reduce`]),
//! - folded in parallel with an associative combiner ([`fold_range`],
//!   [`CodePointSeq::fold`]),
//! - or decoded incrementally, one unit at a time ([`StreamDecoder`]).
//!
//! Early termination uses [`core::ops::ControlFlow`]: a step function returns
//! `Continue(acc)` to go on or `Break(acc)` to stop with `acc` as the result.
//!
//! ```rust
//! use core::ops::ControlFlow;
//! use utf16_codepoints::{CodePointSeq, FoldOptions, LossyStringSink, Utf16Sink};
//!
//! let units: Vec<u16> = "b\u{1F41D}e".encode_utf16().collect();
//! let seq = CodePointSeq::new(&units);
//!
//! assert_eq!(seq.reduce_with(&LossyStringSink), "b🐝e");
//! assert_eq!(seq.fold_with(FoldOptions::with_leaf_size(1), &Utf16Sink), units);
//!
//! let first = seq.reduce(None, |_, cp| ControlFlow::Break(Some(cp)));
//! assert_eq!(first.map(u32::from), Some(98));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_point;
mod decode;
mod error;
mod fold;
mod seq;
mod sink;
mod streaming;

#[cfg(test)]
mod tests;

pub use code_point::{
    CodePoint, combine_surrogates, encode_utf16, is_high_surrogate, is_low_surrogate,
};
pub use decode::{CodePoints, decode_at, reduce_range, try_decode_at};
pub use error::Error;
pub use fold::{Combine, DEFAULT_LEAF_SIZE, FnCombiner, FoldOptions, combiner, fold_range};
pub use seq::CodePointSeq;
pub use sink::{LossyStringSink, Reducer, Utf16Sink};
pub use streaming::{DecodeUnits, Emitted, StreamDecoder, decode_stream, decode_units};
