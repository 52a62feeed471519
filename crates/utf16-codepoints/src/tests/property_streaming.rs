use alloc::vec::Vec;
use core::ops::ControlFlow;

use quickcheck_macros::quickcheck;

use super::arbitrary::Units;
use crate::{CodePoint, CodePointSeq, StreamDecoder, decode_stream, decode_units};

fn buffered(units: &[u16]) -> Vec<CodePoint> {
    CodePointSeq::new(units).iter().collect()
}

#[quickcheck]
fn streaming_matches_buffered(units: Units) -> bool {
    let mut decoder = StreamDecoder::new();
    let mut out = Vec::new();
    for &unit in &units.0 {
        out.extend(decoder.feed(unit));
    }
    out.extend(decoder.flush());
    out == buffered(&units.0) && decoder.is_empty()
}

#[quickcheck]
fn decode_stream_matches_buffered(units: Units) -> bool {
    let out = decode_stream(units.0.iter().copied(), Vec::new(), |mut acc, cp| {
        acc.push(cp);
        ControlFlow::Continue(acc)
    });
    out == buffered(&units.0)
}

#[quickcheck]
fn unit_iterator_matches_buffered(units: Units) -> bool {
    decode_units(units.0.iter().copied()).collect::<Vec<_>>() == buffered(&units.0)
}

#[quickcheck]
fn decoder_is_reusable_across_streams(first: Units, second: Units) -> bool {
    let mut decoder = StreamDecoder::new();
    let mut run = |units: &[u16]| {
        let mut out = Vec::new();
        for &unit in units {
            out.extend(decoder.feed(unit));
        }
        out.extend(decoder.flush());
        out
    };
    run(&first.0) == buffered(&first.0) && run(&second.0) == buffered(&second.0)
}

#[quickcheck]
fn streaming_break_is_a_prefix(units: Units, limit: u8) -> bool {
    let limit = usize::from(limit % 8) + 1;
    let out = decode_stream(units.0.iter().copied(), Vec::new(), |mut acc, cp| {
        acc.push(cp);
        if acc.len() == limit {
            ControlFlow::Break(acc)
        } else {
            ControlFlow::Continue(acc)
        }
    });
    let all = buffered(&units.0);
    out.len() == all.len().min(limit) && all.starts_with(&out)
}
