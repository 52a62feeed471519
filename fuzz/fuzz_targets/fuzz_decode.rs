#![no_main]
use std::ops::ControlFlow;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf16_codepoints::{
    CodePoint, CodePointSeq, FoldOptions, StreamDecoder, Utf16Sink, combiner, decode_stream,
};

#[derive(Debug, Arbitrary)]
struct Input {
    leaf_size: u8,
    stop_after: u8,
    units: Vec<u16>,
}

fn push(mut acc: Vec<CodePoint>, cp: CodePoint) -> ControlFlow<Vec<CodePoint>, Vec<CodePoint>> {
    acc.push(cp);
    ControlFlow::Continue(acc)
}

fn check(input: &Input) {
    let seq = CodePointSeq::new(&input.units);
    let iterated: Vec<CodePoint> = seq.iter().collect();

    // Every access mode has to agree with plain iteration.
    assert_eq!(seq.reduce(Vec::new(), push), iterated);

    let options = FoldOptions::with_leaf_size(usize::from(input.leaf_size));
    let folded = seq.fold(
        options,
        combiner(Vec::new, |mut l: Vec<CodePoint>, r: Vec<CodePoint>| {
            l.extend(r);
            l
        }),
        push,
    );
    assert_eq!(folded, iterated);

    let mut decoder = StreamDecoder::new();
    let mut streamed = Vec::new();
    for &unit in &input.units {
        streamed.extend(decoder.feed(unit));
    }
    streamed.extend(decoder.flush());
    assert_eq!(streamed, iterated);

    // Lossless round trip, sequential and parallel.
    assert_eq!(seq.to_units(), input.units);
    assert_eq!(seq.fold_with(options, &Utf16Sink), input.units);

    // Early termination yields a prefix of the full decode.
    let limit = usize::from(input.stop_after) + 1;
    let prefix = decode_stream(input.units.iter().copied(), Vec::new(), |mut acc, cp| {
        acc.push(cp);
        if acc.len() == limit {
            ControlFlow::Break(acc)
        } else {
            ControlFlow::Continue(acc)
        }
    });
    assert_eq!(prefix.len(), iterated.len().min(limit));
    assert!(iterated.starts_with(&prefix));
}

fuzz_target!(|input: Input| check(&input));
