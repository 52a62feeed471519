use alloc::vec::Vec;
use core::ops::ControlFlow;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::{LeafSize, Units, test_count};
use crate::{
    CodePoint, CodePointSeq, FoldOptions, LossyStringSink, Utf16Sink, combiner, fold_range,
    reduce_range,
};

fn push(mut acc: Vec<CodePoint>, cp: CodePoint) -> ControlFlow<Vec<CodePoint>, Vec<CodePoint>> {
    acc.push(cp);
    ControlFlow::Continue(acc)
}

/// Property: for any buffer and leaf size, folding with an associative but
/// non-commutative combiner yields exactly the sequential reduction.
#[test]
fn fold_equals_reduce() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: Units, leaf: LeafSize) -> bool {
        let units = units.0;
        let folded = fold_range(
            &units,
            0..units.len(),
            FoldOptions::with_leaf_size(leaf.0),
            combiner(Vec::new, |mut l: Vec<CodePoint>, r: Vec<CodePoint>| {
                l.extend(r);
                l
            }),
            push,
        );
        let reduced = reduce_range(&units, 0..units.len(), Vec::new(), push);
        folded == reduced
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Units, LeafSize) -> bool);
}

#[quickcheck]
fn fold_with_sink_round_trips(units: Units, leaf: LeafSize) -> bool {
    let seq = CodePointSeq::new(&units.0);
    seq.fold_with(FoldOptions::with_leaf_size(leaf.0), &Utf16Sink) == units.0
}

#[quickcheck]
fn fold_text_matches_sequential_text(units: Units, leaf: LeafSize) -> bool {
    let seq = CodePointSeq::new(&units.0);
    seq.fold_with(FoldOptions::with_leaf_size(leaf.0), &LossyStringSink)
        == seq.reduce_with(&LossyStringSink)
}

#[quickcheck]
fn fold_sum_matches_reduce_sum(units: Units, leaf: LeafSize) -> bool {
    let seq = CodePointSeq::new(&units.0);
    let add = |acc: u64, cp: CodePoint| ControlFlow::Continue(acc + u64::from(cp.to_u32()));
    let folded = seq.fold(
        FoldOptions::with_leaf_size(leaf.0),
        combiner(|| 0u64, |a, b| a + b),
        add,
    );
    folded == seq.reduce(0u64, add)
}
