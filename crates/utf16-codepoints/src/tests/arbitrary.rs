//! Generators for code points and surrogate-heavy unit buffers.

use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{CodePoint, encode_utf16};

/// Number of property iterations: more on CI, few under miri.
pub(crate) fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Returns `true` if `cp` lies in `min..=max`.
pub(crate) fn within(cp: CodePoint, min: u32, max: u32) -> bool {
    (min..=max).contains(&cp.to_u32())
}

impl Arbitrary for CodePoint {
    fn arbitrary(g: &mut Gen) -> Self {
        CodePoint::from_u32(u32::arbitrary(g) % 0x11_0000).unwrap_or_default()
    }
}

/// A code point outside the BMP, `0x10000..=0x10FFFF`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Supplementary(pub CodePoint);

impl Arbitrary for Supplementary {
    fn arbitrary(g: &mut Gen) -> Self {
        let value = 0x1_0000 + u32::arbitrary(g) % 0x10_0000;
        Self(CodePoint::from_u32(value).unwrap_or(CodePoint::MAX))
    }
}

/// A unit that is not a surrogate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plain(pub u16);

impl Arbitrary for Plain {
    fn arbitrary(g: &mut Gen) -> Self {
        let unit = u16::arbitrary(g);
        Self(if (0xD800..=0xDFFF).contains(&unit) { unit - 0x800 } else { unit })
    }
}

/// A buffer in which pairs and lone surrogates of both kinds are common.
#[derive(Debug, Clone)]
pub(crate) struct Units(pub Vec<u16>);

impl Arbitrary for Units {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() * 2 + 1);
        let mut units = Vec::with_capacity(len + 1);
        while units.len() < len {
            match u8::arbitrary(g) % 5 {
                0 => units.push(Plain::arbitrary(g).0),
                1 => units.push(0xD800 + u16::arbitrary(g) % 0x400),
                2 => units.push(0xDC00 + u16::arbitrary(g) % 0x400),
                3 => {
                    let (pair, n) = encode_utf16(Supplementary::arbitrary(g).0);
                    units.extend_from_slice(&pair[..n]);
                }
                _ => units.push(u16::arbitrary(g)),
            }
        }
        Self(units)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

/// A leaf size small enough that folds over generated buffers really split.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeafSize(pub usize);

impl Arbitrary for LeafSize {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(1 + usize::arbitrary(g) % 16)
    }
}
