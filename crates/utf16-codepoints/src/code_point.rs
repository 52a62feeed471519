//! Code points as produced by the decoder: U+0000 to U+10FFFF, surrogates
//! included.

use alloc::string::String;
use core::fmt;

/// Returns `true` for a UTF-16 high (leading) surrogate, `0xD800..=0xDBFF`.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Returns `true` for a UTF-16 low (trailing) surrogate, `0xDC00..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Combines a high and a low surrogate into a supplementary code point.
///
/// The caller is responsible for passing a high surrogate followed by a low
/// one; other inputs produce a meaningless (but in-range) value.
#[inline]
#[must_use]
pub const fn combine_surrogates(high: u16, low: u16) -> CodePoint {
    let hi = (high as u32).wrapping_sub(0xD800) & 0x3FF;
    let lo = (low as u32).wrapping_sub(0xDC00) & 0x3FF;
    CodePoint {
        value: 0x1_0000 + ((hi << 10) | lo),
    }
}

/// Encodes a code point as one or two UTF-16 code units.
///
/// Returns the units and how many of them are used. Surrogate code points
/// encode to themselves, so decoding followed by encoding reproduces the
/// input exactly even when it is ill-formed.
#[inline]
#[must_use]
pub const fn encode_utf16(cp: CodePoint) -> ([u16; 2], usize) {
    let p = cp.value;
    if p >= 0x1_0000 {
        let p = p - 0x1_0000;
        (
            [(p >> 10) as u16 | 0xD800, (p & 0x3FF) as u16 | 0xDC00],
            2,
        )
    } else {
        ([p as u16, 0], 1)
    }
}

/// A Unicode code point: from U+0000 to U+10FFFF.
///
/// Unlike `char`, a `CodePoint` may hold a surrogate (U+D800 to U+DFFF);
/// that is how unpaired surrogates come out of the decoder.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct CodePoint {
    value: u32,
}

/// Format the code point as `U+` followed by four to six hexadecimal digits.
/// Example: `U+1F41D`
impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.value)
    }
}

/// Writes the code point as text, with U+FFFD standing in for surrogates.
impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.to_char_lossy())
    }
}

impl CodePoint {
    /// The largest code point, U+10FFFF.
    pub const MAX: CodePoint = CodePoint { value: 0x10_FFFF };

    /// Creates a new `CodePoint` if the value is a valid code point.
    ///
    /// Returns `None` if `value` is above 0x10FFFF.
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<CodePoint> {
        if value <= Self::MAX.value {
            Some(CodePoint { value })
        } else {
            None
        }
    }

    /// Creates a code point from a single UTF-16 code unit.
    ///
    /// Every unit, surrogate or not, is a valid code point on its own.
    #[inline]
    #[must_use]
    pub const fn from_unit(unit: u16) -> CodePoint {
        CodePoint { value: unit as u32 }
    }

    /// Returns the numeric value of the code point.
    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.value
    }

    /// Returns `true` if this is a surrogate code point (U+D800 to U+DFFF).
    #[inline]
    #[must_use]
    pub const fn is_surrogate(self) -> bool {
        matches!(self.value, 0xD800..=0xDFFF)
    }

    /// Returns `true` if the code point lies outside the Basic Multilingual
    /// Plane and therefore takes two code units in UTF-16.
    #[inline]
    #[must_use]
    pub const fn is_supplementary(self) -> bool {
        self.value >= 0x1_0000
    }

    /// Optionally returns a Unicode scalar value for the code point.
    ///
    /// Returns `None` if the code point is a surrogate.
    #[inline]
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.value)
    }

    /// Returns a Unicode scalar value for the code point, or `'\u{FFFD}'`
    /// (the replacement character) if it is a surrogate.
    #[inline]
    #[must_use]
    pub fn to_char_lossy(self) -> char {
        self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Renders this single code point as text.
    #[must_use]
    pub fn to_text(self) -> String {
        let mut s = String::with_capacity(4);
        s.push(self.to_char_lossy());
        s
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> Self {
        CodePoint { value: c as u32 }
    }
}

impl From<u16> for CodePoint {
    #[inline]
    fn from(unit: u16) -> Self {
        Self::from_unit(unit)
    }
}

impl From<CodePoint> for u32 {
    #[inline]
    fn from(cp: CodePoint) -> Self {
        cp.value
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = crate::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(crate::Error::InvalidCodePoint(value))
    }
}

impl PartialEq<u32> for CodePoint {
    #[inline]
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}

impl PartialEq<CodePoint> for u32 {
    #[inline]
    fn eq(&self, other: &CodePoint) -> bool {
        *self == other.value
    }
}
