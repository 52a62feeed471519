use thiserror::Error;

/// Precondition failures reported by the checked entry points.
///
/// Ill-formed UTF-16 is never an error: lone surrogates decode to code points
/// carrying their own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A decode was requested at an offset past the end of the buffer.
    #[error("index {index} out of bounds for buffer of {len} code units")]
    IndexOutOfBounds {
        /// Requested offset.
        index: usize,
        /// Buffer length in code units.
        len: usize,
    },

    /// A reduction or fold was requested over a range that is not a
    /// sub-range of the buffer.
    #[error("range {start}..{end} out of bounds for buffer of {len} code units")]
    RangeOutOfBounds {
        /// Range start.
        start: usize,
        /// Range end (exclusive).
        end: usize,
        /// Buffer length in code units.
        len: usize,
    },

    /// An integer above U+10FFFF was converted to a code point.
    #[error("{0:#X} is not a Unicode code point")]
    InvalidCodePoint(u32),
}

pub(crate) fn check_range(range: &core::ops::Range<usize>, len: usize) -> Result<(), Error> {
    if range.start > range.end || range.end > len {
        return Err(Error::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::IndexOutOfBounds { index: 4, len: 4 }.to_string(),
            "index 4 out of bounds for buffer of 4 code units"
        );
        assert_eq!(
            Error::InvalidCodePoint(0x11_0000).to_string(),
            "0x110000 is not a Unicode code point"
        );
    }

    #[test]
    fn ranges() {
        assert!(check_range(&(0..0), 0).is_ok());
        assert!(check_range(&(1..3), 3).is_ok());
        assert_eq!(
            check_range(&(2..5), 4),
            Err(Error::RangeOutOfBounds {
                start: 2,
                end: 5,
                len: 4
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = 3..1;
        assert!(check_range(&backwards, 4).is_err());
    }
}
