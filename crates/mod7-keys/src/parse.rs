//! Structural classification of candidate keys.
//!
//! Classification looks only at length and separator positions, measured in
//! bytes, so arbitrary input (including non-ASCII text) never panics.
//! Segment contents are checked later by the validator.

use mod7_core::{KeyShape, STRUCTURED_KEY_LEN, TEN_DIGIT_KEY_LEN};
use std::fmt;

/// Raw bytes of one key segment.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a>(&'a [u8]);

impl<'a> RawSegment<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit values, or `None` if any byte is not an ASCII digit.
    pub fn digits(&self) -> Option<Vec<u8>> {
        if self.0.is_empty() || !self.0.iter().all(u8::is_ascii_digit) {
            return None;
        }
        Some(self.0.iter().map(|b| b - b'0').collect())
    }

    /// Decimal value, or `None` if the segment is not numeric.
    pub fn value(&self) -> Option<u32> {
        self.digits()?
            .iter()
            .try_fold(0u32, |acc, &d| acc.checked_mul(10)?.checked_add(u32::from(d)))
    }

    /// Sub-segment by byte range.
    pub fn slice(&self, range: std::ops::Range<usize>) -> RawSegment<'a> {
        RawSegment(&self.0[range])
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.0).into_owned()
    }
}

impl fmt::Debug for RawSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

/// Segments of a `XXX-XXXXXXX` candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenDigitSegments<'a> {
    pub site: RawSegment<'a>,
    pub serial: RawSegment<'a>,
}

/// Segments of a `XXXXX-OEM-XXXXXXX-XXXXX` candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredSegments<'a> {
    /// Julian day and year, five bytes.
    pub date_year: RawSegment<'a>,
    /// The three bytes between the first two separators.
    pub marker: RawSegment<'a>,
    /// Seven bytes, leading zero included.
    pub serial: RawSegment<'a>,
    pub filler: RawSegment<'a>,
}

impl<'a> StructuredSegments<'a> {
    pub fn julian_day(&self) -> RawSegment<'a> {
        self.date_year.slice(0..3)
    }

    pub fn year(&self) -> RawSegment<'a> {
        self.date_year.slice(3..5)
    }
}

/// A candidate key after structural classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedKey<'a> {
    TenDigit(TenDigitSegments<'a>),
    Structured(StructuredSegments<'a>),
    Unrecognized,
}

impl<'a> ParsedKey<'a> {
    /// Classify a candidate by length and separator positions.
    pub fn parse(candidate: &'a str) -> Self {
        let bytes = candidate.as_bytes();
        let segment = move |range: std::ops::Range<usize>| RawSegment(&bytes[range]);

        match bytes.len() {
            TEN_DIGIT_KEY_LEN if bytes[3] == b'-' => ParsedKey::TenDigit(TenDigitSegments {
                site: segment(0..3),
                serial: segment(4..11),
            }),
            STRUCTURED_KEY_LEN if bytes[5] == b'-' && bytes[9] == b'-' && bytes[17] == b'-' => {
                ParsedKey::Structured(StructuredSegments {
                    date_year: segment(0..5),
                    marker: segment(6..9),
                    serial: segment(10..17),
                    filler: segment(18..23),
                })
            }
            _ => ParsedKey::Unrecognized,
        }
    }

    pub fn shape(&self) -> KeyShape {
        match self {
            ParsedKey::TenDigit(_) => KeyShape::TenDigit,
            ParsedKey::Structured(_) => KeyShape::Structured,
            ParsedKey::Unrecognized => KeyShape::Unrecognized,
        }
    }
}
