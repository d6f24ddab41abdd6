//! Validation report types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape a candidate key was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyShape {
    /// `XXX-XXXXXXX`
    TenDigit,
    /// `XXXXX-OEM-XXXXXXX-XXXXX`
    Structured,
    Unrecognized,
}

impl fmt::Display for KeyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyShape::TenDigit => write!(f, "CD key"),
            KeyShape::Structured => write!(f, "OEM key"),
            KeyShape::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Named segment of a key, used to attribute violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentName {
    /// First segment of a ten-digit key.
    Site,
    /// Second segment of a ten-digit key.
    TenDigitSerial,
    /// First segment of an OEM key.
    DateYear,
    /// Third segment of an OEM key.
    OemSerial,
    /// Fourth segment of an OEM key.
    Filler,
}

impl fmt::Display for SegmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentName::Site => "site number",
            SegmentName::TenDigitSerial => "second segment",
            SegmentName::DateYear => "first segment",
            SegmentName::OemSerial => "third segment",
            SegmentName::Filler => "fourth segment",
        };
        f.write_str(name)
    }
}

/// Violation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Structurally malformed: unclassifiable, non-numeric, or a fixed
    /// character is wrong.
    Format,
    /// Digit sum not divisible by 7.
    Checksum,
    /// Check digit is 0, 8, or 9.
    CheckDigit,
    /// Site number is on the exclusion list.
    Exclusion,
    /// Julian day or year outside the allowed domain.
    Range,
}

/// A single rule a candidate key broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum Violation {
    Unrecognized,
    NonNumericSegment { segment: SegmentName },
    MissingOemMarker { found: String },
    MissingLeadingZero,
    ExcludedSite { site: u32 },
    InvalidCheckDigit { segment: SegmentName, digit: u8 },
    DigitSumNotDivisible { segment: SegmentName, sum: u32 },
    JulianDayOutOfRange { day: u32 },
    YearNotWhitelisted { year: String },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::Unrecognized
            | Violation::NonNumericSegment { .. }
            | Violation::MissingOemMarker { .. }
            | Violation::MissingLeadingZero => ViolationKind::Format,
            Violation::ExcludedSite { .. } => ViolationKind::Exclusion,
            Violation::InvalidCheckDigit { .. } => ViolationKind::CheckDigit,
            Violation::DigitSumNotDivisible { .. } => ViolationKind::Checksum,
            Violation::JulianDayOutOfRange { .. } | Violation::YearNotWhitelisted { .. } => {
                ViolationKind::Range
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Unrecognized => write!(f, "The key doesn't even resemble a valid key."),
            Violation::NonNumericSegment { segment } => {
                write!(f, "The {} isn't a number.", segment)
            }
            Violation::MissingOemMarker { found } => {
                write!(f, "The second segment is invalid: expected OEM, found {:?}.", found)
            }
            Violation::MissingLeadingZero => {
                write!(f, "The third segment is invalid: must begin with a 0.")
            }
            Violation::ExcludedSite { site } => write!(
                f,
                "The site number ({:03}) is invalid: site number cannot be 333, 444, 555, 666, 777, 888, or 999.",
                site
            ),
            Violation::InvalidCheckDigit { segment, digit } => write!(
                f,
                "The {} of the key is invalid: the last digit ({}) cannot be 0 or >= 8.",
                segment, digit
            ),
            Violation::DigitSumNotDivisible { segment, sum } => write!(
                f,
                "The {} of the key is invalid: the digit sum ({}) must be divisible by 7.",
                segment, sum
            ),
            Violation::JulianDayOutOfRange { day } => {
                write!(f, "The date ({:03}) is invalid: date has to be 001-366.", day)
            }
            Violation::YearNotWhitelisted { year } => write!(
                f,
                "The year ({}) is invalid: cannot be less than 95 or above 03.",
                year
            ),
        }
    }
}

/// Outcome of validating one candidate key.
///
/// A report with no violations means the key is valid. Unrecognized
/// candidates carry exactly one [`Violation::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Candidate as supplied.
    pub key: String,
    /// Resolved classification.
    pub shape: KeyShape,
    /// Every violation found, in segment order.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(key: impl Into<String>, shape: KeyShape) -> Self {
        Self {
            key: key.into(),
            shape,
            violations: Vec::new(),
        }
    }

    pub fn unrecognized(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shape: KeyShape::Unrecognized,
            violations: vec![Violation::Unrecognized],
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any violation of the given kind was reported.
    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind() == kind)
    }

    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.violations.iter().map(Violation::kind).collect()
    }
}
