//! Key validation.
//!
//! The validator re-checks every rule the generators enforce and records each
//! broken rule instead of stopping at the first one. A segment that is not
//! numeric gets a single format violation and no further checks; the other
//! segments are still checked.

use crate::checksum::digit_sum;
use crate::parse::{ParsedKey, RawSegment, StructuredSegments, TenDigitSegments};
use mod7_core::{
    CHECKSUM_DIVISOR, KeyShape, MAX_JULIAN_DAY, OEM_MARKER, SegmentName, ValidationReport,
    Violation, is_excluded_site, is_valid_check_digit, is_whitelisted_year,
};
use tracing::debug;

/// Validate a candidate key.
pub fn validate(candidate: &str) -> ValidationReport {
    let parsed = ParsedKey::parse(candidate);
    let report = match parsed {
        ParsedKey::TenDigit(segments) => validate_ten_digit(candidate, &segments),
        ParsedKey::Structured(segments) => validate_structured(candidate, &segments),
        ParsedKey::Unrecognized => ValidationReport::unrecognized(candidate),
    };

    debug!(
        shape = ?report.shape,
        violations = report.violations.len(),
        "Key validated"
    );
    report
}

fn validate_ten_digit(candidate: &str, segments: &TenDigitSegments<'_>) -> ValidationReport {
    let mut report = ValidationReport::new(candidate, KeyShape::TenDigit);

    match segments.site.value() {
        None => report.push(Violation::NonNumericSegment {
            segment: SegmentName::Site,
        }),
        Some(site) if is_excluded_site(site) => report.push(Violation::ExcludedSite { site }),
        Some(_) => {}
    }

    check_checksum_segment(&mut report, SegmentName::TenDigitSerial, segments.serial);
    report
}

fn validate_structured(candidate: &str, segments: &StructuredSegments<'_>) -> ValidationReport {
    let mut report = ValidationReport::new(candidate, KeyShape::Structured);

    if segments.date_year.digits().is_none() {
        report.push(Violation::NonNumericSegment {
            segment: SegmentName::DateYear,
        });
    } else {
        let day = segments.julian_day().value().unwrap_or_default();
        if day == 0 || day > MAX_JULIAN_DAY {
            report.push(Violation::JulianDayOutOfRange { day });
        }

        let year = segments.year().to_string_lossy();
        if !is_whitelisted_year(&year) {
            report.push(Violation::YearNotWhitelisted { year });
        }
    }

    if segments.marker.as_bytes() != OEM_MARKER.as_bytes() {
        report.push(Violation::MissingOemMarker {
            found: segments.marker.to_string_lossy(),
        });
    }

    if segments.serial.digits().is_some() && segments.serial.as_bytes()[0] != b'0' {
        report.push(Violation::MissingLeadingZero);
    }
    check_checksum_segment(&mut report, SegmentName::OemSerial, segments.serial);

    if segments.filler.digits().is_none() {
        report.push(Violation::NonNumericSegment {
            segment: SegmentName::Filler,
        });
    }

    report
}

/// Check digit range and digit-sum divisibility of one checksum segment.
fn check_checksum_segment(
    report: &mut ValidationReport,
    segment: SegmentName,
    raw: RawSegment<'_>,
) {
    let Some(digits) = raw.digits() else {
        report.push(Violation::NonNumericSegment { segment });
        return;
    };

    if let Some(&digit) = digits.last()
        && !is_valid_check_digit(digit)
    {
        report.push(Violation::InvalidCheckDigit { segment, digit });
    }

    let sum = digit_sum(&digits);
    if sum % CHECKSUM_DIVISOR != 0 {
        report.push(Violation::DigitSumNotDivisible { segment, sum });
    }
}
