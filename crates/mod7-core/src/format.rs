//! Key format constants shared by generation and validation.

/// Site numbers that can never appear in a ten-digit key.
pub const EXCLUDED_SITES: [u32; 7] = [333, 444, 555, 666, 777, 888, 999];

/// The only two-digit years an OEM key may carry.
pub const YEAR_WHITELIST: [&str; 9] = ["95", "96", "97", "98", "99", "00", "01", "02", "03"];

/// Every checksum segment's digit sum must be a multiple of this.
pub const CHECKSUM_DIVISOR: u32 = 7;

/// Check digits are drawn from, and validated against, this inclusive range.
pub const CHECK_DIGIT_MIN: u8 = 1;
pub const CHECK_DIGIT_MAX: u8 = 7;

/// Non-check digits of a checksum segment are drawn from `0..=NON_CHECK_DIGIT_MAX`.
pub const NON_CHECK_DIGIT_MAX: u8 = 8;

/// Highest valid Julian day.
pub const MAX_JULIAN_DAY: u32 = 366;

/// Literal marker between the date and serial segments of an OEM key.
pub const OEM_MARKER: &str = "OEM";

pub const TEN_DIGIT_KEY_LEN: usize = 11;
pub const STRUCTURED_KEY_LEN: usize = 23;

/// Length of the random part of the ten-digit serial.
pub const TEN_DIGIT_SERIAL_LEN: usize = 7;

/// Length of the random part of the OEM serial (the leading `0` is fixed).
pub const STRUCTURED_SERIAL_LEN: usize = 6;

/// Whether a site number is on the exclusion list.
pub fn is_excluded_site(site: u32) -> bool {
    EXCLUDED_SITES.contains(&site)
}

/// Whether a two-digit year segment is whitelisted.
pub fn is_whitelisted_year(year: &str) -> bool {
    YEAR_WHITELIST.contains(&year)
}

/// Whether a digit may serve as a check digit.
pub fn is_valid_check_digit(digit: u8) -> bool {
    (CHECK_DIGIT_MIN..=CHECK_DIGIT_MAX).contains(&digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_sites() {
        assert!(is_excluded_site(333));
        assert!(is_excluded_site(999));
        assert!(!is_excluded_site(111));
        assert!(!is_excluded_site(222));
        assert!(!is_excluded_site(0));
    }

    #[test]
    fn test_year_whitelist() {
        assert!(is_whitelisted_year("95"));
        assert!(is_whitelisted_year("03"));
        assert!(!is_whitelisted_year("94"));
        assert!(!is_whitelisted_year("04"));
    }

    #[test]
    fn test_check_digit_range() {
        assert!(!is_valid_check_digit(0));
        assert!(is_valid_check_digit(1));
        assert!(is_valid_check_digit(7));
        assert!(!is_valid_check_digit(8));
        assert!(!is_valid_check_digit(9));
    }
}
