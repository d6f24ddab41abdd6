//! Checksum segment generation.
//!
//! A checksum segment is a run of decimal digits whose digit sum is divisible
//! by 7 and whose last digit (the check digit) lies in `1..=7`. Non-check
//! digits are drawn from `0..=8`.

use crate::random::RandomSource;
use mod7_core::{CHECK_DIGIT_MAX, CHECK_DIGIT_MIN, CHECKSUM_DIVISOR, NON_CHECK_DIGIT_MAX};
use tracing::trace;

/// Sum of a slice of digit values (not ASCII bytes).
pub fn digit_sum(digits: &[u8]) -> u32 {
    digits.iter().map(|&d| u32::from(d)).sum()
}

/// Generate a checksum segment of `length` digits by rejection sampling.
///
/// Each attempt draws a whole candidate and is accepted once its digit sum is
/// divisible by 7; about one attempt in seven succeeds. A one-digit segment
/// is always `"7"`, the only check digit divisible by 7 on its own. A
/// zero-length segment is empty.
pub fn generate_checksum_segment<S>(rng: &mut S, length: usize) -> String
where
    S: RandomSource + ?Sized,
{
    match length {
        0 => return String::new(),
        1 => return CHECK_DIGIT_MAX.to_string(),
        _ => {}
    }

    let body_bound = u32::from(NON_CHECK_DIGIT_MAX) + 1;
    let check_span = u32::from(CHECK_DIGIT_MAX - CHECK_DIGIT_MIN) + 1;
    let mut digits = vec![0u8; length];
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;

        let (body, check) = digits.split_at_mut(length - 1);
        for digit in body.iter_mut() {
            *digit = rng.below(body_bound) as u8;
        }
        check[0] = CHECK_DIGIT_MIN + rng.below(check_span) as u8;

        if digit_sum(&digits) % CHECKSUM_DIVISOR == 0 {
            trace!(length, attempts, "Checksum segment accepted");
            return digits.iter().map(|&d| char::from(b'0' + d)).collect();
        }
    }
}
