//! Date/year and filler segments for OEM keys.

use crate::random::RandomSource;
use mod7_core::{MAX_JULIAN_DAY, YEAR_WHITELIST};

/// Upper bound (exclusive) of the filler draw.
const FILLER_BOUND: u32 = 100_000;

/// Generate the first OEM segment: a zero-padded Julian day in `1..=366`
/// followed by a whitelisted two-digit year.
///
/// Day zero is redrawn.
pub fn generate_date_year<S>(rng: &mut S) -> String
where
    S: RandomSource + ?Sized,
{
    let day = loop {
        let day = rng.below(MAX_JULIAN_DAY + 1);
        if day != 0 {
            break day;
        }
    };
    let year = YEAR_WHITELIST[rng.below(YEAR_WHITELIST.len() as u32) as usize];
    format!("{:03}{}", day, year)
}

/// Generate the fourth OEM segment, a zero-padded number in `0..=99999`.
pub fn generate_filler<S>(rng: &mut S) -> String
where
    S: RandomSource + ?Sized,
{
    format!("{:05}", rng.below(FILLER_BOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::scripted::Scripted;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_date_year_layout() {
        let mut rng = Scripted::new([42, 4]);
        assert_eq!(generate_date_year(&mut rng), "04299");
    }

    #[test]
    fn test_day_zero_is_redrawn() {
        let mut rng = Scripted::new([0, 0, 0, 366, 8]);
        assert_eq!(generate_date_year(&mut rng), "36603");
        assert_eq!(rng.taken, 5);
    }

    #[test]
    fn test_random_date_years_in_domain() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let segment = generate_date_year(&mut rng);
            assert_eq!(segment.len(), 5);
            let day: u32 = segment[..3].parse().unwrap();
            assert!((1..=366).contains(&day));
            assert!(YEAR_WHITELIST.contains(&&segment[3..]));
        }
    }

    #[test]
    fn test_filler_is_padded() {
        let mut rng = Scripted::new([10]);
        assert_eq!(generate_filler(&mut rng), "00010");

        let mut rng = Scripted::new([99_999]);
        assert_eq!(generate_filler(&mut rng), "99999");
    }

    #[test]
    fn test_filler_accepts_low_values() {
        let mut rng = Scripted::new([0]);
        assert_eq!(generate_filler(&mut rng), "00000");
        assert_eq!(rng.taken, 1);
    }
}
