//! Site number generation for CD keys.

use crate::random::RandomSource;
use mod7_core::is_excluded_site;
use tracing::trace;

/// Upper bound (exclusive) of the first site draw.
const SITE_BOUND: u32 = 998;

/// Upper bound (exclusive) of the replacement draw. Everything below it is
/// below the smallest excluded site.
const SAFE_SITE_BOUND: u32 = 300;

/// Generate a zero-padded three-digit site number.
///
/// A draw that lands on an excluded site is replaced by one draw from
/// `0..300`, which skews collisions toward low site numbers.
pub fn generate_site_number<S>(rng: &mut S) -> String
where
    S: RandomSource + ?Sized,
{
    let mut site = rng.below(SITE_BOUND);
    if is_excluded_site(site) {
        trace!(site, "Excluded site drawn, replacing");
        site = rng.below(SAFE_SITE_BOUND);
    }
    format!("{:03}", site)
}
