//! Key generators.

use crate::assemble::{assemble_structured_key, assemble_ten_digit_key};
use crate::checksum::generate_checksum_segment;
use crate::oem::{generate_date_year, generate_filler};
use crate::random::RandomSource;
use crate::site::generate_site_number;
use mod7_core::{Error, Result, STRUCTURED_SERIAL_LEN, TEN_DIGIT_SERIAL_LEN};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Generates CD and OEM keys from an owned random source.
///
/// Each generator owns its RNG, so independent generators never contend.
/// Use [`KeyGenerator::seeded`] for reproducible output.
#[derive(Debug, Clone)]
pub struct KeyGenerator<R = StdRng> {
    rng: R,
}

impl KeyGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for KeyGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> KeyGenerator<R> {
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `XXX-XXXXXXX` key.
    pub fn ten_digit_key(&mut self) -> String {
        let site = generate_site_number(&mut self.rng);
        let serial = generate_checksum_segment(&mut self.rng, TEN_DIGIT_SERIAL_LEN);
        assemble_ten_digit_key(&site, &serial)
    }

    /// Generate a `XXXXX-OEM-XXXXXXX-XXXXX` key on the calling thread.
    pub fn structured_key(&mut self) -> String {
        let date_year = generate_date_year(&mut self.rng);
        let serial = generate_checksum_segment(&mut self.rng, STRUCTURED_SERIAL_LEN);
        let filler = generate_filler(&mut self.rng);
        assemble_structured_key(&date_year, &serial, &filler)
    }

    /// Generate a `XXXXX-OEM-XXXXXXX-XXXXX` key with its three segments
    /// produced by independent blocking tasks.
    ///
    /// Every task gets its own `StdRng` seeded from this generator, so the
    /// result is reproducible for a seeded generator. Requires a tokio
    /// runtime.
    pub async fn structured_key_concurrent(&mut self) -> Result<String> {
        let mut date_rng = StdRng::seed_from_u64(self.rng.next_seed());
        let mut serial_rng = StdRng::seed_from_u64(self.rng.next_seed());
        let mut filler_rng = StdRng::seed_from_u64(self.rng.next_seed());

        let date_year = tokio::task::spawn_blocking(move || generate_date_year(&mut date_rng));
        let serial = tokio::task::spawn_blocking(move || {
            generate_checksum_segment(&mut serial_rng, STRUCTURED_SERIAL_LEN)
        });
        let filler = tokio::task::spawn_blocking(move || generate_filler(&mut filler_rng));

        let (date_year, serial, filler) = tokio::try_join!(date_year, serial, filler)
            .map_err(|e| Error::Internal(format!("Segment task failed: {}", e)))?;

        debug!("Structured key segments joined");
        Ok(assemble_structured_key(&date_year, &serial, &filler))
    }
}

/// Generate a CD key using the thread-local RNG.
pub fn generate_ten_digit_key() -> String {
    KeyGenerator::with_source(rand::thread_rng()).ten_digit_key()
}

/// Generate an OEM key using the thread-local RNG.
pub fn generate_structured_key() -> String {
    KeyGenerator::with_source(rand::thread_rng()).structured_key()
}
