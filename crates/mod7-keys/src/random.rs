//! Injectable random source for the segment generators.

use rand::{Rng, RngCore};

/// Source of the uniform draws the generators need.
///
/// Implemented for every [`RngCore`], so a `StdRng`, `ThreadRng` or any
/// seeded generator can be passed directly. Tests implement it on scripted
/// sources to force specific draw sequences.
pub trait RandomSource {
    /// Uniform draw from `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: u32) -> u32;

    /// Seed for an independent child generator.
    fn next_seed(&mut self) -> u64;
}

impl<R: RngCore> RandomSource for R {
    fn below(&mut self, upper: u32) -> u32 {
        self.gen_range(0..upper)
    }

    fn next_seed(&mut self) -> u64 {
        self.next_u64()
    }
}
