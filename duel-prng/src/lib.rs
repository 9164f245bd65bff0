pub mod rand_util;

use std::any::Any;

use rand::Rng;

/// A pseudo-random number generator whose output can be replayed from its initial seed.
///
/// Every random decision in a battle (move selection, accuracy, critical hits, damage rolls,
/// status checks) is drawn from one of these, so a battle is reproducible from its seed alone.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Returns the initial seed the generator was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    ///
    /// Only the lower 32 bits of the returned value are populated.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`] for tests that need the concrete generator.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A linear congruential implementation of [`PseudoRandomNumberGenerator`].
#[derive(Debug, Clone)]
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a new random number generator.
    ///
    /// Two generators created with the same seed produce the same sequence. If no seed is given,
    /// one is drawn from the thread-local generator.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self {
            initial_seed: seed,
            seed,
        }
    }

    fn generate_seed() -> u64 {
        rand::rng().random()
    }

    fn next_seed(seed: u64) -> u64 {
        const A: u64 = 0x5D588B656C078965;
        const C: u64 = 0x0000000000269EC3;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = Self::next_seed(self.seed);
        // The lower bits of an LCRNG have short periods.
        self.seed >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
