use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use duel::Battle;
use duel_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A controlled random number generator, for tests that need fine-grained control over battle RNG.
///
/// Fake values are keyed by their 1-based position in the sequence. The real generator advances on
/// every call, so the values that are not faked match an uncontrolled battle with the same seed.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying RNG to keep the sequence consistent, even if we do not use the value.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ControlledRandomNumberGenerator {
    /// Number of values drawn so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }

    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(offset, value)| (offset + count, value)),
        );
    }

    /// Fakes the next `n` values in the sequence with the same value.
    pub fn fake_next_values(&mut self, n: usize, value: u64) {
        self.insert_fake_values_relative_to_sequence_count((1..=n).map(|offset| (offset, value)));
    }
}

/// Returns the battle's [`ControlledRandomNumberGenerator`], if the battle was created with one.
pub fn get_controlled_rng_for_battle<'b>(
    battle: &'b mut Battle<'_>,
) -> Option<&'b mut ControlledRandomNumberGenerator> {
    battle
        .prng_mut()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}
