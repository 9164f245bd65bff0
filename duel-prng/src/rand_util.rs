use crate::PseudoRandomNumberGenerator;

/// Returns whether a random event with probability `numerator / denominator` occurs.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random value from the given iterator.
pub fn sample_iter<I, T>(prng: &mut dyn PseudoRandomNumberGenerator, iter: I) -> Option<T>
where
    I: Iterator<Item = T>,
{
    let mut items = iter.collect::<Vec<_>>();
    if items.is_empty() {
        return None;
    }
    let index = range(prng, 0, items.len() as u64);
    Some(items.swap_remove(index as usize))
}

/// Returns a random element from the given slice.
///
/// A slice with a single element does not advance the generator.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    match slice.len() {
        0 => None,
        1 => slice.first(),
        len => slice.get(range(prng, 0, len as u64) as usize),
    }
}

/// Fisher-Yates shuffle.
pub fn shuffle<T>(prng: &mut dyn PseudoRandomNumberGenerator, items: &mut [T]) {
    let end = items.len() as u64;
    if end < 2 {
        return;
    }
    for start in 0..(end - 1) {
        let next = range(prng, start, end);
        items.swap(start as usize, next as usize);
    }
}
