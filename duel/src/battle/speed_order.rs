use std::cmp::Ordering;

use duel_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::SpeedTieResolution;

/// An object that can be ordered by speed.
pub trait SpeedOrderable {
    /// Speed. Highest speed goes first.
    fn speed(&self) -> f64;
}

impl<T> SpeedOrderable for &'_ T
where
    T: SpeedOrderable,
{
    #[inline]
    fn speed(&self) -> f64 {
        (*self).speed()
    }
}

/// Compares the speed of two objects. [`Ordering::Less`] means `a` goes first.
pub fn compare_speed<T>(a: &T, b: &T) -> Ordering
where
    T: SpeedOrderable,
{
    // Higher speed first.
    b.speed().total_cmp(&a.speed())
}

fn stable_move_to_position<T>(items: &mut [T], index: usize, target: usize) {
    if target == index {
        return;
    } else if index < target {
        for i in index..target {
            items.swap(i, i + 1);
        }
    } else {
        for i in ((target + 1)..=index).rev() {
            items.swap(i - 1, i);
        }
    }
}

// Selection sort implementation that resolves tied elements.
fn sort_with_ties<T, C>(
    items: &mut [T],
    comp: C,
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedTieResolution,
) where
    C: Fn(&T, &T) -> Ordering,
{
    let mut sorted = 0;
    while sorted + 1 < items.len() {
        // Find all indices that are tied to go next.
        let mut first_indices = Vec::from([sorted]);
        for i in (sorted + 1)..items.len() {
            match comp(&items[first_indices[0]], &items[i]) {
                Ordering::Less => continue,
                Ordering::Greater => first_indices = Vec::from([i]),
                Ordering::Equal => first_indices.push(i),
            }
        }
        // Move them to the front of the unsorted range, keeping their relative order.
        let ties = first_indices.len();
        for (i, item_index) in first_indices.into_iter().enumerate() {
            stable_move_to_position(items, item_index, sorted + i);
        }
        if ties > 1 {
            let tied = &mut items[sorted..(sorted + ties)];
            match tie_resolution {
                SpeedTieResolution::Random => rand_util::shuffle(prng, tied),
                SpeedTieResolution::Keep => (),
                SpeedTieResolution::Reverse => tied.reverse(),
            }
        }
        sorted += ties;
    }
}

/// Sorts the given items by speed, fastest first.
pub fn speed_sort<T>(
    items: &mut [T],
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedTieResolution,
) where
    T: SpeedOrderable,
{
    sort_with_ties(items, compare_speed, prng, tie_resolution);
}
