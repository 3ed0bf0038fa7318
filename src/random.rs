//! Seedable randomness for the allocation pipeline.
//!
//! The engine draws all of its entropy through this module so that a run
//! can be made deterministic by pinning a seed. Production callers leave
//! the seed unset and get a fresh, statistically sound PRNG per run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded PRNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles a slice in place with the Fisher-Yates algorithm.
///
/// Iterates from the last index backward, swapping each position with a
/// uniformly chosen earlier-or-equal index. Linear time, every permutation
/// equally likely.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
