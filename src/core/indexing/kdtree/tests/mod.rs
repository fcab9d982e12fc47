// src/core/indexing/kdtree/tests/mod.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod test_accumulator;

/// `n` points drawn uniformly from `[0, 1)^D`.
pub(super) fn random_points<const D: usize>(rng: &mut StdRng, n: usize) -> Vec<[f64; D]> {
    (0..n)
        .map(|_| {
            let mut p = [0.0; D];
            for c in p.iter_mut() {
                *c = rng.gen::<f64>();
            }
            p
        })
        .collect()
}

pub(super) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
