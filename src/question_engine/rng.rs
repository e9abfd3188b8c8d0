//! Randomness source threaded through every generator.
//!
//! Each generation call owns its own `QuestionRng`; nothing is shared, so the
//! same seed always yields the same draw sequence regardless of how many
//! other questions are being generated concurrently.

use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, SeedableRng};

pub type QuestionRng = StdRng;

/// Fresh generator for one seed.
pub fn seeded(seed: u64) -> QuestionRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy (non-reproducible).
pub fn from_entropy() -> QuestionRng {
    StdRng::from_entropy()
}

/// Draw helpers shared by the topic generators.
pub trait RngDrawExt {
    /// Uniform choice from a non-empty slice.
    /// Indices are drawn as `u32`, so a seed picks the same item on 32- and
    /// 64-bit targets (the same draw `SliceRandom::choose` makes).
    fn pick<T: Copy>(&mut self, items: &[T]) -> T;
    /// Uniform size in `range`, drawn as `u32` for the same reason.
    fn size(&mut self, range: RangeInclusive<u32>) -> usize;
    /// Fair coin flip.
    fn coin(&mut self) -> bool;
}

impl<R: Rng> RngDrawExt for R {
    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        debug_assert!(!items.is_empty(), "pick from empty slice");
        items[self.gen_range(0..items.len() as u32) as usize]
    }

    fn size(&mut self, range: RangeInclusive<u32>) -> usize {
        self.gen_range(range) as usize
    }

    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}
