//! The run-wide deterministic RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded once in the model builder.  It is
//! threaded explicitly through agent placement, the per-tick shuffle, and
//! every random-walk draw, in that order.  Nothing reads process-global
//! randomness after seeding, so the same seed and configuration always
//! replay the same run bit-for-bit.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only from the single simulation thread.  The type is deliberately
/// not `Clone`: forking the stream would make two consumers draw identical
/// values.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh seed from the OS-seeded thread RNG.
    ///
    /// Used when the configuration carries no seed.  The caller records the
    /// returned value so the run can be replayed later.
    pub fn fresh_seed() -> u64 {
        rand::random::<u64>()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform `f64` in the closed interval `[lo, hi]`.
    ///
    /// `lo == hi` is allowed and returns `lo`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..=hi)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
