// Uniform random numbers for blade shapes and branch angles.
// Seeded so a run can be replayed exactly.

use crate::error::Error;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform real-valued generator over `[lo, hi)`.
///
/// `lo >= hi` is a caller bug and always fails with `InvalidRange`;
/// ranges are never clamped or swapped.
pub trait RandomSource {
    fn uniform(&mut self, lo: f32, hi: f32) -> Result<f32, Error>;
}

/// Reject empty, inverted or NaN ranges.
pub fn check_range(lo: f32, hi: f32) -> Result<(), Error> {
    if lo < hi {
        Ok(())
    } else {
        Err(Error::InvalidRange { lo, hi })
    }
}

/// ChaCha8 stream: fast, portable, same sequence on every platform.
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Pick a fresh seed from the OS; log it so the picture can be reproduced.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn uniform(&mut self, lo: f32, hi: f32) -> Result<f32, Error> {
        check_range(lo, hi)?;
        Ok(self.rng.gen_range(lo..hi))
    }
}
