// src/probability/random_source.rs

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A self-contained pseudo-random source backed by ChaCha8.
///
/// The simulators in [`crate::probability::sampling`] are generic over
/// `rand::Rng`; this type is the default source to hand them. Seeded
/// construction gives a deterministic stream, which is what tests want,
/// while [`RandomSource::new`] draws a fresh seed from the thread RNG.
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source with a fresh, unpredictable seed.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        RandomSource {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Creates a source with a fixed seed; the stream is deterministic
    /// for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        RandomSource {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

// Forwarding RngCore lets a RandomSource be passed anywhere a rand::Rng
// is expected.
impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_are_deterministic() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        let xs: Vec<f64> = (0..16).map(|_| a.next_f64()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.next_f64()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomSource::from_seed(1);
        let mut b = RandomSource::from_seed(2);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut src = RandomSource::from_seed(7);
        for _ in 0..1000 {
            let x = src.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
