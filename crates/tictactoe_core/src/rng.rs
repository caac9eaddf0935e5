//! Seeded randomness for random players.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random source, so random games replay from their seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    /// Creates a source from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source from a freshly drawn seed.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// Seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent source whose seed is drawn from this one.
    pub fn fork(&mut self) -> Self {
        Self::new(self.rng.random())
    }

    /// Uniform sample from `range`.
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        let xs: Vec<usize> = (0..16).map(|_| a.random_range(0..3)).collect();
        let ys: Vec<usize> = (0..16).map(|_| b.random_range(0..3)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        assert_eq!(a.fork().seed(), b.fork().seed());
        assert_eq!(a.seed(), 42);
    }
}
