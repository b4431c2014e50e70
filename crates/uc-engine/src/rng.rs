//! The single random source of a game.
//!
//! Everything random (combat, theft, the grue) draws from one seeded
//! [`GameRng`] owned by the session, so a seed plus a command list
//! reproduces a game exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded game RNG.
///
/// Only the seed is persisted. Saving reseeds the generator from its own
/// stream so that a restored game continues exactly as the saved one would.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed the current stream started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a fresh seed from the stream and restart from it.
    pub fn reseed(&mut self) -> u64 {
        let seed: u64 = self.rng.random();
        *self = Self::new(seed);
        seed
    }

    /// Returns `0..n`, or 0 when `n` is 0.
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }

    /// Returns `0..=n`.
    pub fn up_to(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..=n)
    }

    /// Returns true with probability `percent / 100`.
    pub fn percent(&mut self, percent: u32) -> bool {
        self.below(100) < percent
    }

    /// Choose a random element from a slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.below(items.len() as u32) as usize)
    }

    /// Pick an index with probability proportional to its weight.
    ///
    /// Returns `None` when the slice is empty or every weight is zero.
    pub fn weighted_index(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }
        let mut roll = self.below(total);
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                return Some(i);
            }
            roll -= w;
        }
        None
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.up_to(i as u32) as usize;
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = GameRng::new(9);
        let mut b = GameRng::new(9);
        let xs: Vec<u32> = (0..20).map(|_| a.below(1000)).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.below(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn percent_extremes() {
        let mut rng = GameRng::new(1);
        assert!((0..100).all(|_| rng.percent(100)));
        assert!((0..100).all(|_| !rng.percent(0)));
    }

    #[test]
    fn reseed_continues_deterministically() {
        let mut a = GameRng::new(5);
        a.below(10);
        let seed = a.reseed();
        let mut b = GameRng::new(seed);
        assert_eq!(a.seed(), seed);
        assert_eq!(a.below(1_000_000), b.below(1_000_000));
    }

    #[test]
    fn weighted_index_skips_zero_weights() {
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            assert_eq!(rng.weighted_index(&[0, 4, 0]), Some(1));
        }
        assert_eq!(rng.weighted_index(&[0, 0]), None);
        assert_eq!(rng.weighted_index(&[]), None);
    }
}
