//! Process-wide random source for seeding boards.
//!
//! The session owns exactly one [`LifeRng`], seeded once at startup from the
//! wall clock. Tests build one from a fixed seed instead, so every shuffle is
//! reproducible.
//!
//! ```
//! use conway::rng::LifeRng;
//! use rand::Rng;
//!
//! let mut a = LifeRng::new(7);
//! let mut b = LifeRng::new(7);
//! assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct LifeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl LifeRng {
    /// Create an RNG with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the current wall-clock time.
    ///
    /// A clock set before the Unix epoch falls back to seed 0.
    #[must_use]
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for LifeRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
