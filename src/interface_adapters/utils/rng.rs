use crate::domain::CoinFlip;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Knockback direction source backed by `StdRng`.
///
/// A fixed seed replays the same sequence of directions, which keeps recorded rounds
/// reproducible.
pub struct SeededCoin {
    rng: StdRng,
}

impl SeededCoin {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl CoinFlip for SeededCoin {
    fn flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
