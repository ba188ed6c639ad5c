//! Seedable random stream owned by the engine.
//!
//! The stream is stored as `(seed, draws)` when serialized, so a restored
//! engine continues from the exact position where it was saved.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "RngState", into = "RngState")]
pub struct GameRng {
    seed: u64,
    draws: u64,
    inner: ChaCha8Rng,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct RngState {
    seed: u64,
    draws: u64,
}

impl GameRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { seed, draws: 0, inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    /// Uniform-enough index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }

    pub fn range_inclusive(&mut self, min_value: i32, max_value: i32) -> i32 {
        debug_assert!(min_value <= max_value);
        let span = (max_value - min_value) as u64 + 1;
        min_value + (self.next_u64() % span) as i32
    }

    pub fn coin_flip(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

impl From<RngState> for GameRng {
    fn from(state: RngState) -> Self {
        let mut rng = GameRng::seed_from_u64(state.seed);
        for _ in 0..state.draws {
            rng.next_u64();
        }
        rng
    }
}

impl From<GameRng> for RngState {
    fn from(rng: GameRng) -> Self {
        RngState { seed: rng.seed, draws: rng.draws }
    }
}
