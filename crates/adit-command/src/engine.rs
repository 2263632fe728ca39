//! Random-engine implementations behind the [`RandomEngine`] seam.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use adit_core::{RandomEngine, SeedStream};

/// A ChaCha-backed engine reseedable from operator seed streams.
///
/// The stream's payload is folded into a single 64-bit state with a
/// splitmix-style mixer, so every integer in the stream influences the
/// reseed and two streams differing in any position or in length produce
/// different trajectories.
#[derive(Debug)]
pub struct ChaChaEngine {
    rng: ChaCha8Rng,
}

impl ChaChaEngine {
    /// An engine seeded with the given value.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next 64 random bits.
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn mix(stream: &SeedStream) -> u64 {
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        for &s in stream.payload() {
            state ^= s as u64;
            state = state.wrapping_mul(0xbf58_476d_1ce4_e5b9);
            state ^= state >> 31;
        }
        state ^ stream.payload().len() as u64
    }
}

impl RandomEngine for ChaChaEngine {
    fn set_seeds(&mut self, stream: &SeedStream) {
        self.rng = ChaCha8Rng::seed_from_u64(Self::mix(stream));
    }
}

/// A capture double: records every forwarded stream, generates nothing.
///
/// Used by tests asserting that a seed command reaches the engine exactly
/// once, or not at all on rejection.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    streams: Vec<Vec<i64>>,
}

impl RecordingEngine {
    /// An engine with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stream forwarded so far, sentinel included, oldest first.
    pub fn streams(&self) -> &[Vec<i64>] {
        &self.streams
    }
}

impl RandomEngine for RecordingEngine {
    fn set_seeds(&mut self, stream: &SeedStream) {
        self.streams.push(stream.as_slice().to_vec());
    }
}
