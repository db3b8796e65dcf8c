//! Random replacement policy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Replacer;
use crate::common::FrameId;
use crate::memory::FrameTable;

/// Evicts a frame drawn uniformly from `[0, capacity)`.
///
/// The generator is seeded at construction, so two replacers built from the
/// same seed pick the same victims for the same run.
#[derive(Debug)]
pub struct RandomReplacer {
    rng: ChaCha8Rng,
}

impl RandomReplacer {
    /// Create a replacer whose generator starts from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Replacer for RandomReplacer {
    fn evict(&mut self, frames: &FrameTable) -> Option<FrameId> {
        let capacity = frames.capacity();
        if capacity == 0 {
            return None;
        }
        Some(FrameId::new(self.rng.gen_range(0..capacity)))
    }
}
