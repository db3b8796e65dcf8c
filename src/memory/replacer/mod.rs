//! Eviction policy implementations (replacers).
//!
//! Every policy implements [`Replacer`]; the [`Simulator`](crate::memory::Simulator)
//! owns the shared frame/residency/swap bookkeeping and only asks the replacer
//! which frame to give up.
//!
//! Implemented policies:
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`RandomReplacer`] - Uniform random frame, fixed seed
//! - [`LruReplacer`] - Least Recently Used
//! - [`OptimalReplacer`] - Belady's MIN (needs the whole trace up front)

mod fifo;
mod lru;
mod optimal;
mod random;

use std::fmt;
use std::str::FromStr;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;
pub use random::RandomReplacer;

use crate::common::{FrameId, PageId, RANDOM_SEED};
use crate::memory::FrameTable;

/// An eviction policy.
///
/// The simulator calls, for every reference in order:
/// 1. [`record_reference`](Replacer::record_reference) with the scan position
/// 2. [`record_hit`](Replacer::record_hit) if the page was resident, otherwise
/// 3. [`evict`](Replacer::evict) when no free frame is left, then
///    [`record_load`](Replacer::record_load) for the frame the page landed in
pub trait Replacer: Send {
    /// A page is about to be accessed at position `position` of the trace.
    fn record_reference(&mut self, _position: usize, _page: PageId) {}

    /// A resident page in `frame_id` was accessed.
    fn record_hit(&mut self, _frame_id: FrameId) {}

    /// A page was just loaded into `frame_id`.
    fn record_load(&mut self, _frame_id: FrameId) {}

    /// Select a victim frame. Only called when every frame is occupied.
    ///
    /// Returns `None` if the policy has nothing to evict, which the
    /// simulator treats as a bug.
    fn evict(&mut self, frames: &FrameTable) -> Option<FrameId>;
}

/// The four simulated policies, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Random,
    Lru,
    Optimal,
}

impl Policy {
    /// All policies in the order they are run and reported.
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Random, Policy::Lru, Policy::Optimal];

    /// Label used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Random => "RAND",
            Policy::Lru => "LRU",
            Policy::Optimal => "MIN",
        }
    }

    /// Build a fresh replacer for one run over `sequence` with `frame_count` frames.
    ///
    /// A new replacer is built per run; the random policy reseeds here.
    /// Up-front reservations are bounded by the sequence length, since a run
    /// never fills more frames than it has references.
    pub fn replacer(&self, sequence: &[PageId], frame_count: usize) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Random => Box::new(RandomReplacer::new(RANDOM_SEED)),
            Policy::Lru => Box::new(LruReplacer::with_capacity(frame_count.min(sequence.len()))),
            Policy::Optimal => Box::new(OptimalReplacer::new(sequence)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy: {0:?}")]
pub struct UnknownPolicy(pub String);

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Policy::Fifo),
            "RAND" | "RANDOM" => Ok(Policy::Random),
            "LRU" => Ok(Policy::Lru),
            "MIN" | "OPT" | "OPTIMAL" => Ok(Policy::Optimal),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
