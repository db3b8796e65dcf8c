//! Simulator - runs one replacement policy over one reference trace.
//!
//! The [`Simulator`] owns all per-run state:
//! - The frame table and its residency index
//! - The swap set
//! - The policy's replacer
//! - Statistics
//!
//! Nothing is shared between runs; each (sequence, policy) pair gets a
//! fresh simulator.

use std::time::{Duration, Instant};

use log::trace;

use crate::common::{Error, FrameId, PageId, Result};
use crate::memory::replacer::{Policy, Replacer};
use crate::memory::{FrameTable, SimulationStats, SwapSet};

/// Outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was resident in `frame_id`.
    Hit { frame_id: FrameId },

    /// The page was loaded into `frame_id`, displacing `evicted` if the
    /// table was full.
    Fault {
        frame_id: FrameId,
        evicted: Option<PageId>,
    },

    /// The page faulted but there are no frames at all; it went straight
    /// to the swap set.
    Unbacked,
}

impl Access {
    /// Check if this access was a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        !matches!(self, Access::Hit { .. })
    }
}

/// Final record of one (sequence, policy) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub policy: Policy,

    /// Wall-clock time spent on the run.
    pub elapsed: Duration,

    /// Counters collected during the run.
    pub stats: SimulationStats,

    /// Pages left in the swap set, ascending and unique.
    pub swap_pages: Vec<PageId>,
}

impl SimulationResult {
    /// Total page faults.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    /// Elapsed milliseconds rounded to the nearest whole second.
    pub fn elapsed_seconds(&self) -> u128 {
        (self.elapsed.as_millis() + 500) / 1000
    }
}

/// Drives a single replacer over a reference trace.
///
/// # Usage
/// ```
/// use pagesim::{pages, Policy, Simulator};
///
/// let seq = pages(&[1, 2, 3, 1, 2, 3]);
/// let mut sim = Simulator::new(Policy::Optimal, &seq, 2);
/// while let Some(access) = sim.step().unwrap() {
///     assert!(sim.frames().len() <= 2);
///     let _ = access;
/// }
/// assert_eq!(sim.stats().faults, 4);
/// ```
pub struct Simulator<'a> {
    policy: Policy,

    /// The full trace; Optimal needs it up front.
    sequence: &'a [PageId],

    /// Index of the next reference to process.
    position: usize,

    frames: FrameTable,
    swap: SwapSet,
    replacer: Box<dyn Replacer>,
    stats: SimulationStats,
}

impl<'a> Simulator<'a> {
    /// Create a simulator with fresh state for one run.
    pub fn new(policy: Policy, sequence: &'a [PageId], frame_count: usize) -> Self {
        Self {
            policy,
            sequence,
            position: 0,
            frames: FrameTable::new(frame_count),
            swap: SwapSet::new(),
            replacer: policy.replacer(sequence, frame_count),
            stats: SimulationStats::default(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn swap(&self) -> &SwapSet {
        &self.swap
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Number of references processed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if every reference has been processed.
    pub fn is_finished(&self) -> bool {
        self.position >= self.sequence.len()
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Process the next reference.
    ///
    /// Returns `Ok(None)` once the trace is exhausted.
    ///
    /// # Errors
    /// - `Error::NoEvictableFrame` if the replacer fails to name an occupied
    ///   frame while the table is full
    pub fn step(&mut self) -> Result<Option<Access>> {
        let Some(&page) = self.sequence.get(self.position) else {
            return Ok(None);
        };
        let position = self.position;
        self.position += 1;
        self.stats.references += 1;

        // Optimal consumes this position before any victim is chosen.
        self.replacer.record_reference(position, page);

        if let Some(frame_id) = self.frames.frame_of(page) {
            self.stats.hits += 1;
            self.replacer.record_hit(frame_id);
            return Ok(Some(Access::Hit { frame_id }));
        }

        self.handle_fault(page).map(Some)
    }

    /// Process every remaining reference.
    pub fn run_to_end(&mut self) -> Result<()> {
        while self.step()?.is_some() {}
        Ok(())
    }

    /// Consume the simulator, producing its result record.
    pub fn finish(self, elapsed: Duration) -> SimulationResult {
        SimulationResult {
            policy: self.policy,
            elapsed,
            stats: self.stats,
            swap_pages: self.swap.into_sorted_vec(),
        }
    }

    // ========================================================================
    // Internal: fault handling
    // ========================================================================

    fn handle_fault(&mut self, page: PageId) -> Result<Access> {
        self.stats.faults += 1;

        if self.frames.capacity() == 0 {
            self.swap.insert(page);
            return Ok(Access::Unbacked);
        }

        // Try a free frame first, otherwise evict.
        let (frame_id, evicted) = match self.frames.load(page) {
            Some(frame_id) => (frame_id, None),
            None => {
                let (frame_id, victim) = self.evict_into(page)?;
                (frame_id, Some(victim))
            }
        };

        self.swap.remove(page);
        self.replacer.record_load(frame_id);

        Ok(Access::Fault { frame_id, evicted })
    }

    /// Ask the replacer for a victim and put `page` in its frame.
    fn evict_into(&mut self, page: PageId) -> Result<(FrameId, PageId)> {
        let policy = self.policy;
        let no_victim = || Error::NoEvictableFrame { policy };

        let frame_id = self.replacer.evict(&self.frames).ok_or_else(no_victim)?;
        // The replacer named an empty or unknown frame.
        let victim = self.frames.replace(frame_id, page).ok_or_else(no_victim)?;

        self.stats.evictions += 1;
        self.swap.insert(victim);

        trace!(
            "{}: evicted {} from {} for {}",
            self.policy,
            victim,
            frame_id,
            page
        );

        Ok((frame_id, victim))
    }
}

/// Run `policy` over `sequence` with `frame_count` frames, timing the run.
///
/// Timing covers building the replacer, so Optimal's precomputation counts.
pub fn simulate(
    policy: Policy,
    sequence: &[PageId],
    frame_count: usize,
) -> Result<SimulationResult> {
    let start = Instant::now();

    let mut sim = Simulator::new(policy, sequence, frame_count);
    sim.run_to_end()?;

    Ok(sim.finish(start.elapsed()))
}
