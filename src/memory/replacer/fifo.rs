//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use super::Replacer;
use crate::common::FrameId;
use crate::memory::FrameTable;

/// Evicts frames in the order their current pages were loaded.
///
/// Hits never reorder the queue.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Queue of frame IDs in load order (front = oldest).
    queue: VecDeque<FrameId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames tracked.
    pub fn size(&self) -> usize {
        self.queue.len()
    }
}

impl Replacer for FifoReplacer {
    fn record_load(&mut self, frame_id: FrameId) {
        self.queue.push_back(frame_id);
    }

    fn evict(&mut self, _frames: &FrameTable) -> Option<FrameId> {
        self.queue.pop_front()
    }
}
