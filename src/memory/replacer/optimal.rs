//! Optimal (Belady's MIN) replacement policy.

use std::collections::{HashMap, VecDeque};

use super::Replacer;
use crate::common::{FrameId, PageId};
use crate::memory::FrameTable;

/// Evicts the resident page whose next use lies farthest in the future.
///
/// Needs the complete reference trace up front. For every page it keeps the
/// queue of positions where the page still occurs; the simulator reports each
/// position as it is scanned, so the queues only ever hold strictly future
/// positions by the time a victim is chosen.
///
/// # Victim selection
/// Frames are scanned in ascending order. The first frame whose page never
/// occurs again is chosen immediately. Otherwise the frame with the strictly
/// greatest next position wins, so ties go to the lower frame.
#[derive(Debug)]
pub struct OptimalReplacer {
    /// Remaining positions per page, ascending.
    future: HashMap<PageId, VecDeque<usize>>,
}

impl OptimalReplacer {
    /// Precompute future positions for `sequence`.
    pub fn new(sequence: &[PageId]) -> Self {
        let mut future: HashMap<PageId, VecDeque<usize>> = HashMap::new();
        for (position, &page) in sequence.iter().enumerate() {
            future.entry(page).or_default().push_back(position);
        }
        Self { future }
    }

    /// Next position at which `page` is referenced, if any.
    pub fn next_use(&self, page: PageId) -> Option<usize> {
        self.future.get(&page).and_then(|positions| positions.front().copied())
    }
}

impl Replacer for OptimalReplacer {
    fn record_reference(&mut self, position: usize, page: PageId) {
        if let Some(positions) = self.future.get_mut(&page) {
            if positions.front() == Some(&position) {
                positions.pop_front();
            }
        }
    }

    fn evict(&mut self, frames: &FrameTable) -> Option<FrameId> {
        let mut farthest: Option<(FrameId, usize)> = None;

        for (frame_id, page) in frames.iter() {
            match self.next_use(page) {
                None => return Some(frame_id),
                Some(next) => {
                    if farthest.map_or(true, |(_, best)| next > best) {
                        farthest = Some((frame_id, next));
                    }
                }
            }
        }

        farthest.map(|(frame_id, _)| frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    /// Load `resident` into a fresh table, in order.
    fn table_with(capacity: usize, resident: &[i64]) -> FrameTable {
        let mut table = FrameTable::new(capacity);
        for &page in resident {
            table.load(PageId::new(page));
        }
        table
    }

    /// Report positions `0..upto` to the replacer.
    fn advance(replacer: &mut OptimalReplacer, sequence: &[PageId], upto: usize) {
        for (position, &page) in sequence.iter().enumerate().take(upto) {
            replacer.record_reference(position, page);
        }
    }

    #[test]
    fn test_next_use_consumes_positions() {
        let seq = pages(&[1, 2, 1, 3, 1]);
        let mut replacer = OptimalReplacer::new(&seq);

        assert_eq!(replacer.next_use(PageId::new(1)), Some(0));
        advance(&mut replacer, &seq, 1);
        assert_eq!(replacer.next_use(PageId::new(1)), Some(2));
        advance(&mut replacer, &seq, 3);
        assert_eq!(replacer.next_use(PageId::new(1)), Some(4));
        assert_eq!(replacer.next_use(PageId::new(2)), None);
        assert_eq!(replacer.next_use(PageId::new(99)), None);
    }

    #[test]
    fn test_evicts_farthest_next_use() {
        // Frames hold 1, 2; reference 3 at position 2; 1 is next at 3, 2 at 4.
        let seq = pages(&[1, 2, 3, 1, 2, 3]);
        let mut replacer = OptimalReplacer::new(&seq);
        advance(&mut replacer, &seq, 3);

        let table = table_with(2, &[1, 2]);
        assert_eq!(replacer.evict(&table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_never_used_again_short_circuits() {
        // Frame 0 holds 1 (never used again), frame 1 holds 2 (also never),
        // frame 2 holds 3 (used at 5). First frame with no future use wins.
        let seq = pages(&[1, 2, 3, 4, 4, 3]);
        let mut replacer = OptimalReplacer::new(&seq);
        advance(&mut replacer, &seq, 4);

        let table = table_with(3, &[1, 2, 3]);
        assert_eq!(replacer.evict(&table), Some(FrameId::new(0)));
    }

    #[test]
    fn test_short_circuit_beats_earlier_candidate() {
        // Frame 0 holds 5 (next use at 6), frame 1 holds 6 (never again).
        let seq = pages(&[5, 6, 7, 7, 7, 7, 5]);
        let mut replacer = OptimalReplacer::new(&seq);
        advance(&mut replacer, &seq, 3);

        let table = table_with(2, &[5, 6]);
        assert_eq!(replacer.evict(&table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_empty_table_has_no_victim() {
        let mut replacer = OptimalReplacer::new(&[]);
        assert_eq!(replacer.evict(&FrameTable::new(2)), None);
    }
}
