//! Frame table - the fixed set of physical slots.
//!
//! A [`FrameTable`] holds:
//! - One slot per filled frame, holding its resident page
//! - The residency index (page → frame), kept in lockstep with the slots

use std::collections::HashMap;

use crate::common::{FrameId, PageId};

/// The frame table shared by every replacement policy.
///
/// The table has a fixed logical number of frames chosen at construction.
/// Frames are filled lowest index first; once filled, a frame only changes
/// hands through [`FrameTable::replace`]. Because no frame is ever emptied
/// again, the filled frames are always the prefix `0..len`, and slots are
/// allocated as they are filled rather than for the whole capacity. A trace
/// can only occupy as many frames as it has distinct pages, however large
/// the capacity.
///
/// # Invariants
/// - A page occupies at most one slot.
/// - `page_table` maps exactly the resident pages to their slots.
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// Filled slots, indexed by `FrameId.0`. Never longer than `capacity`.
    slots: Vec<PageId>,

    /// Residency index: resident page → frame.
    page_table: HashMap<PageId, FrameId>,

    /// Logical number of frames.
    capacity: usize,
}

impl FrameTable {
    /// Create a table with `capacity` empty frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            page_table: HashMap::new(),
            capacity,
        }
    }

    /// Total number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.page_table.len()
    }

    /// Check if no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_table.is_empty()
    }

    /// Check if every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Frame holding `page`, if resident.
    #[inline]
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }

    /// Check if `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.page_table.contains_key(&page)
    }

    /// Page held by `frame_id`, or `None` if the frame is empty or out of range.
    #[inline]
    pub fn page(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied()
    }

    /// Occupied frames in ascending frame order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, &page)| (FrameId::new(idx), page))
    }

    /// Place `page` in the lowest free frame.
    ///
    /// Returns the frame used, or `None` if the table is full.
    /// `page` must not already be resident.
    pub fn load(&mut self, page: PageId) -> Option<FrameId> {
        debug_assert!(!self.contains(page), "{} is already resident", page);

        if self.is_full() {
            return None;
        }
        let frame_id = FrameId::new(self.slots.len());
        self.slots.push(page);
        self.page_table.insert(page, frame_id);
        Some(frame_id)
    }

    /// Swap `page` into an occupied frame, returning the page it displaced.
    ///
    /// Returns `None` (and changes nothing) if the frame is empty or out of
    /// range. `page` must not already be resident.
    pub fn replace(&mut self, frame_id: FrameId, page: PageId) -> Option<PageId> {
        debug_assert!(!self.contains(page), "{} is already resident", page);

        let slot = self.slots.get_mut(frame_id.0)?;
        let victim = std::mem::replace(slot, page);
        self.page_table.remove(&victim);
        self.page_table.insert(page, frame_id);
        Some(victim)
    }

    /// Check that the slots and the residency index describe the same set.
    pub fn is_consistent(&self) -> bool {
        self.slots.len() <= self.capacity
            && self.slots.len() == self.page_table.len()
            && self
                .page_table
                .iter()
                .all(|(&page, &frame_id)| self.page(frame_id) == Some(page))
    }
}
