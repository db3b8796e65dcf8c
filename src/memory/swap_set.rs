//! Swap set - pages that live outside physical memory.

use std::collections::BTreeSet;

use crate::common::PageId;

/// Pages that have been evicted (or, with zero frames, ever requested) and
/// are not currently resident.
///
/// Backed by a `BTreeSet` so the final listing comes out sorted and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapSet {
    pages: BTreeSet<PageId>,
}

impl SwapSet {
    /// Create an empty swap set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page as swapped out.
    #[inline]
    pub fn insert(&mut self, page: PageId) {
        self.pages.insert(page);
    }

    /// Drop a page that became resident again. No-op if absent.
    #[inline]
    pub fn remove(&mut self, page: PageId) {
        self.pages.remove(&page);
    }

    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.pages.contains(&page)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Consume the set, returning its pages in ascending order.
    pub fn into_sorted_vec(self) -> Vec<PageId> {
        self.pages.into_iter().collect()
    }
}
