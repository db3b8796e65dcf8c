//! LRU (Least Recently Used) replacement policy.

use super::Replacer;
use crate::common::FrameId;
use crate::memory::FrameTable;

/// Evicts the frame whose page was touched least recently.
///
/// Both hits and loads count as touches. The recency list is a doubly-linked
/// list threaded through a per-frame array, so moving a frame to the head is
/// O(1) with the frame id as the lookup key. The array grows as frames are
/// first loaded, so its size follows the frames actually used rather than
/// the configured frame count.
#[derive(Debug)]
pub struct LruReplacer {
    /// Links indexed by `FrameId.0`.
    links: Vec<Link>,
    /// Most recently used.
    head: Option<usize>,
    /// Least recently used.
    tail: Option<usize>,
    /// Number of linked frames.
    len: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
    linked: bool,
}

impl LruReplacer {
    /// Create an LRU replacer with room reserved for `capacity` frames.
    ///
    /// `capacity` is only a reservation; frames beyond it are still tracked.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of frames tracked.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Frames from most to least recently used.
    pub fn recency_order(&self) -> Vec<FrameId> {
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            order.push(FrameId::new(idx));
            cursor = self.links[idx].next;
        }
        order
    }

    /// Move (or insert) a frame to the head of the list.
    ///
    /// A frame id past the end of `links` is a frame being filled for the
    /// first time; the array is extended to cover it.
    fn touch(&mut self, frame_id: FrameId) {
        let idx = frame_id.0;
        if idx >= self.links.len() {
            self.links.resize(idx + 1, Link::default());
        }
        if self.head == Some(idx) {
            return;
        }
        if self.links[idx].linked {
            self.unlink(idx);
        }
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        self.links[idx] = Link {
            prev: None,
            next: self.head,
            linked: true,
        };
        match self.head {
            Some(old_head) => self.links[old_head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    fn unlink(&mut self, idx: usize) {
        let Link { prev, next, .. } = self.links[idx];
        match prev {
            Some(p) => self.links[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.links[n].prev = prev,
            None => self.tail = prev,
        }
        self.links[idx] = Link::default();
        self.len -= 1;
    }
}

impl Replacer for LruReplacer {
    fn record_hit(&mut self, frame_id: FrameId) {
        self.touch(frame_id);
    }

    fn record_load(&mut self, frame_id: FrameId) {
        self.touch(frame_id);
    }

    fn evict(&mut self, _frames: &FrameTable) -> Option<FrameId> {
        let idx = self.tail?;
        self.unlink(idx);
        Some(FrameId::new(idx))
    }
}
