//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference trace.
///
/// Page identifiers are opaque integer tokens read from the input. They carry
/// no meaning beyond equality and ordering, so negative values are allowed.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert!(PageId::new(-1) < page_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

/// Convert a slice of raw integers into page identifiers.
///
/// Mostly useful in tests and benchmarks.
pub fn pages(ids: &[i64]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
        assert!(PageId::new(-7) < PageId::new(0));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
        assert_eq!(format!("{}", PageId::new(-3)), "Page(-3)");
    }

    #[test]
    fn test_pages_helper() {
        assert_eq!(pages(&[1, 2]), vec![PageId(1), PageId(2)]);
        assert!(pages(&[]).is_empty());
    }
}
