//! Configuration constants and memory parameter derivation.

use std::fmt;

/// Seed for the random replacer's generator.
///
/// Every random replacer is built from this seed, so each (sequence, policy)
/// run draws the same victims given the same inputs.
pub const RANDOM_SEED: u64 = 42;

/// Sizes describing the simulated machine, as read from the workload header.
///
/// # Derived values
/// - span per frame: `virtual_size / page_size`
/// - frame count: `memory_size / span_per_frame`, or 0 when the span is 0
/// - swap capacity: `virtual_size - memory_size`
///
/// # Example
/// ```
/// use pagesim::MemoryConfig;
///
/// let config = MemoryConfig::new(64, 256, "LRU", 16);
/// assert_eq!(config.span_per_frame(), 16);
/// assert_eq!(config.frame_count(), 4);
/// assert_eq!(config.swap_capacity(), 192);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Total physical memory size.
    pub memory_size: i64,

    /// Size of the virtual address space.
    pub virtual_size: i64,

    /// Algorithm selector token. Carried through but never consulted:
    /// every run simulates all policies.
    pub algorithm: String,

    /// Page size.
    pub page_size: i64,
}

impl MemoryConfig {
    /// Create a config from raw header values.
    pub fn new(
        memory_size: i64,
        virtual_size: i64,
        algorithm: impl Into<String>,
        page_size: i64,
    ) -> Self {
        Self {
            memory_size,
            virtual_size,
            algorithm: algorithm.into(),
            page_size,
        }
    }

    /// Virtual size divided by page size.
    ///
    /// A page size of zero yields 0 rather than dividing by zero.
    pub fn span_per_frame(&self) -> i64 {
        if self.page_size == 0 {
            0
        } else {
            self.virtual_size / self.page_size
        }
    }

    /// Number of physical frames available to the simulation.
    pub fn frame_count(&self) -> usize {
        let span = self.span_per_frame();
        if span <= 0 {
            return 0;
        }
        usize::try_from(self.memory_size / span).unwrap_or(0)
    }

    /// Virtual size minus memory size. May be negative.
    pub fn swap_capacity(&self) -> i64 {
        self.virtual_size.saturating_sub(self.memory_size)
    }
}

impl fmt::Display for MemoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Memory {{ memory: {}, virtual: {}, page: {}, frames: {}, swap: {} }}",
            self.memory_size,
            self.virtual_size,
            self.page_size,
            self.frame_count(),
            self.swap_capacity()
        )
    }
}
