//! Per-run simulation statistics.

use std::fmt;

/// Counters collected while a single (sequence, policy) run executes.
///
/// A run is single-threaded and owns its counters, so these are plain
/// integers rather than atomics.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::default();
/// stats.references = 10;
/// stats.hits = 7;
/// stats.faults = 3;
/// assert_eq!(stats.hit_rate(), 0.7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of references processed.
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References that did not (page faults).
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Fraction of references that were hits (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ refs: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
