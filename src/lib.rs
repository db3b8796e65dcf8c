//! pagesim - a trace-driven page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Trace I/O (trace/)                           │   │
//! │  │        Workload parser  →  ...  →  Report writer         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Driver (driver.rs)                           │   │
//! │  │   every sequence × every policy, serial or threaded      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Memory model (memory/)  [Swappable policies]       │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacers: FIFO | RAND | LRU | MIN              │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Simulator + FrameTable + SwapSet + Statistics       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`memory`] - Frame table, swap set, simulator and eviction policies
//! - [`driver`] - Runs all policies over all sequences
//! - [`trace`] - Workload parsing and report output
//!
//! # Quick Start
//! ```
//! use pagesim::{Driver, Policy, Workload};
//!
//! let workload = Workload::parse("16 256 LRU 32\n1\n6 1 2 3 1 2 3\n").unwrap();
//! assert_eq!(workload.frame_count(), 2);
//!
//! let driver = Driver::new(workload.frame_count());
//! let reports = driver.run(&workload.sequences).unwrap();
//!
//! let fifo = reports[0].result(Policy::Fifo).unwrap();
//! assert_eq!(fifo.faults(), 6);
//! ```

pub mod common;
pub mod driver;
pub mod memory;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::RANDOM_SEED;
pub use common::{pages, Error, FrameId, MemoryConfig, PageId, Result};

pub use driver::{Driver, SequenceReport};
pub use memory::{
    simulate, Access, FrameTable, Policy, Replacer, SimulationResult, SimulationStats, Simulator,
    SwapSet,
};
pub use trace::{write_report, Workload};
