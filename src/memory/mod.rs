//! Simulated physical memory.
//!
//! The memory model is a fixed set of frames shared by every replacement
//! policy. Only the victim choice differs between policies.
//!
//! # Components
//! - [`Simulator`] - Runs one policy over one trace
//! - [`FrameTable`] - Frame slots plus the page → frame residency index
//! - [`SwapSet`] - Pages evicted and not yet reloaded
//! - [`SimulationStats`] - Per-run counters
//! - [`replacer`] - Eviction policy implementations

mod frame_table;
pub mod replacer;
mod simulator;
mod stats;
mod swap_set;

pub use frame_table::FrameTable;
pub use replacer::{Policy, Replacer};
pub use simulator::{simulate, Access, SimulationResult, Simulator};
pub use stats::SimulationStats;
pub use swap_set::SwapSet;
