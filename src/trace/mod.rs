//! Trace I/O - reading workloads and writing reports.
//!
//! - [`Workload`] - Parsed input (memory parameters + reference sequences)
//! - [`report`] - Text report in the fixed field order

mod input;
pub mod report;

pub use input::Workload;
pub use report::write_report;
