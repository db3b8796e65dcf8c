//! Report writer.
//!
//! Output layout:
//!
//! ```text
//! SP
//! N
//! V-M
//!
//! K
//!
//! R                       per sequence
//! p1 p2 .. pR
//! NAME                    per policy, FIFO RAND LRU MIN
//! elapsed seconds
//! faults
//! swap pages (ascending, empty line if none)
//!                         blank line between sequences
//! ```

use std::io::Write;

use crate::common::{MemoryConfig, PageId, Result};
use crate::driver::SequenceReport;

/// Write the full report for `reports` to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    config: &MemoryConfig,
    reports: &[SequenceReport],
) -> Result<()> {
    writeln!(out, "{}", config.span_per_frame())?;
    writeln!(out, "{}", config.frame_count())?;
    writeln!(out, "{}", config.swap_capacity())?;
    writeln!(out)?;
    writeln!(out, "{}", reports.len())?;
    writeln!(out)?;

    for (idx, report) in reports.iter().enumerate() {
        write_sequence(out, report)?;
        if idx + 1 < reports.len() {
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_sequence<W: Write>(out: &mut W, report: &SequenceReport) -> Result<()> {
    writeln!(out, "{}", report.sequence.len())?;
    write_pages(out, &report.sequence)?;

    for result in &report.results {
        writeln!(out, "{}", result.policy.name())?;
        writeln!(out, "{}", result.elapsed_seconds())?;
        writeln!(out, "{}", result.faults())?;
        write_pages(out, &result.swap_pages)?;
    }
    Ok(())
}

/// Space-separated page ids on one line.
fn write_pages<W: Write>(out: &mut W, pages: &[PageId]) -> Result<()> {
    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", page.0)?;
    }
    writeln!(out)?;
    Ok(())
}
