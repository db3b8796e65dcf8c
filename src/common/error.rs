//! Error types for pagesim.

use thiserror::Error;

use crate::memory::replacer::Policy;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulation core itself has a single (bug-only) failure mode; the rest
/// come from reading and writing workloads.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a workload or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before a required field was read.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token could not be parsed as the integer the field requires.
    #[error("invalid {expected}: {token:?} is not an integer")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    /// A size or count was out of range (e.g. negative).
    #[error("invalid {field}: {value} must not be negative")]
    InvalidValue { field: &'static str, value: i64 },

    /// The replacer returned no victim while every frame was occupied.
    ///
    /// This indicates a bug in the replacer's bookkeeping.
    #[error("{policy} replacer has no evictable frame")]
    NoEvictableFrame { policy: Policy },
}
