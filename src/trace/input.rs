//! Workload parsing.
//!
//! The input is a stream of whitespace-separated tokens:
//!
//! ```text
//! M V A P          memory size, virtual size, algorithm token, page size
//! K                number of sequences
//! R p1 p2 .. pR    repeated K times: length, then R page identifiers
//! ```
//!
//! Line breaks carry no meaning.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use log::debug;

use crate::common::{Error, MemoryConfig, PageId, Result};

/// A parsed input: machine parameters plus the reference sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub config: MemoryConfig,
    pub sequences: Vec<Vec<PageId>>,
}

impl Workload {
    /// Parse a workload from text.
    ///
    /// # Errors
    /// - `Error::UnexpectedEof` if the input stops before a required field
    /// - `Error::InvalidToken` if a numeric field is not an integer
    /// - `Error::InvalidValue` if a size or count is negative
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        let memory_size = tokens.next_size("memory size")?;
        let virtual_size = tokens.next_size("virtual size")?;
        let algorithm = tokens.next_word("algorithm")?;
        let page_size = tokens.next_size("page size")?;
        let config = MemoryConfig::new(memory_size, virtual_size, algorithm, page_size);

        let count = tokens.next_count("sequence count")?;
        let mut sequences = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            let len = tokens.next_count("sequence length")?;
            let mut sequence = Vec::with_capacity(len.min(MAX_PREALLOC));
            for _ in 0..len {
                sequence.push(PageId::new(tokens.next_int("page identifier")?));
            }
            sequences.push(sequence);
        }

        let trailing = tokens.remaining();
        if trailing > 0 {
            debug!("ignoring {} trailing tokens after the last sequence", trailing);
        }
        debug!("parsed {} sequences, {}", sequences.len(), config);

        Ok(Self { config, sequences })
    }

    /// Read the whole reader and parse it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    /// Read and parse a workload file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let input = fs::read_to_string(path.as_ref())?;
        Self::parse(&input)
    }

    /// Frame count derived from the header.
    pub fn frame_count(&self) -> usize {
        self.config.frame_count()
    }
}

/// Upper bound on up-front allocation driven by counts read from the input.
const MAX_PREALLOC: usize = 1 << 16;

/// Cursor over whitespace-separated tokens.
struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_whitespace(),
        }
    }

    fn next_word(&mut self, expected: &'static str) -> Result<&'a str> {
        self.iter.next().ok_or(Error::UnexpectedEof { expected })
    }

    fn next_int(&mut self, expected: &'static str) -> Result<i64> {
        let token = self.next_word(expected)?;
        token.parse().map_err(|_| Error::InvalidToken {
            expected,
            token: token.to_string(),
        })
    }

    /// A non-negative integer.
    fn next_size(&mut self, field: &'static str) -> Result<i64> {
        let value = self.next_int(field)?;
        if value < 0 {
            return Err(Error::InvalidValue { field, value });
        }
        Ok(value)
    }

    fn next_count(&mut self, field: &'static str) -> Result<usize> {
        let value = self.next_size(field)?;
        usize::try_from(value).map_err(|_| Error::InvalidValue { field, value })
    }

    fn remaining(self) -> usize {
        self.iter.count()
    }
}
