// src/sim/reads.rs
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{Result, SimError};

/// `count` reads of `size` bases, written as `COUNT*SIZE` on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadSpec {
    pub count: usize,
    pub size: usize,
}

/// Parse a size with an optional K/M/G suffix (powers of 1000)
pub fn parse_size(text: &str) -> Option<usize> {
    let text = text.trim();
    let (digits, multiplier) = match text.chars().last()?.to_ascii_uppercase() {
        'K' => (&text[..text.len() - 1], 1_000),
        'M' => (&text[..text.len() - 1], 1_000_000),
        'G' => (&text[..text.len() - 1], 1_000_000_000),
        _ => (text, 1),
    };
    digits.parse::<usize>().ok()?.checked_mul(multiplier)
}

impl FromStr for ReadSpec {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SimError::InvalidReadSpec(s.to_string());
        let (count, size) = s.split_once('*').ok_or_else(invalid)?;
        let count = count.trim().parse::<usize>().map_err(|_| invalid())?;
        let size = parse_size(size).ok_or_else(invalid)?;
        if count == 0 || size == 0 {
            return Err(invalid());
        }
        Ok(ReadSpec { count, size })
    }
}

impl fmt::Display for ReadSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.count, self.size)
    }
}

/// Expand specs into one length per read, in spec order
pub fn expand_specs(specs: &[ReadSpec]) -> Vec<usize> {
    specs
        .iter()
        .flat_map(|spec| std::iter::repeat(spec.size).take(spec.count))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReadPreset {
    /// Fixed-length short reads
    Illumina,
    /// Long reads spread over fixed length buckets
    Nanopore,
}

/// Length buckets for Nanopore-like data: (min, max, share of total bases)
pub const NANOPORE_BUCKETS: [(usize, usize, f64); 5] = [
    (1_000, 10_000, 0.4),
    (10_001, 100_000, 0.3),
    (100_001, 1_000_000, 0.1),
    (1_000_001, 2_000_000, 0.1),
    (2_000_001, 50_000_000, 0.1),
];

/// As many `read_len` reads as fit in `target_size` bases
pub fn illumina_specs(target_size: usize, read_len: usize) -> Result<Vec<ReadSpec>> {
    if read_len == 0 || target_size < read_len {
        return Err(SimError::InvalidRange {
            what: "read length",
            min: read_len,
            max: target_size,
        });
    }
    Ok(vec![ReadSpec {
        count: target_size / read_len,
        size: read_len,
    }])
}

/// One spec per Nanopore bucket, each read at the bucket midpoint.
/// Buckets too small to hold a single read are left out.
pub fn nanopore_specs(target_size: usize) -> Vec<ReadSpec> {
    NANOPORE_BUCKETS
        .iter()
        .filter_map(|&(min_len, max_len, share)| {
            let size = (min_len + max_len) / 2;
            let count = (target_size as f64 * share) as usize / size;
            (count > 0).then_some(ReadSpec { count, size })
        })
        .collect()
}
