// src/sim/lengths.rs
use clap::ValueEnum;
use rand::Rng;
use tracing::debug;

use crate::error::{Result, SimError};

/// Target N50, total length and sequence count for one synthetic dataset.
/// Only constructible through `new`, which rejects impossible targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetRequest {
    target_n50: usize,
    target_total_length: usize,
    target_sequence_count: usize,
}

impl DatasetRequest {
    pub fn new(
        target_n50: usize,
        target_total_length: usize,
        target_sequence_count: usize,
    ) -> Result<Self> {
        if target_n50 == 0 || target_n50 > target_total_length || target_sequence_count == 0 {
            return Err(SimError::InvalidTarget {
                n50: target_n50,
                total_length: target_total_length,
                num_seqs: target_sequence_count,
            });
        }
        Ok(DatasetRequest {
            target_n50,
            target_total_length,
            target_sequence_count,
        })
    }

    pub fn target_n50(&self) -> usize {
        self.target_n50
    }

    pub fn target_total_length(&self) -> usize {
        self.target_total_length
    }

    pub fn target_sequence_count(&self) -> usize {
        self.target_sequence_count
    }
}

/// Output of `generate_contigs`
#[derive(Debug, Clone)]
pub struct ContigLengths {
    pub lengths: Vec<usize>,
    /// First element, drawn from [target N50, target total]; bounds every length
    pub max_len: usize,
    /// Number of leading elements built by the descending phase
    pub prefix_len: usize,
}

impl ContigLengths {
    pub fn descending_prefix(&self) -> &[usize] {
        &self.lengths[..self.prefix_len]
    }
}

/// Build a length set whose N50, sum and count approximate `request`.
///
/// A largest contig is drawn from [N50, total], then each following contig is
/// drawn from [1, previous] until one lands at or below the N50. That prefix
/// is already sorted, so it is what the N50 computation walks first. The rest
/// is padding drawn from [1, largest] until the count is reached or the
/// length budget runs out. Every draw is capped at the remaining budget, so
/// the sum never exceeds the target total and the count never exceeds the
/// target count. None of the targets is met exactly in general.
pub fn generate_contigs<R: Rng>(request: &DatasetRequest, rng: &mut R) -> ContigLengths {
    let n50 = request.target_n50;
    let sum_len = request.target_total_length;
    let tot_seqs = request.target_sequence_count;

    let max_len = rng.gen_range(n50..=sum_len);
    debug!("MAX_LEN {} for N50 {} / total {} / count {}", max_len, n50, sum_len, tot_seqs);

    let mut lengths = Vec::with_capacity(tot_seqs.min(1 << 16));
    lengths.push(max_len);
    let mut tmp_sum = max_len;
    let mut last = max_len;

    while last > n50 && lengths.len() < tot_seqs {
        let remaining = sum_len - tmp_sum;
        if remaining == 0 {
            break;
        }
        let next = rng.gen_range(1..=last).min(remaining);
        lengths.push(next);
        tmp_sum += next;
        last = next;
    }

    // count or budget stopped the descent above the target
    if last > n50 {
        if let Some(tail) = lengths.last_mut() {
            *tail = n50;
        }
        tmp_sum -= last - n50;
    }
    let prefix_len = lengths.len();
    debug!("descending prefix: {} contigs, {} bp", prefix_len, tmp_sum);

    while lengths.len() < tot_seqs {
        let remaining = sum_len - tmp_sum;
        if remaining == 0 {
            break;
        }
        let next = rng.gen_range(1..=max_len).min(remaining);
        lengths.push(next);
        tmp_sum += next;
    }

    ContigLengths {
        lengths,
        max_len,
        prefix_len,
    }
}

/// How `generate` spreads lengths over `[min_len, max_len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Spacing {
    /// Independent uniform draws
    Uniform,
    /// Evenly stepped lengths starting at `min_len`
    Even,
}

fn check_range(what: &'static str, min: usize, max: usize) -> Result<()> {
    if min == 0 || min > max {
        return Err(SimError::InvalidRange { what, min, max });
    }
    Ok(())
}

/// `num_seqs` lengths drawn uniformly from `[min_len, max_len]`
pub fn uniform_lengths<R: Rng>(
    min_len: usize,
    max_len: usize,
    num_seqs: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    check_range("length", min_len, max_len)?;
    Ok((0..num_seqs).map(|_| rng.gen_range(min_len..=max_len)).collect())
}

/// `num_seqs` lengths stepping from `min_len` by `(max_len - min_len) / num_seqs`
pub fn even_lengths(min_len: usize, max_len: usize, num_seqs: usize) -> Result<Vec<usize>> {
    check_range("length", min_len, max_len)?;
    if num_seqs == 0 {
        return Ok(Vec::new());
    }
    let step = (max_len - min_len) / num_seqs;
    Ok((0..num_seqs).map(|i| step * i + min_len).collect())
}

/// Draw a sequence count from `[min_seqs, max_seqs]`
pub fn draw_count<R: Rng>(min_seqs: usize, max_seqs: usize, rng: &mut R) -> Result<usize> {
    check_range("sequence count", min_seqs, max_seqs)?;
    Ok(rng.gen_range(min_seqs..=max_seqs))
}
