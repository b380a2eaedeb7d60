use std::io::BufRead;
use std::path::Path;

use bio::io::{fasta, fastq};
use serde::Serialize;

use crate::error::{Result, SimError};
use crate::io::open_reader;

/// N50, sequence count and total length of a length set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct N50Summary {
    pub n50: usize,
    pub count: usize,
    pub total_length: usize,
}

/// Compute the N50 of `lengths`.
///
/// Lengths are visited longest first; the N50 is the first length at which
/// the running sum covers at least half of the total. Equal lengths are
/// indistinguishable, the value is returned and never a position.
pub fn calculate_n50(lengths: &[usize]) -> Result<N50Summary> {
    if lengths.is_empty() {
        return Err(SimError::EmptyLengths);
    }

    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let total_length = sorted
        .iter()
        .try_fold(0usize, |sum, &len| sum.checked_add(len))
        .ok_or(SimError::LengthOverflow)?;

    // acc >= total - acc is the exact half threshold, also for odd totals
    let mut acc = 0;
    let n50 = sorted
        .iter()
        .find(|&&len| {
            acc += len;
            acc >= total_length - acc
        })
        .copied()
        .unwrap_or(0);

    Ok(N50Summary {
        n50,
        count: sorted.len(),
        total_length,
    })
}

#[derive(Debug, Serialize)]
pub struct FileStats {
    pub filename: String,
    pub total_seqs: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub n50: usize,
}

/// Read a FASTA or FASTQ file (optionally gzipped) and summarize its lengths.
/// The format is taken from the first record marker, not the file name.
pub fn calculate_file_stats(path: &Path) -> Result<FileStats> {
    let mut reader = open_reader(path).map_err(|e| SimError::io(path, e))?;
    let first = reader
        .fill_buf()
        .map_err(|e| SimError::io(path, e))?
        .first()
        .copied();

    let lengths = match first {
        Some(b'@') => fastq_lengths(reader).map_err(|e| SimError::io(path, e))?,
        _ => fasta_lengths(reader).map_err(|e| SimError::io(path, e))?,
    };

    let summary = calculate_n50(&lengths)?;
    Ok(FileStats {
        filename: path.display().to_string(),
        total_seqs: summary.count,
        total_length: summary.total_length,
        average_length: summary.total_length as f64 / summary.count as f64,
        n50: summary.n50,
    })
}

fn fasta_lengths(reader: Box<dyn BufRead>) -> std::io::Result<Vec<usize>> {
    fasta::Reader::from_bufread(reader)
        .records()
        .map(|record| record.map(|r| r.seq().len()))
        .collect()
}

fn fastq_lengths(reader: Box<dyn BufRead>) -> std::io::Result<Vec<usize>> {
    fastq::Reader::from_bufread(reader)
        .records()
        .map(|record| {
            record
                .map(|r| r.seq().len())
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_n50_of_one_to_ten() {
        let lengths: Vec<usize> = (1..=10).collect();
        let summary = calculate_n50(&lengths).unwrap();
        // 10 + 9 + 8 + 7 = 34 >= 27.5
        assert_eq!(summary.n50, 7);
        assert_eq!(summary.count, 10);
        assert_eq!(summary.total_length, 55);
    }

    #[test]
    fn test_n50_uniform_lengths() {
        for k in 1..=20 {
            let lengths = vec![150; k];
            let summary = calculate_n50(&lengths).unwrap();
            assert_eq!(summary.n50, 150);
            assert_eq!(summary.count, k);
            assert_eq!(summary.total_length, 150 * k);
        }
    }

    #[test]
    fn test_n50_ignores_input_order() {
        let summary = calculate_n50(&[4, 24, 20]).unwrap();
        assert_eq!(summary.n50, 24);
        let summary = calculate_n50(&[2, 2, 2, 10]).unwrap();
        assert_eq!(summary.n50, 10);
    }

    #[test]
    fn test_n50_near_usize_max() {
        let big = usize::MAX / 2 + 1;
        let summary = calculate_n50(&[10, big]).unwrap();
        assert_eq!(summary.n50, big);
        assert_eq!(summary.total_length, big + 10);
    }

    #[test]
    fn test_n50_total_overflow_is_error() {
        assert!(matches!(
            calculate_n50(&[usize::MAX, 1]),
            Err(SimError::LengthOverflow)
        ));
    }

    #[test]
    fn test_n50_empty_is_error() {
        assert!(matches!(calculate_n50(&[]), Err(SimError::EmptyLengths)));
    }

    #[test]
    fn test_calculate_file_stats_fasta() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">contig_1").unwrap();
        writeln!(file, "ATCGATCGATCGATCGATCG").unwrap(); // 20 bp
        writeln!(file, ">contig_2").unwrap();
        writeln!(file, "GCTAGCTAGCTAGCTAGCTAGCTA").unwrap(); // 24 bp
        writeln!(file, ">contig_3").unwrap();
        writeln!(file, "ATCG").unwrap(); // 4 bp

        let stats = calculate_file_stats(file.path()).unwrap();
        assert_eq!(stats.total_seqs, 3);
        assert_eq!(stats.total_length, 48);
        assert_eq!(stats.average_length, 16.0);
        assert_eq!(stats.n50, 24);
    }

    #[test]
    fn test_calculate_file_stats_fastq() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "@read1\nACGTACGT\n+\nIIIIIIII").unwrap();
        writeln!(file, "@read2\nACG\n+\nIII").unwrap();

        let stats = calculate_file_stats(file.path()).unwrap();
        assert_eq!(stats.total_seqs, 2);
        assert_eq!(stats.total_length, 11);
        assert_eq!(stats.n50, 8);
    }

    #[test]
    fn test_calculate_file_stats_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(
            calculate_file_stats(file.path()),
            Err(SimError::EmptyLengths)
        ));
    }
}
