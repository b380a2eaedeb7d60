// src/io/records.rs
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::io::fasta::FastaWriter;
use crate::io::fastq::{FastqRecord, FastqWriter};
use crate::sim::sequence::SyntheticSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    #[value(name = "FASTA")]
    Fasta,
    #[value(name = "FASTQ")]
    Fastq,
}

impl RecordFormat {
    /// Lowercase format name, used as the output file extension
    pub fn extension(&self) -> &'static str {
        match self {
            RecordFormat::Fasta => "fasta",
            RecordFormat::Fastq => "fastq",
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Fasta => write!(f, "FASTA"),
            RecordFormat::Fastq => write!(f, "FASTQ"),
        }
    }
}

/// Identifier of the record at `position` (0-based): seq1, seq2, ...
pub fn record_id(position: usize) -> String {
    format!("seq{}", position + 1)
}

fn fasta_records<W, I>(fasta: &mut FastaWriter<W>, sequences: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = SyntheticSequence>,
{
    let mut written = 0;
    for (position, seq) in sequences.into_iter().enumerate() {
        fasta.write_record(&record_id(position), &seq.bases)?;
        written += 1;
    }
    Ok(written)
}

fn fastq_records<W, I>(fastq: &mut FastqWriter<W>, sequences: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = SyntheticSequence>,
{
    let mut written = 0;
    for (position, seq) in sequences.into_iter().enumerate() {
        let record = FastqRecord::with_placeholder_quality(&record_id(position), seq.bases);
        fastq.write_record(&record)?;
        written += 1;
    }
    Ok(written)
}

/// Serialize `sequences` to `writer`. Identifiers come from output position,
/// the sequences' own ids are not consulted. Returns the writer and the
/// number of records written.
pub fn write_records<W, I>(
    writer: W,
    sequences: I,
    format: RecordFormat,
    line_width: usize,
) -> io::Result<(W, usize)>
where
    W: Write,
    I: IntoIterator<Item = SyntheticSequence>,
{
    match format {
        RecordFormat::Fasta => {
            let mut fasta = FastaWriter::new(writer).with_line_width(line_width);
            let written = fasta_records(&mut fasta, sequences)?;
            Ok((fasta.into_inner(), written))
        }
        RecordFormat::Fastq => {
            let mut fastq = FastqWriter::new(writer);
            let written = fastq_records(&mut fastq, sequences)?;
            Ok((fastq.into_inner(), written))
        }
    }
}

/// Write `sequences` to `path` (gzip when it ends in `.gz`). A failure part
/// way through leaves a truncated file behind.
pub fn write_records_to_path<I>(
    path: &Path,
    sequences: I,
    format: RecordFormat,
    line_width: usize,
) -> io::Result<usize>
where
    I: IntoIterator<Item = SyntheticSequence>,
{
    match format {
        RecordFormat::Fasta => {
            let mut fasta = FastaWriter::create(path)?.with_line_width(line_width);
            let written = fasta_records(&mut fasta, sequences)?;
            fasta.finish()?;
            Ok(written)
        }
        RecordFormat::Fastq => {
            let mut fastq = FastqWriter::create(path)?;
            let written = fastq_records(&mut fastq, sequences)?;
            fastq.finish()?;
            Ok(written)
        }
    }
}
