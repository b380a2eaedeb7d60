// src/io/fastq.rs
use std::io::{self, Write};
use std::path::Path;

use crate::io::OutputFile;

/// Quality symbol used for every base. A fixed high-quality placeholder,
/// not an error model.
pub const PLACEHOLDER_QUALITY: char = 'I';

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub header: String,
    pub sequence: String,
    pub plus: String,
    pub quality: String,
}

impl FastqRecord {
    /// Build a record whose quality line is `PLACEHOLDER_QUALITY` repeated
    pub fn with_placeholder_quality(id: &str, sequence: String) -> Self {
        let quality = PLACEHOLDER_QUALITY.to_string().repeat(sequence.len());
        FastqRecord {
            header: format!("@{}", id),
            sequence,
            plus: "+".to_string(),
            quality,
        }
    }
}

pub struct FastqWriter<W: Write> {
    writer: W,
}

impl FastqWriter<OutputFile> {
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(FastqWriter::new(OutputFile::create(path)?))
    }

    pub fn finish(self) -> io::Result<()> {
        self.writer.finish()
    }
}

impl<W: Write> FastqWriter<W> {
    pub fn new(writer: W) -> Self {
        FastqWriter { writer }
    }

    pub fn write_record(&mut self, record: &FastqRecord) -> io::Result<()> {
        writeln!(self.writer, "{}", record.header)?;
        writeln!(self.writer, "{}", record.sequence)?;
        writeln!(self.writer, "{}", record.plus)?;
        writeln!(self.writer, "{}", record.quality)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
