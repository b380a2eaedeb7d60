// src/io/fasta.rs
use std::io::{Result, Write};
use std::path::Path;

use crate::io::OutputFile;

pub struct FastaWriter<W: Write> {
    writer: W,
    line_width: usize,
}

impl FastaWriter<OutputFile> {
    /// Create a FASTA file, gzip-compressed if the path ends in `.gz`
    pub fn create(path: &Path) -> Result<Self> {
        Ok(FastaWriter::new(OutputFile::create(path)?))
    }

    pub fn finish(self) -> Result<()> {
        self.writer.finish()
    }
}

impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W) -> Self {
        FastaWriter {
            writer,
            line_width: 0,
        }
    }

    /// Wrap sequence lines at `width` characters; 0 keeps each sequence on one line
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    pub fn write_record(&mut self, header: &str, sequence: &str) -> Result<()> {
        writeln!(self.writer, ">{}", header)?;
        if self.line_width == 0 || sequence.len() <= self.line_width {
            writeln!(self.writer, "{}", sequence)?;
        } else {
            for chunk in sequence.as_bytes().chunks(self.line_width) {
                self.writer.write_all(chunk)?;
                self.writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_records() {
        let mut writer = FastaWriter::new(Vec::new());
        writer.write_record("seq1", "ACGTACGT").unwrap();
        writer.write_record("seq2", "TTG").unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, ">seq1\nACGTACGT\n>seq2\nTTG\n");
    }

    #[test]
    fn test_wrapped_records() {
        let mut writer = FastaWriter::new(Vec::new()).with_line_width(3);
        writer.write_record("seq1", "ACGTACG").unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, ">seq1\nACG\nTAC\nG\n");
    }
}
