// src/io/mod.rs
pub mod fasta;
pub mod fastq;
pub mod records;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

fn is_gzipped(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// Open a sequence file for reading, handles gzipped files automatically
pub fn open_reader(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Buffered output file, gzip-compressed when the path ends in `.gz`
pub enum OutputFile {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl OutputFile {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        if is_gzipped(path) {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(OutputFile::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(OutputFile::Plain(BufWriter::new(file)))
        }
    }

    /// Flush buffers and write the gzip trailer. Dropping without calling
    /// this swallows late write errors.
    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputFile::Plain(mut writer) => writer.flush(),
            OutputFile::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputFile::Plain(writer) => writer.write(buf),
            OutputFile::Compressed(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputFile::Plain(writer) => writer.flush(),
            OutputFile::Compressed(writer) => writer.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;

    #[test]
    fn test_gzip_output_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.fasta.gz");

        let mut out = OutputFile::create(&path).unwrap();
        assert!(matches!(out, OutputFile::Compressed(_)));
        writeln!(out, ">seq1\nACGT").unwrap();
        out.finish().unwrap();

        let mut contents = String::new();
        open_reader(&path).unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, ">seq1\nACGT\n");
    }

    #[test]
    fn test_plain_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.fasta");

        let out = OutputFile::create(&path).unwrap();
        assert!(matches!(out, OutputFile::Plain(_)));
        out.finish().unwrap();
        assert!(path.exists());
    }
}
