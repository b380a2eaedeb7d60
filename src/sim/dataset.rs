// src/sim/dataset.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::ValueEnum;
use rand::Rng;
use tracing::{error, info, warn};

use crate::error::{Result, SimError};
use crate::io::records::{write_records_to_path, RecordFormat};
use crate::sim::sequence::synthesize;
use crate::stats::{calculate_n50, N50Summary};

/// What a batch does when one dataset cannot be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnError {
    /// Stop the batch and return the error
    Abort,
    /// Report the failure and move on to the next dataset
    Continue,
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub outdir: PathBuf,
    pub format: RecordFormat,
    /// Prepended to every file name
    pub prefix: String,
    pub gzip: bool,
    /// FASTA wrap width, 0 for one line per sequence
    pub line_width: usize,
    pub on_error: OnError,
}

impl OutputOptions {
    pub fn new(outdir: impl Into<PathBuf>, format: RecordFormat) -> Self {
        OutputOptions {
            outdir: outdir.into(),
            format,
            prefix: String::new(),
            gzip: false,
            line_width: 0,
            on_error: OnError::Continue,
        }
    }

    /// `{prefix}{n50}_{count}_{total}.{format}`, named after the realized statistics
    pub fn output_path(&self, summary: &N50Summary) -> PathBuf {
        let mut name = format!(
            "{}{}_{}_{}.{}",
            self.prefix,
            summary.n50,
            summary.count,
            summary.total_length,
            self.format.extension()
        );
        if self.gzip {
            name.push_str(".gz");
        }
        self.outdir.join(name)
    }
}

#[derive(Debug, Clone)]
pub struct WrittenDataset {
    pub path: PathBuf,
    pub summary: N50Summary,
    /// A file with the same name was already there and got overwritten
    pub replaced_existing: bool,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<WrittenDataset>,
    pub failed: Vec<SimError>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn prepare_outdir(outdir: &Path) -> Result<()> {
    fs::create_dir_all(outdir).map_err(|e| SimError::io(outdir, e))
}

/// Per-dataset summary line. The format is fixed and parsed by callers, so it
/// goes to stderr through `eprintln!` and never through a log event.
pub fn diagnostic_line(summary: &N50Summary) -> String {
    format!(
        "N50: {}\tNum_seqs: {}\tTot_len: {}",
        summary.n50, summary.count, summary.total_length
    )
}

/// Summarize `lengths`, print the diagnostic line and write the sequences.
pub fn write_dataset<R: Rng>(
    lengths: &[usize],
    options: &OutputOptions,
    rng: &mut R,
) -> Result<WrittenDataset> {
    let summary = calculate_n50(lengths)?;
    eprintln!("{}", diagnostic_line(&summary));

    let path = options.output_path(&summary);
    let replaced_existing = path.exists();
    if replaced_existing {
        warn!("{} already exists and will be overwritten", path.display());
    }
    write_records_to_path(
        &path,
        synthesize(lengths, rng),
        options.format,
        options.line_width,
    )
    .map_err(|e| SimError::io(&path, e))?;

    Ok(WrittenDataset {
        path,
        summary,
        replaced_existing,
    })
}

/// Generate and write `total` datasets one after another.
///
/// `next_lengths` produces the length set of each dataset; its errors are
/// usage errors and end the batch immediately, as does a failure to create
/// the output directory. Write failures follow `options.on_error`.
pub fn run_batch<R, F>(
    total: usize,
    options: &OutputOptions,
    rng: &mut R,
    mut next_lengths: F,
) -> Result<BatchReport>
where
    R: Rng,
    F: FnMut(&mut R) -> Result<Vec<usize>>,
{
    prepare_outdir(&options.outdir)?;
    let mut report = BatchReport::default();

    for i in 1..=total {
        let start = Instant::now();
        let lengths = next_lengths(&mut *rng)?;
        info!("{}/{} {} dataset ({} seqs)", i, total, options.format, lengths.len());

        match write_dataset(&lengths, options, &mut *rng) {
            Ok(dataset) => {
                info!("[Done: {}] in {:.2?}", dataset.path.display(), start.elapsed());
                report.written.push(dataset);
            }
            Err(e) if e.is_usage() => return Err(e),
            Err(e) => {
                error!("Unable to write dataset {}/{}: {}", i, total, e);
                match options.on_error {
                    OnError::Abort => return Err(e),
                    OnError::Continue => report.failed.push(e),
                }
            }
        }
    }

    Ok(report)
}
