use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use n50sim::stats::{calculate_file_stats, FileStats};
use tracing::info;

use crate::cli_main::ReportFormat;

pub fn run_stats(inputs: &[PathBuf], format: ReportFormat) -> Result<()> {
    let mut all = Vec::with_capacity(inputs.len());
    for input in inputs {
        info!("Calculating statistics for: {}", input.display());
        let stats = calculate_file_stats(input)
            .with_context(|| format!("Unable to read {}", input.display()))?;
        all.push(stats);
    }

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &all, format)
}

pub fn write_report<W: Write>(out: &mut W, stats: &[FileStats], format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(stats)?)?;
        }
        ReportFormat::Tsv => {
            writeln!(out, "filename\tseqs\ttotal_len\tavg_len\tn50")?;
            for s in stats {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{:.2}\t{}",
                    s.filename, s.total_seqs, s.total_length, s.average_length, s.n50
                )?;
            }
        }
    }
    Ok(())
}
