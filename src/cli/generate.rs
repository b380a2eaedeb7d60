use anyhow::{bail, Context, Result};
use n50sim::sim::lengths::{draw_count, even_lengths, generate_contigs, uniform_lengths, DatasetRequest, Spacing};
use n50sim::sim::reads::{expand_specs, illumina_specs, nanopore_specs, ReadPreset, ReadSpec};
use n50sim::sim::{run_batch, BatchReport, OutputOptions};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::cli_main::OutputArgs;

pub fn output_options(args: OutputArgs, prefix: String) -> OutputOptions {
    OutputOptions {
        outdir: args.outdir,
        format: args.format,
        prefix,
        gzip: args.gzip,
        line_width: args.line_width,
        on_error: args.on_error,
    }
}

pub struct GenerateParams {
    pub min_seqs: usize,
    pub max_seqs: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub tot: usize,
    pub spacing: Spacing,
}

/// Datasets with a random count and lengths spread over a range
pub fn run_generate(params: GenerateParams, options: &OutputOptions, rng: &mut ChaCha8Rng) -> Result<()> {
    info!(
        "Parameters: min_seqs={}, max_seqs={}, min_len={}, max_len={}, tot_files={}, format={}, outdir={}",
        params.min_seqs,
        params.max_seqs,
        params.min_len,
        params.max_len,
        params.tot,
        options.format,
        options.outdir.display()
    );

    let report = run_batch(params.tot, options, rng, |rng| {
        let num_seqs = draw_count(params.min_seqs, params.max_seqs, rng)?;
        match params.spacing {
            Spacing::Uniform => uniform_lengths(params.min_len, params.max_len, num_seqs, rng),
            Spacing::Even => even_lengths(params.min_len, params.max_len, num_seqs),
        }
    })?;
    finish_report(report, options)
}

/// Datasets built by the length-distribution synthesizer
pub fn run_contigs(request: DatasetRequest, tot: usize, options: &OutputOptions, rng: &mut ChaCha8Rng) -> Result<()> {
    info!(
        "Target N50={}, total length={}, sequences={}, files={}",
        request.target_n50(),
        request.target_total_length(),
        request.target_sequence_count(),
        tot
    );

    let report = run_batch(tot, options, rng, |rng| Ok(generate_contigs(&request, rng).lengths))?;
    finish_report(report, options)
}

/// One read dataset from explicit specs or a preset
pub fn run_reads(
    specs: Vec<ReadSpec>,
    preset: Option<ReadPreset>,
    megabases: usize,
    read_len: usize,
    options: &OutputOptions,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    let target_size = megabases
        .checked_mul(1_000_000)
        .context("--megabases is too large")?;
    let specs = match preset {
        Some(ReadPreset::Illumina) => illumina_specs(target_size, read_len)?,
        Some(ReadPreset::Nanopore) => nanopore_specs(target_size),
        None => specs,
    };
    if specs.is_empty() {
        bail!("No read specifications: provide COUNT*SIZE arguments or a larger --megabases");
    }

    let spec_list: Vec<String> = specs.iter().map(|s| s.to_string()).collect();
    info!("Read groups: {}", spec_list.join(" "));

    let lengths = expand_specs(&specs);
    let report = run_batch(1, options, rng, |_| Ok(lengths.clone()))?;
    finish_report(report, options)
}

fn finish_report(report: BatchReport, options: &OutputOptions) -> Result<()> {
    info!("Wrote {} dataset(s) to {}", report.written.len(), options.outdir.display());
    if !report.is_complete() {
        for e in &report.failed {
            warn!("skipped: {}", e);
        }
        // continue mode still reports a failed run through the exit code
        bail!(
            "{} of {} datasets could not be written",
            report.failed.len(),
            report.failed.len() + report.written.len()
        );
    }
    Ok(())
}
