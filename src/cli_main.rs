use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use n50sim::io::records::RecordFormat;
use n50sim::sim::reads::{ReadPreset, ReadSpec};
use n50sim::sim::{OnError, Spacing};

#[derive(Parser, Debug)]
#[command(name = "n50sim", version, about = "Synthetic FASTA/FASTQ datasets with a target N50", long_about = None)]
pub struct Cli {
    /// Seed for the random generator; the same seed reproduces the same files
    #[arg(long, global = true, default_value_t = 42)]
    pub seed: u64,

    /// Log debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how datasets are written
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output directory, created if missing
    #[arg(short, long)]
    pub outdir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = RecordFormat::Fasta)]
    pub format: RecordFormat,

    /// Compress output with gzip
    #[arg(long)]
    pub gzip: bool,

    /// Wrap FASTA sequences at this width (0 = one line)
    #[arg(long, default_value_t = 0)]
    pub line_width: usize,

    /// Abort the batch on the first write failure, or report it and continue
    #[arg(long, value_enum, default_value_t = OnError::Continue)]
    pub on_error: OnError,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate datasets with random sequence counts and lengths
    Generate {
        /// Minimum number of sequences
        #[arg(long, default_value_t = 15)]
        min_seqs: usize,

        /// Maximum number of sequences
        #[arg(long, default_value_t = 5000)]
        max_seqs: usize,

        /// Minimum length for a sequence
        #[arg(long, default_value_t = 12)]
        min_len: usize,

        /// Maximum length for a sequence
        #[arg(long, default_value_t = 100_000)]
        max_len: usize,

        /// Number of files to generate
        #[arg(long, default_value_t = 10)]
        tot: usize,

        /// How lengths are spread over the range
        #[arg(long, value_enum, default_value_t = Spacing::Uniform)]
        spacing: Spacing,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate contig datasets approximating a target N50, total length and count
    Contigs {
        /// Target N50
        #[arg(long)]
        n50: usize,

        /// Target total length
        #[arg(long)]
        total_len: usize,

        /// Target number of sequences
        #[arg(long)]
        num_seqs: usize,

        /// Number of files to generate
        #[arg(long, default_value_t = 1)]
        tot: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate one read dataset from COUNT*SIZE specifications or a preset
    Reads {
        /// Read groups as COUNT*SIZE, SIZE accepts K/M/G suffixes
        #[arg(required_unless_present = "preset")]
        specs: Vec<ReadSpec>,

        /// Build the read groups from a sequencing profile instead
        #[arg(long, value_enum, conflicts_with = "specs")]
        preset: Option<ReadPreset>,

        /// Approximate total size of a preset dataset in megabases
        #[arg(long, default_value_t = 200)]
        megabases: usize,

        /// Read length of the Illumina preset
        #[arg(long, default_value_t = 150)]
        read_len: usize,

        /// Prefix for the output file name
        #[arg(short, long, default_value = "")]
        prefix: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute N50, sequence count and total length of FASTA/FASTQ files
    Stats {
        /// Input FASTA/FASTQ files, optionally gzipped
        #[arg(required = true)]
        input: Vec<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Tsv)]
        format: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Tsv,
    Json,
}
