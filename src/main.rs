mod cli;
mod cli_main;

use anyhow::Result;
use clap::Parser;
use n50sim::sim::lengths::DatasetRequest;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use cli::generate::{output_options, run_contigs, run_generate, run_reads, GenerateParams};
use cli_main::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    debug!("Using seed {}", cli.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let start = std::time::Instant::now();

    match cli.command {
        Commands::Generate {
            min_seqs,
            max_seqs,
            min_len,
            max_len,
            tot,
            spacing,
            output,
        } => {
            let options = output_options(output, String::new());
            let params = GenerateParams {
                min_seqs,
                max_seqs,
                min_len,
                max_len,
                tot,
                spacing,
            };
            run_generate(params, &options, &mut rng)?;
        }

        Commands::Contigs {
            n50,
            total_len,
            num_seqs,
            tot,
            output,
        } => {
            // validated before any random draw
            let request = DatasetRequest::new(n50, total_len, num_seqs)?;
            let options = output_options(output, String::new());
            run_contigs(request, tot, &options, &mut rng)?;
        }

        Commands::Reads {
            specs,
            preset,
            megabases,
            read_len,
            prefix,
            output,
        } => {
            let options = output_options(output, prefix);
            run_reads(specs, preset, megabases, read_len, &options, &mut rng)?;
        }

        Commands::Stats { input, format } => {
            cli::stats::run_stats(&input, format)?;
        }
    }

    debug!("Finished in {:.2}s", start.elapsed().as_secs_f32());
    Ok(())
}
