//! Synthetic FASTA/FASTQ datasets with a chosen N50, total length and
//! sequence count.
//!
//! Every random draw goes through a caller-supplied generator, so a fixed
//! seed reproduces the same datasets.

pub mod error;
pub mod io;
pub mod sim;
pub mod stats;

pub use error::{Result, SimError};
pub use stats::{calculate_n50, N50Summary};
