pub mod dataset;
pub mod lengths;
pub mod reads;
pub mod sequence;

pub use dataset::{run_batch, BatchReport, OnError, OutputOptions, WrittenDataset};
pub use lengths::{generate_contigs, ContigLengths, DatasetRequest, Spacing};
pub use sequence::{generate_sequence, SyntheticSequence};
