// src/sim/sequence.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticSequence {
    pub id: usize,
    pub bases: String,
}

impl SyntheticSequence {
    pub fn new(id: usize, bases: String) -> Self {
        SyntheticSequence { id, bases }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

/// Random sequence of exactly `length` bases, each drawn uniformly from ACGT
pub fn generate_sequence<R: Rng>(length: usize, rng: &mut R) -> String {
    let base_dist = Uniform::from(0..BASES.len());
    (0..length).map(|_| BASES[base_dist.sample(rng)]).collect()
}

/// Lazily expand each length into a sequence, numbering them from 1.
/// Sequences are built one at a time as the iterator is consumed.
pub fn synthesize<'a, R: Rng>(
    lengths: &'a [usize],
    rng: &'a mut R,
) -> impl Iterator<Item = SyntheticSequence> + 'a {
    lengths
        .iter()
        .enumerate()
        .map(move |(i, &len)| SyntheticSequence::new(i + 1, generate_sequence(len, rng)))
}
