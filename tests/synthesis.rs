use n50sim::calculate_n50;
use n50sim::sim::lengths::{generate_contigs, DatasetRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TARGETS: [(usize, usize, usize); 6] = [
    (1, 10, 5),
    (50, 1_000, 40),
    (1_000, 100_000, 300),
    (25_000, 5_000_000, 1_000),
    (100_000, 200_000, 3),
    (10, 10_000_000, 50),
];

#[test]
fn test_lengths_respect_bounds() {
    for &(n50, total, count) in &TARGETS {
        let request = DatasetRequest::new(n50, total, count).unwrap();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let contigs = generate_contigs(&request, &mut rng);

            assert!((n50..=total).contains(&contigs.max_len));
            assert!(!contigs.lengths.is_empty());
            assert!(contigs.lengths.len() <= count, "size exceeded for {:?}", (n50, total, count));
            assert!(contigs.lengths.iter().sum::<usize>() <= total, "sum exceeded for {:?}", (n50, total, count));
            assert!(contigs
                .lengths
                .iter()
                .all(|&l| l >= 1 && l <= contigs.max_len));
        }
    }
}

#[test]
fn test_descending_prefix_is_monotonic() {
    for &(n50, total, count) in &TARGETS {
        let request = DatasetRequest::new(n50, total, count).unwrap();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let contigs = generate_contigs(&request, &mut rng);
            let prefix = contigs.descending_prefix();

            assert!(prefix.windows(2).all(|w| w[0] >= w[1]), "prefix not sorted: {:?}", prefix);
            assert!(*prefix.last().unwrap() <= n50);
        }
    }
}

#[test]
fn test_degenerate_target_is_single_sequence() {
    let request = DatasetRequest::new(777, 777, 10).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let contigs = generate_contigs(&request, &mut rng);
    assert_eq!(contigs.lengths, vec![777]);

    let summary = calculate_n50(&contigs.lengths).unwrap();
    assert_eq!((summary.n50, summary.count, summary.total_length), (777, 1, 777));
}

#[test]
fn test_invalid_targets_rejected() {
    assert!(DatasetRequest::new(11, 10, 5).is_err());
    assert!(DatasetRequest::new(5, 10, 0).is_err());
}

// Padding only stops at the target count or when the length budget is spent
#[test]
fn test_short_datasets_use_the_whole_budget() {
    for &(n50, total, count) in &TARGETS {
        let request = DatasetRequest::new(n50, total, count).unwrap();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let contigs = generate_contigs(&request, &mut rng);
            let summary = calculate_n50(&contigs.lengths).unwrap();

            assert_eq!(summary.count, contigs.lengths.len());
            assert!(summary.n50 <= contigs.max_len);
            if summary.count < count {
                assert_eq!(
                    summary.total_length, total,
                    "seed {} stopped at {} of {} seqs without spending the budget",
                    seed, summary.count, count
                );
            }
        }
    }
}

#[test]
fn test_single_sequence_target_realizes_n50() {
    let request = DatasetRequest::new(300, 100_000, 1).unwrap();
    for seed in 0..50 {
        let contigs = generate_contigs(&request, &mut ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(contigs.lengths, vec![300]);
    }
}

#[test]
fn test_seed_reproducibility() {
    let request = DatasetRequest::new(300, 60_000, 200).unwrap();
    let first: Vec<Vec<usize>> = (0..5)
        .map(|seed| generate_contigs(&request, &mut ChaCha8Rng::seed_from_u64(seed)).lengths)
        .collect();
    let second: Vec<Vec<usize>> = (0..5)
        .map(|seed| generate_contigs(&request, &mut ChaCha8Rng::seed_from_u64(seed)).lengths)
        .collect();
    assert_eq!(first, second);
}
