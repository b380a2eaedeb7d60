use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use n50sim::calculate_n50;
use n50sim::io::records::{write_records, RecordFormat};
use n50sim::sim::lengths::{generate_contigs, DatasetRequest};
use n50sim::sim::sequence::synthesize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::sink;

/// Benchmark length synthesis and N50 computation at increasing counts
fn bench_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("lengths");

    for num_seqs in [100, 1_000, 10_000] {
        let request = DatasetRequest::new(10_000, num_seqs * 5_000, num_seqs).unwrap();
        group.throughput(Throughput::Elements(num_seqs as u64));

        group.bench_with_input(BenchmarkId::new("generate_contigs", num_seqs), &request, |b, request| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| generate_contigs(black_box(request), &mut rng))
        });

        let lengths = generate_contigs(&request, &mut ChaCha8Rng::seed_from_u64(42)).lengths;
        group.bench_with_input(BenchmarkId::new("calculate_n50", num_seqs), &lengths, |b, lengths| {
            b.iter(|| calculate_n50(black_box(lengths)))
        });
    }

    group.finish();
}

/// Benchmark sequence synthesis plus serialization into a sink
fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    let lengths = vec![150; 1_000];
    group.throughput(Throughput::Bytes(lengths.iter().sum::<usize>() as u64));

    for format in [RecordFormat::Fasta, RecordFormat::Fastq] {
        group.bench_function(BenchmarkId::new("write_records", format), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| write_records(sink(), synthesize(&lengths, &mut rng), format, 0).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lengths, bench_emit);
criterion_main!(benches);
