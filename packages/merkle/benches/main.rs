use bridge_merkle::{hash_from_byte_slices, proof_from_byte_slices, proofs_from_byte_slices};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Encoded commitment leaves are 64 bytes each.
fn gen_leaves(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            let mut leaf = vec![0u8; 64];
            leaf[24..32].copy_from_slice(&(i as u64).to_be_bytes());
            leaf[32..].fill((i % 251) as u8);
            leaf
        })
        .collect()
}

fn bench_merkle(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle");
    // Up to the default bridge commitment blocks limit.
    for count in [10usize, 100, 1000] {
        let leaves = gen_leaves(count);
        group.bench_with_input(BenchmarkId::new("root", count), &leaves, |b, leaves| {
            b.iter(|| hash_from_byte_slices(black_box(leaves)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("proof", count), &leaves, |b, leaves| {
            b.iter(|| proof_from_byte_slices(black_box(leaves), (count / 2) as i64).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("all_proofs", count), &leaves, |b, leaves| {
            b.iter(|| proofs_from_byte_slices(black_box(leaves)).unwrap())
        });
        let root = hash_from_byte_slices(&leaves).unwrap();
        let proof = proof_from_byte_slices(&leaves, (count - 1) as i64).unwrap();
        group.bench_with_input(BenchmarkId::new("verify", count), &leaves, |b, leaves| {
            b.iter(|| proof.verify(&root, black_box(&leaves[count - 1])).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merkle);
criterion_main!(benches);
