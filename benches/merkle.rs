use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use merkle_inclusion::hash::Algorithm;
use merkle_inclusion::merkle::MerkleTree;
use merkle_inclusion::sha256::{Sha256Algorithm, Sha256Hash};
use merkle_inclusion::{verify, BuildConfig};

type Tree = MerkleTree<Sha256Hash, Sha256Algorithm>;

fn make_leaves(n: u64) -> Vec<Sha256Hash> {
    let mut a = Sha256Algorithm::new();
    (0..n).map(|i| a.digest(&i.to_le_bytes())).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle/build");

    for &size in &[1_000u64, 16_384, 100_000] {
        let leaves = make_leaves(size);
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("sequential", size), &leaves, |b, leaves| {
            b.iter(|| {
                Tree::new_with_config(black_box(leaves.clone()), BuildConfig::sequential()).unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("default", size), &leaves, |b, leaves| {
            b.iter(|| Tree::new(black_box(leaves.clone())).unwrap())
        });
    }

    group.finish();
}

fn bench_proofs(c: &mut Criterion) {
    let leaves = make_leaves(1 << 16);
    let tree = Tree::new(leaves.clone()).unwrap();
    let root = tree.root();
    let leaf = leaves[12_345];
    let proof = tree.gen_proof(12_345).unwrap();

    c.bench_function("merkle/gen_proof", |b| {
        b.iter(|| tree.gen_proof(black_box(12_345)).unwrap())
    });

    c.bench_function("merkle/gen_proof_for_leaf", |b| {
        b.iter(|| tree.gen_proof_for_leaf(black_box(&leaf)).unwrap())
    });

    c.bench_function("merkle/verify", |b| {
        b.iter(|| verify::<_, Sha256Algorithm>(black_box(&leaf), black_box(&proof), &root))
    });
}

criterion_group!(benches, bench_build, bench_proofs);
criterion_main!(benches);
