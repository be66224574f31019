//! Core/dead classification benchmarks.
//!
//! These benchmarks measure the full analysis on synthetic feature-model
//! CNFs of growing size, providing realistic incremental-solver workloads.
//!
//! Run with:
//! ```bash
//! cargo bench --bench coredead
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use satfm_rs::analysis::CoreDeadAnalysis;
use satfm_rs::model::PropositionalModel;
use satfm_rs::solver::Backend;

/// Generate a deterministic synthetic feature model: a mandatory root, a
/// requires-edge tree, and a sprinkle of cross-tree excludes.
fn random_model(seed: u64, num_features: usize) -> PropositionalModel {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut model = PropositionalModel::new();

    let vars: Vec<_> = (0..num_features)
        .map(|i| model.add_variable(format!("f{:04}", i)))
        .collect();

    // Root is mandatory.
    model.add_clause([vars[0].pos()]);

    // Every other feature requires a random earlier one.
    for i in 1..num_features {
        let parent = vars[rng.random_range(0..i)];
        model.add_clause([vars[i].neg(), parent.pos()]);
    }

    // A few excludes between non-root features.
    for _ in 0..num_features / 10 {
        let a = rng.random_range(1..num_features);
        let b = rng.random_range(1..num_features);
        if a != b {
            model.add_clause([vars[a].neg(), vars[b].neg()]);
        }
    }

    model
}

fn bench_coredead(c: &mut Criterion) {
    let mut group = c.benchmark_group("coredead");

    for &size in &[50usize, 200, 500] {
        let model = random_model(42, size);
        // 1 base solve + 2 assumption solves per variable.
        group.throughput(Throughput::Elements(1 + 2 * size as u64));

        for &backend in Backend::ALL {
            let analysis = CoreDeadAnalysis::new(backend);
            group.bench_with_input(
                BenchmarkId::new(backend.name(), size),
                &model,
                |b, model| b.iter(|| analysis.execute(model).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_coredead);
criterion_main!(benches);
