use arbor::entropy::best_attribute;
use arbor::utils::to_column_major;
use arbor::{Matrix, Tree, TreeConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rows of a noisy categorical dataset, the label depends on the first two attributes.
fn synthetic_rows(n_rows: usize, n_attributes: usize, n_values: u8) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n_rows)
        .map(|_| {
            let attrs: Vec<u8> = (0..n_attributes).map(|_| rng.gen_range(0..n_values)).collect();
            let mut label = (attrs[0] + attrs[1]) % 3;
            if rng.gen_bool(0.1) {
                label = rng.gen_range(0..3);
            }
            std::iter::once(label).chain(attrs).collect()
        })
        .collect()
}

pub fn tree_benchmarks(c: &mut Criterion) {
    let rows = synthetic_rows(20_000, 8, 5);
    let (data_vec, cols) = to_column_major(&rows).unwrap();
    let data = Matrix::new(&data_vec, rows.len(), cols);
    let config = TreeConfig::default();

    c.bench_function("best attribute", |b| {
        b.iter(|| best_attribute(black_box(&data), black_box(&data.index)))
    });

    c.bench_function("Train Tree", |b| {
        b.iter(|| Tree::fit(black_box(&data), black_box(&config)).unwrap())
    });

    let tree = Tree::fit(&data, &config).unwrap();
    println!("n_nodes: {}, height: {}", tree.node_count(), tree.height());

    c.bench_function("Prune Tree", |b| {
        b.iter(|| {
            let mut pruned = tree.clone();
            pruned.prune_with_data(black_box(&data)).unwrap();
        })
    });

    let mut tree_predict = c.benchmark_group("tree_predict");
    tree_predict.sample_size(20);
    tree_predict.bench_function("Predict Tree", |b| {
        b.iter(|| tree.predict(black_box(&data), false).unwrap())
    });
    tree_predict.bench_function("Predict Tree - parallel", |b| {
        b.iter(|| tree.predict(black_box(&data), true).unwrap())
    });
    tree_predict.finish();
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);
