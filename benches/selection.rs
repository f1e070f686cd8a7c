use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weighted_dijkstra::graph::generators::generate_random;
use weighted_dijkstra::{Dijkstra, SelectionStrategy, VertexId};

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for size in [200usize, 1_000] {
        let graph = generate_random(size, 3.0, 100.0, 1).expect("graph generation");

        for strategy in [SelectionStrategy::LinearScan, SelectionStrategy::BinaryHeap] {
            let engine = Dijkstra::new().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                &graph,
                |b, graph| b.iter(|| engine.run(black_box(graph), VertexId(0)).expect("run")),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
