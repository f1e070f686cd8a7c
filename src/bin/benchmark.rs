use std::time::{Duration, Instant};
use weighted_dijkstra::graph::generators::generate_random;
use weighted_dijkstra::{Dijkstra, Graph, SelectionStrategy, UndirectedGraph, VertexId, Weight};

// Function to benchmark a selection strategy on a graph
fn benchmark_strategy(
    strategy: SelectionStrategy,
    graph: &UndirectedGraph<String, Weight>,
    origin: VertexId,
) -> Duration {
    println!("Running {:?} on graph with {} vertices...", strategy, graph.vertex_count());

    let engine = Dijkstra::new().with_strategy(strategy);
    let start = Instant::now();
    let result = match engine.run(graph, origin) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("  - Run failed: {}", e);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    // Count reachable vertices
    let reachable = graph.vertices().filter(|&v| result.cost_of(v).is_some()).count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    duration
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The linear scan is quadratic, keep sizes modest
    let graph_sizes = vec![500, 1_000, 2_000, 5_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: linear scan vs binary heap selection");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, 100.0, size as u64)?;
        let origin = VertexId(0);

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let linear_time = benchmark_strategy(SelectionStrategy::LinearScan, &graph, origin);
        let heap_time = benchmark_strategy(SelectionStrategy::BinaryHeap, &graph, origin);

        results.push((size, linear_time, heap_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Linear (ms)", "Heap (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, linear_time, heap_time) in &results {
        let speedup = linear_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);

        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<10.2}",
            size,
            linear_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            speedup
        );
    }

    Ok(())
}
