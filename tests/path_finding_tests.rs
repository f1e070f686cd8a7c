use weighted_dijkstra::graph::generators::{generate_grid, generate_random};
use weighted_dijkstra::{
    CostMode, Dijkstra, DijkstraConfig, Graph, SelectionStrategy, UndirectedGraph, VertexId, Weight,
};

fn assert_close(a: f64, b: f64) {
    assert!(
        (a - b).abs() <= 1e-9 * a.abs().max(1.0),
        "expected {} to be close to {}",
        a,
        b
    );
}

// Every reported path must be a walk along existing edges whose cost sum is the reported cost
fn check_paths(graph: &UndirectedGraph<String, Weight>, origin: VertexId) {
    let result = Dijkstra::new()
        .with_edge_tracking(true)
        .run(graph, origin)
        .unwrap();

    for destination in graph.vertices() {
        if !result.has_path_to(destination) {
            continue;
        }

        let path = result.minimum_cost_path_to(destination).unwrap();
        let edges = result.minimum_cost_path_edges_to(destination).unwrap();
        assert_eq!(path[0], origin, "Path should start at origin");
        assert_eq!(path[path.len() - 1], destination, "Path should end at destination");
        assert_eq!(edges.len(), path.len() - 1);

        let mut total = 0.0;
        for (i, edge) in edges.iter().enumerate() {
            assert!(
                graph.are_adjacent(path[i], path[i + 1]),
                "Path should only use existing edges"
            );
            assert_eq!(graph.opposite(path[i], *edge).unwrap(), path[i + 1]);
            total += graph.edge_element(*edge).unwrap().primary_cost();
        }
        assert_close(result.minimum_cost_to(destination).unwrap(), total);
    }
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10).unwrap();
    let source = VertexId(0);
    let target = VertexId(99);

    let result = Dijkstra::new().run(&graph, source).unwrap();

    // Manhattan distance on a unit grid
    assert_eq!(result.minimum_cost_to(target).unwrap(), 18.0);
    assert_eq!(result.minimum_cost_path_to(target).unwrap().len(), 19);

    check_paths(&graph, source);
}

#[test]
fn test_paths_on_random_graphs() {
    for seed in 0..5 {
        let graph = generate_random(60, 1.5, 50.0, seed).unwrap();
        check_paths(&graph, VertexId(0));
        check_paths(&graph, VertexId(17));
    }
}

#[test]
fn test_strategies_agree() {
    let graphs = vec![
        generate_grid(8, 6).unwrap(),
        generate_random(120, 2.0, 30.0, 3).unwrap(),
        generate_random(80, 0.6, 10.0, 11).unwrap(),
    ];

    for graph in &graphs {
        for mode in [CostMode::Cost, CostMode::ShortestPath] {
            let linear = Dijkstra::new()
                .with_cost_mode(mode)
                .with_edge_tracking(true)
                .with_strategy(SelectionStrategy::LinearScan);
            let heap = linear.with_strategy(SelectionStrategy::BinaryHeap);

            for origin in [VertexId(0), VertexId(5)] {
                let a = linear.run(graph, origin).unwrap();
                let b = heap.run(graph, origin).unwrap();

                assert_eq!(a.report(), b.report());
                assert_eq!(a.predecessors(), b.predecessors());
                for v in graph.vertices() {
                    assert_eq!(a.edge_to(v), b.edge_to(v));
                }
            }
        }
    }
}

#[test]
fn test_symmetric_costs_on_random_graph() {
    let graph = generate_random(40, 2.5, 25.0, 42).unwrap();
    let results = Dijkstra::new().run_from_all(&graph).unwrap();

    assert_eq!(results.len(), graph.vertex_count());
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.origin(), VertexId(i));
    }

    for u in graph.vertices() {
        for v in graph.vertices() {
            let forward = results[u.0].cost_of(v);
            let backward = results[v.0].cost_of(u);
            match (forward, backward) {
                (Some(f), Some(b)) => assert_close(f, b),
                (None, None) => {}
                other => panic!("Reachability differs between {} and {}: {:?}", u, v, other),
            }
        }
    }
}

#[test]
fn test_engine_from_config() {
    let graph = generate_grid(5, 5).unwrap();
    let config = DijkstraConfig {
        cost_mode: CostMode::ShortestPath,
        track_edges: true,
        strategy: SelectionStrategy::BinaryHeap,
    };

    let result = Dijkstra::from_config(&config).run(&graph, VertexId(0)).unwrap();

    assert!(result.tracks_edges());
    assert_eq!(result.minimum_cost_to(VertexId(24)).unwrap(), 8.0);
    assert_eq!(result.minimum_cost_path_edges_to(VertexId(24)).unwrap().len(), 8);
}
