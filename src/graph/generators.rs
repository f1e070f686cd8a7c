use crate::graph::{MutableGraph, UndirectedGraph, VertexId, Weight};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Builds the six-vertex sample network A..F used by the demo and the tests.
///
/// Edges: A-B=4, A-C=5, B-C=11, B-E=7, C-E=3, B-D=9, F-D=2, E-D=13, E-F=6.
pub fn sample_network() -> Result<UndirectedGraph<String, Weight>> {
    let mut graph = UndirectedGraph::with_capacity(6, 9);

    let ids: Vec<VertexId> = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|label| graph.insert_vertex(label.to_string()))
        .collect();
    let (a, b, c, d, e, f) = (ids[0], ids[1], ids[2], ids[3], ids[4], ids[5]);

    graph.insert_edge(a, b, Weight::new("A-B", 4.0))?;
    graph.insert_edge(a, c, Weight::new("A-C", 5.0))?;
    graph.insert_edge(b, c, Weight::new("B-C", 11.0))?;
    graph.insert_edge(b, e, Weight::new("B-E", 7.0))?;
    graph.insert_edge(c, e, Weight::new("C-E", 3.0))?;
    graph.insert_edge(b, d, Weight::new("B-D", 9.0))?;
    graph.insert_edge(f, d, Weight::new("F-D", 2.0))?;
    graph.insert_edge(e, d, Weight::new("E-D", 13.0))?;
    graph.insert_edge(e, f, Weight::new("E-F", 6.0))?;

    Ok(graph)
}

/// Generates a random undirected graph with `n` vertices labelled `v0..`
/// and roughly `edge_factor * n` edges with costs in `[1, max_cost)`.
///
/// The same seed always yields the same graph. Self-loops are skipped,
/// parallel edges may occur.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    max_cost: f64,
    seed: u64,
) -> Result<UndirectedGraph<String, Weight>> {
    let num_edges = (edge_factor * n as f64) as usize;
    let mut graph = UndirectedGraph::with_capacity(n, num_edges);
    let mut rng = StdRng::seed_from_u64(seed);

    let ids: Vec<VertexId> = (0..n)
        .map(|i| graph.insert_vertex(format!("v{}", i)))
        .collect();

    if n < 2 {
        return Ok(graph);
    }

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let cost = rng.gen_range(1.0..max_cost.max(1.0 + f64::EPSILON));
            let name = format!("v{}-v{}", u, v);
            graph.insert_edge(ids[u], ids[v], Weight::new(name, cost))?;
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with unit-cost edges between 4-neighbours
pub fn generate_grid(width: usize, height: usize) -> Result<UndirectedGraph<String, Weight>> {
    let mut graph = UndirectedGraph::with_capacity(width * height, 2 * width * height);

    for y in 0..height {
        for x in 0..width {
            graph.insert_vertex(format!("({},{})", x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = VertexId(y * width + x);
            if x + 1 < width {
                let right = VertexId(y * width + x + 1);
                graph.insert_edge(vertex, right, Weight::new("h", 1.0))?;
            }
            if y + 1 < height {
                let below = VertexId((y + 1) * width + x);
                graph.insert_edge(vertex, below, Weight::new("v", 1.0))?;
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_sample_network_shape() {
        let g = sample_network().unwrap();
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.edge_count(), 9);
    }

    #[test]
    fn test_random_is_deterministic() {
        let g1 = generate_random(50, 3.0, 20.0, 7).unwrap();
        let g2 = generate_random(50, 3.0, 20.0, 7).unwrap();
        assert_eq!(g1.edge_count(), g2.edge_count());
        for v in g1.vertices() {
            assert_eq!(
                g1.incident_edges(v).collect::<Vec<_>>(),
                g2.incident_edges(v).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_grid_edges() {
        let g = generate_grid(4, 3).unwrap();
        assert_eq!(g.vertex_count(), 12);
        // 3 rows of 3 horizontal edges, 2 rows of 4 vertical edges
        assert_eq!(g.edge_count(), 9 + 8);
    }
}
