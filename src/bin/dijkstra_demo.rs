use std::env;

use weighted_dijkstra::graph::generators::sample_network;
use weighted_dijkstra::{CostMode, Dijkstra, Graph, UndirectedGraph, VertexId, Weight};

fn describe(graph: &UndirectedGraph<String, Weight>, path: &[VertexId]) -> String {
    path.iter()
        .filter_map(|&v| graph.vertex_element(v).ok().cloned())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [origin] [destination] [--json]
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let mut positional = args.iter().filter(|a| !a.starts_with("--"));
    let origin_label = positional.next().cloned().unwrap_or_else(|| "C".to_string());
    let destination_label = positional.next().cloned().unwrap_or_else(|| "D".to_string());

    let graph = sample_network()?;
    let origin = graph.find_vertex(&origin_label)?;
    let destination = graph.find_vertex(&destination_label)?;

    if !json {
        println!("{}", graph);
    }

    for (title, mode) in [
        ("Minimum cost path", CostMode::Cost),
        ("Shortest path", CostMode::ShortestPath),
    ] {
        let result = Dijkstra::new()
            .with_cost_mode(mode)
            .with_edge_tracking(true)
            .run(&graph, origin)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&result.report())?);
            continue;
        }

        println!("{}", result);
        match result.minimum_cost_path_to(destination) {
            Ok(path) => println!(
                "{} ({} -> {}): {} with cost {:.2}\n",
                title,
                origin_label,
                destination_label,
                describe(&graph, &path),
                result.minimum_cost_to(destination)?
            ),
            Err(e) => println!("{} ({} -> {}): {}\n", title, origin_label, destination_label, e),
        }
    }

    Ok(())
}
