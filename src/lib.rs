//! Weighted Dijkstra - minimum-cost paths over weighted undirected graphs
//!
//! This library runs Dijkstra's single-source algorithm over an undirected graph
//! whose edges carry a [`Weight`], and hands back a [`DijkstraResult`] that can be
//! queried for minimum costs, vertex paths and edge paths.
//!
//! The cost read from each edge is selected per run through a [`CostMode`], and the
//! unvisited-vertex selection can be a linear scan or a binary heap; both produce
//! the same tables.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{dijkstra, dijkstra_edges, dijkstra_with_cost, Dijkstra, DijkstraConfig, SelectionStrategy},
    result::{CostReport, DijkstraResult},
};
/// Re-export main types for convenient use
pub use graph::{CostMode, EdgeCost, EdgeId, Graph, MutableGraph, UndirectedGraph, VertexId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No path to vertex {0}")]
    NoPath(String),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(usize),

    #[error("Edge tracking was not enabled for this run")]
    EdgesNotTracked,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
