pub mod generators;
pub mod traits;
pub mod undirected;
pub mod weight;

pub use traits::{EdgeId, Graph, MutableGraph, VertexId};
pub use undirected::UndirectedGraph;
pub use weight::{CostMode, EdgeCost, Weight};
