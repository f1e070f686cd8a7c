pub mod dijkstra;
pub mod result;

pub use dijkstra::{Dijkstra, DijkstraConfig, SelectionStrategy};
pub use result::{CostReport, DijkstraResult};
