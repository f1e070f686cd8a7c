use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::result::DijkstraResult;
use crate::data_structures::CostQueue;
use crate::graph::{CostMode, EdgeCost, EdgeId, Graph, VertexId};
use crate::{Error, Result};

/// Cost held by a vertex that no path has reached
pub const UNREACHED: f64 = f64::MAX;

/// Seed of the minimum search. Must stay strictly above [`UNREACHED`] so an
/// unreached vertex is still picked once every reachable one is visited.
const SEARCH_SEED: f64 = f64::INFINITY;

/// How the next unvisited vertex is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Scan every unvisited vertex each round, O(V^2)
    #[default]
    LinearScan,
    /// Pop from a binary heap, O((V + E) log V)
    BinaryHeap,
}

/// Serializable run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DijkstraConfig {
    pub cost_mode: CostMode,
    pub track_edges: bool,
    pub strategy: SelectionStrategy,
}

/// Classic Dijkstra's algorithm over an undirected graph
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra {
    /// Which edge cost is read during relaxation
    cost_mode: CostMode,
    /// Whether the edge used to reach each vertex is recorded
    track_edges: bool,
    /// How the next vertex is selected
    strategy: SelectionStrategy,
}

/// Per-run tables, indexed by the vertex's position in the graph enumeration
struct Tables {
    costs: Vec<f64>,
    predecessors: Vec<Option<usize>>,
    edges: Option<Vec<Option<EdgeId>>>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance reading the primary cost
    pub fn new() -> Self {
        Dijkstra::default()
    }

    pub fn from_config(config: &DijkstraConfig) -> Self {
        Dijkstra {
            cost_mode: config.cost_mode,
            track_edges: config.track_edges,
            strategy: config.strategy,
        }
    }

    /// Set which edge cost is used
    pub fn with_cost_mode(mut self, mode: CostMode) -> Self {
        self.cost_mode = mode;
        self
    }

    /// Enable or disable recording the edge used to reach each vertex
    pub fn with_edge_tracking(mut self, enabled: bool) -> Self {
        self.track_edges = enabled;
        self
    }

    /// Set the vertex selection strategy
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn cost_mode(&self) -> CostMode {
        self.cost_mode
    }

    pub fn tracks_edges(&self) -> bool {
        self.track_edges
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Compute minimum costs from `origin` to every vertex of `graph`.
    ///
    /// Fails only when the graph cannot resolve `origin` or one of its own
    /// edges. Costs are assumed non-negative.
    pub fn run<G>(&self, graph: &G, origin: VertexId) -> Result<DijkstraResult>
    where
        G: Graph,
        G::VertexElement: Display,
        G::EdgeElement: EdgeCost,
    {
        if !graph.contains_vertex(origin) {
            return Err(Error::VertexNotFound(origin.to_string()));
        }

        let vertices: Vec<VertexId> = graph.vertices().collect();
        let index: HashMap<VertexId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();
        let origin_index = *index
            .get(&origin)
            .ok_or_else(|| Error::VertexNotFound(origin.to_string()))?;

        let negative = count_negative_costs(graph, &vertices, self.cost_mode)?;
        if negative > 0 {
            warn!(
                "{} edges have a negative {:?} cost; results from {} are unspecified",
                negative, self.cost_mode, origin
            );
        }

        let n = vertices.len();
        debug!(
            "Dijkstra from {} over {} vertices ({:?}, {:?}, edge tracking: {})",
            origin, n, self.cost_mode, self.strategy, self.track_edges
        );

        let mut tables = Tables {
            costs: vec![UNREACHED; n],
            predecessors: vec![None; n],
            edges: if self.track_edges {
                Some(vec![None; n])
            } else {
                None
            },
        };
        tables.costs[origin_index] = 0.0;

        match self.strategy {
            SelectionStrategy::LinearScan => {
                self.linear_scan(graph, &vertices, &index, &mut tables)?
            }
            SelectionStrategy::BinaryHeap => {
                self.heap_scan(graph, &vertices, &index, origin_index, &mut tables)?
            }
        }

        let labels = vertices
            .iter()
            .map(|&v| graph.vertex_element(v).map(|e| e.to_string()))
            .collect::<Result<Vec<_>>>()?;

        let reached = tables.costs.iter().filter(|&&c| c != UNREACHED).count();
        debug!("Dijkstra from {} reached {} of {} vertices", origin, reached, n);

        Ok(DijkstraResult::new(
            origin_index,
            vertices,
            index,
            labels,
            tables.costs,
            tables.predecessors,
            tables.edges,
        ))
    }

    /// Run once from every vertex of the graph, in parallel.
    ///
    /// Results are returned in vertex enumeration order.
    pub fn run_from_all<G>(&self, graph: &G) -> Result<Vec<DijkstraResult>>
    where
        G: Graph + Sync,
        G::VertexElement: Display,
        G::EdgeElement: EdgeCost,
    {
        let origins: Vec<VertexId> = graph.vertices().collect();
        origins
            .par_iter()
            .map(|&origin| self.run(graph, origin))
            .collect()
    }

    fn linear_scan<G>(
        &self,
        graph: &G,
        vertices: &[VertexId],
        index: &HashMap<VertexId, usize>,
        tables: &mut Tables,
    ) -> Result<()>
    where
        G: Graph,
        G::EdgeElement: EdgeCost,
    {
        let mut unvisited: Vec<usize> = (0..vertices.len()).collect();

        while !unvisited.is_empty() {
            // Costs never exceed UNREACHED, which is below the seed, so this only
            // ends the loop if the unvisited set is empty
            let Some(position) = select_minimum(&tables.costs, &unvisited) else {
                break;
            };
            let current = unvisited.remove(position);
            trace!("Visiting {} at cost {}", vertices[current], tables.costs[current]);

            self.relax(graph, vertices, index, current, tables, |_, _| {})?;
        }

        Ok(())
    }

    fn heap_scan<G>(
        &self,
        graph: &G,
        vertices: &[VertexId],
        index: &HashMap<VertexId, usize>,
        origin_index: usize,
        tables: &mut Tables,
    ) -> Result<()>
    where
        G: Graph,
        G::EdgeElement: EdgeCost,
    {
        let mut visited = vec![false; vertices.len()];
        let mut queue = CostQueue::with_capacity(vertices.len());
        queue.push(origin_index, 0.0);

        while let Some((current, cost)) = queue.pop() {
            // Stale entry, a cheaper one for this vertex was already popped
            if visited[current] {
                continue;
            }
            visited[current] = true;
            trace!("Visiting {} at cost {}", vertices[current], cost);

            self.relax(graph, vertices, index, current, tables, |i, c| queue.push(i, c))?;
        }

        Ok(())
    }

    /// Relax every edge incident to `current`, calling `on_update` for each
    /// neighbour whose cost dropped.
    fn relax<G, F>(
        &self,
        graph: &G,
        vertices: &[VertexId],
        index: &HashMap<VertexId, usize>,
        current: usize,
        tables: &mut Tables,
        mut on_update: F,
    ) -> Result<()>
    where
        G: Graph,
        G::EdgeElement: EdgeCost,
        F: FnMut(usize, f64),
    {
        let vertex = vertices[current];

        for edge in graph.incident_edges(vertex) {
            let neighbor = graph.opposite(vertex, edge)?;
            let neighbor_index = *index
                .get(&neighbor)
                .ok_or_else(|| Error::VertexNotFound(neighbor.to_string()))?;

            let weight = graph.edge_element(edge)?.cost(self.cost_mode);

            let new_cost = tables.costs[current] + weight;
            if new_cost < tables.costs[neighbor_index] {
                trace!("Relaxed {} via {} to {}", neighbor, edge, new_cost);
                tables.costs[neighbor_index] = new_cost;
                tables.predecessors[neighbor_index] = Some(current);
                if let Some(edges) = tables.edges.as_mut() {
                    edges[neighbor_index] = Some(edge);
                }
                on_update(neighbor_index, new_cost);
            }
        }

        Ok(())
    }
}

/// Number of distinct edges whose cost under `mode` is negative
fn count_negative_costs<G>(graph: &G, vertices: &[VertexId], mode: CostMode) -> Result<usize>
where
    G: Graph,
    G::EdgeElement: EdgeCost,
{
    let mut negative = HashSet::new();
    for &vertex in vertices {
        for edge in graph.incident_edges(vertex) {
            if graph.edge_element(edge)?.cost(mode) < 0.0 {
                negative.insert(edge);
            }
        }
    }
    Ok(negative.len())
}

/// Position in `unvisited` of the first vertex with the strictly lowest cost
fn select_minimum(costs: &[f64], unvisited: &[usize]) -> Option<usize> {
    let mut min_cost = SEARCH_SEED;
    let mut selected = None;

    for (position, &u) in unvisited.iter().enumerate() {
        if costs[u] < min_cost {
            min_cost = costs[u];
            selected = Some(position);
        }
    }

    selected
}

/// Run with the primary cost and no edge tracking
pub fn dijkstra<G>(graph: &G, origin: VertexId) -> Result<DijkstraResult>
where
    G: Graph,
    G::VertexElement: Display,
    G::EdgeElement: EdgeCost,
{
    Dijkstra::new().run(graph, origin)
}

/// Run with the given cost mode
pub fn dijkstra_with_cost<G>(graph: &G, origin: VertexId, mode: CostMode) -> Result<DijkstraResult>
where
    G: Graph,
    G::VertexElement: Display,
    G::EdgeElement: EdgeCost,
{
    Dijkstra::new().with_cost_mode(mode).run(graph, origin)
}

/// Run with the primary cost, recording the edge used to reach each vertex
pub fn dijkstra_edges<G>(graph: &G, origin: VertexId) -> Result<DijkstraResult>
where
    G: Graph,
    G::VertexElement: Display,
    G::EdgeElement: EdgeCost,
{
    Dijkstra::new().with_edge_tracking(true).run(graph, origin)
}
