use std::collections::HashMap;
use std::fmt::{self, Display};

use log::warn;
use serde::Serialize;

use crate::algorithm::dijkstra::UNREACHED;
use crate::graph::{EdgeId, VertexId};
use crate::{Error, Result};

/// Outcome of one Dijkstra run.
///
/// Holds the origin together with the cost, predecessor and (optionally) edge
/// tables as they stood when the run finished. The tables cover every vertex
/// the graph enumerated, reachable or not.
///
/// A destination counts as having a path only when a predecessor was recorded
/// for it. The origin has none, so querying a path to the origin itself yields
/// [`Error::NoPath`].
#[derive(Debug, Clone)]
pub struct DijkstraResult {
    origin: usize,
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    labels: Vec<String>,
    costs: Vec<f64>,
    predecessors: Vec<Option<usize>>,
    edges: Option<Vec<Option<EdgeId>>>,
}

/// One row of a result, as exported by [`DijkstraResult::report`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    pub vertex: String,
    /// `None` when the vertex was never reached
    pub cost: Option<f64>,
    pub predecessor: Option<String>,
}

impl DijkstraResult {
    pub(crate) fn new(
        origin: usize,
        vertices: Vec<VertexId>,
        index: HashMap<VertexId, usize>,
        labels: Vec<String>,
        costs: Vec<f64>,
        predecessors: Vec<Option<usize>>,
        edges: Option<Vec<Option<EdgeId>>>,
    ) -> Self {
        debug_assert!(!costs.is_empty(), "costs cannot be empty");
        debug_assert_eq!(costs.len(), predecessors.len());
        debug_assert_eq!(costs.len(), vertices.len());
        debug_assert_eq!(costs.len(), labels.len());

        DijkstraResult {
            origin,
            vertices,
            index,
            labels,
            costs,
            predecessors,
            edges,
        }
    }

    /// The origin vertex of this run
    pub fn origin(&self) -> VertexId {
        self.vertices[self.origin]
    }

    /// Returns the minimum cost to `destination`
    pub fn minimum_cost_to(&self, destination: VertexId) -> Result<f64> {
        let i = self.verify_path_existence(destination)?;
        Ok(self.costs[i])
    }

    /// Returns the minimum cost path to `destination`, origin first
    pub fn minimum_cost_path_to(&self, destination: VertexId) -> Result<Vec<VertexId>> {
        let i = self.verify_path_existence(destination)?;

        let mut path = vec![self.vertices[i]];
        let mut current = i;
        while let Some(predecessor) = self.predecessors[current] {
            path.push(self.vertices[predecessor]);
            current = predecessor;
            if path.len() > self.vertices.len() {
                return Err(self.broken_chain(i));
            }
        }
        path.reverse();

        Ok(path)
    }

    /// Returns the edges of the minimum cost path to `destination`, origin side first.
    ///
    /// Only available when the run tracked edges.
    pub fn minimum_cost_path_edges_to(&self, destination: VertexId) -> Result<Vec<EdgeId>> {
        let edges = self.edges.as_ref().ok_or(Error::EdgesNotTracked)?;
        let i = self.verify_path_existence(destination)?;

        let mut path_edges = Vec::new();
        let mut current = i;
        while let Some(predecessor) = self.predecessors[current] {
            let edge = edges[current].ok_or_else(|| self.broken_chain(i))?;
            path_edges.push(edge);
            current = predecessor;
            if path_edges.len() >= self.vertices.len() {
                return Err(self.broken_chain(i));
            }
        }
        path_edges.reverse();

        Ok(path_edges)
    }

    /// True when a predecessor was recorded for `destination`
    pub fn has_path_to(&self, destination: VertexId) -> bool {
        self.verify_path_existence(destination).is_ok()
    }

    /// Final cost of `vertex`, `None` if it was never reached or is unknown
    pub fn cost_of(&self, vertex: VertexId) -> Option<f64> {
        self.index
            .get(&vertex)
            .map(|&i| self.costs[i])
            .filter(|&c| c != UNREACHED)
    }

    /// Predecessor of `vertex` in the shortest-path tree
    pub fn predecessor_of(&self, vertex: VertexId) -> Option<VertexId> {
        self.index
            .get(&vertex)
            .and_then(|&i| self.predecessors[i])
            .map(|p| self.vertices[p])
    }

    /// Edge used to reach `vertex`, when the run tracked edges
    pub fn edge_to(&self, vertex: VertexId) -> Option<EdgeId> {
        let edges = self.edges.as_ref()?;
        self.index.get(&vertex).and_then(|&i| edges[i])
    }

    /// True when the run recorded the edge used to reach each vertex
    pub fn tracks_edges(&self) -> bool {
        self.edges.is_some()
    }

    /// Predecessor table as (vertex, predecessor) pairs in enumeration order
    pub fn predecessors(&self) -> Vec<(VertexId, Option<VertexId>)> {
        self.vertices
            .iter()
            .zip(&self.predecessors)
            .map(|(&v, p)| (v, p.map(|p| self.vertices[p])))
            .collect()
    }

    /// Edge table as (vertex, edge used to reach it) pairs in enumeration order,
    /// `None` when the run did not track edges
    pub fn edges(&self) -> Option<Vec<(VertexId, Option<EdgeId>)>> {
        let edges = self.edges.as_ref()?;
        Some(self.vertices.iter().copied().zip(edges.iter().copied()).collect())
    }

    /// Rows sorted by vertex label
    pub fn report(&self) -> Vec<CostReport> {
        self.sorted_positions()
            .into_iter()
            .map(|i| CostReport {
                vertex: self.labels[i].clone(),
                cost: Some(self.costs[i]).filter(|&c| c != UNREACHED),
                predecessor: self.predecessors[i].map(|p| self.labels[p].clone()),
            })
            .collect()
    }

    fn verify_path_existence(&self, destination: VertexId) -> Result<usize> {
        let i = *self
            .index
            .get(&destination)
            .ok_or_else(|| Error::VertexNotFound(destination.to_string()))?;

        if self.predecessors[i].is_none() {
            return Err(Error::NoPath(self.labels[i].clone()));
        }
        Ok(i)
    }

    fn broken_chain(&self, destination: usize) -> Error {
        warn!(
            "Predecessor chain to {} does not lead back to the origin",
            self.labels[destination]
        );
        Error::NoPath(self.labels[destination].clone())
    }

    fn sorted_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.vertices.len()).collect();
        positions.sort_by(|&a, &b| self.labels[a].cmp(&self.labels[b]));
        positions
    }
}

impl Display for DijkstraResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>15} | {:>15} | {:>15}", "Vertex", "Cost", "Predecessor")?;

        for i in self.sorted_positions() {
            let cost = self.costs[i];
            let cost_str = if cost != UNREACHED {
                format!("{:.2}", cost)
            } else {
                "∞".to_string()
            };
            let predecessor = match self.predecessors[i] {
                Some(p) => self.labels[p].as_str(),
                None => "<null>",
            };

            writeln!(f, "{:>15} | {:>15} | {:>15}", self.labels[i], cost_str, predecessor)?;
        }

        Ok(())
    }
}
