use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Opaque identity of a vertex inside a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

/// Opaque identity of an edge inside a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Trait representing an undirected graph whose vertices and edges carry elements.
///
/// Vertices and edges are addressed by identity ([`VertexId`], [`EdgeId`]); two
/// vertices holding equal elements are still distinct vertices.
pub trait Graph: Debug {
    /// Element stored on each vertex
    type VertexElement;

    /// Element stored on each edge
    type EdgeElement;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices, always in the same order
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over the edges touching a vertex
    fn incident_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Returns the endpoint of `edge` that is not `vertex`
    fn opposite(&self, vertex: VertexId, edge: EdgeId) -> Result<VertexId>;

    /// Returns the element stored on a vertex
    fn vertex_element(&self, vertex: VertexId) -> Result<&Self::VertexElement>;

    /// Returns the element stored on an edge
    fn edge_element(&self, edge: EdgeId) -> Result<&Self::EdgeElement>;

    /// Returns true if the vertex exists in the graph
    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Finds the first vertex (in enumeration order) holding `element`
    fn find_vertex(&self, element: &Self::VertexElement) -> Result<VertexId>
    where
        Self::VertexElement: PartialEq + Display,
    {
        self.vertices()
            .find(|&v| matches!(self.vertex_element(v), Ok(e) if e == element))
            .ok_or_else(|| Error::VertexNotFound(element.to_string()))
    }
}

/// Trait for building a graph
pub trait MutableGraph: Graph {
    /// Adds a vertex holding `element` and returns its ID
    fn insert_vertex(&mut self, element: Self::VertexElement) -> VertexId;

    /// Adds an undirected edge between two existing vertices.
    ///
    /// Parallel edges between the same pair are kept as distinct edges.
    fn insert_edge(&mut self, u: VertexId, v: VertexId, element: Self::EdgeElement) -> Result<EdgeId>;
}
