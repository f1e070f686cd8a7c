use crate::graph::traits::{EdgeId, Graph, MutableGraph, VertexId};
use crate::{Error, Result};
use std::fmt::{self, Debug, Display};

/// An edge as stored by [`UndirectedGraph`]
#[derive(Debug, Clone)]
struct StoredEdge<E> {
    endpoints: (VertexId, VertexId),
    element: E,
}

/// An undirected graph implementation using an edge list plus per-vertex incidence lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, E> {
    /// Vertex elements, indexed by vertex ID
    vertices: Vec<V>,

    /// Edges, indexed by edge ID
    edges: Vec<StoredEdge<E>>,

    /// Incident edges for each vertex, in insertion order
    incidence: Vec<Vec<EdgeId>>,
}

impl<V, E> UndirectedGraph<V, E> {
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            incidence: Vec::new(),
        }
    }

    /// Creates a new graph with room for the given number of vertices and edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        UndirectedGraph {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            incidence: Vec::with_capacity(vertices),
        }
    }

    /// Returns both endpoints of an edge
    pub fn endpoints(&self, edge: EdgeId) -> Result<(VertexId, VertexId)> {
        self.edges
            .get(edge.0)
            .map(|e| e.endpoints)
            .ok_or(Error::EdgeNotFound(edge.0))
    }

    /// Returns true if at least one edge joins `u` and `v`
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.incidence.get(u.0).map_or(false, |edges| {
            edges.iter().any(|e| {
                let (a, b) = self.edges[e.0].endpoints;
                (a == u && b == v) || (a == v && b == u)
            })
        })
    }
}

impl<V, E> Default for UndirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug, E: Debug> Graph for UndirectedGraph<V, E> {
    type VertexElement = V;
    type EdgeElement = E;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertices.len()).map(VertexId))
    }

    fn incident_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        if let Some(edges) = self.incidence.get(vertex.0) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn opposite(&self, vertex: VertexId, edge: EdgeId) -> Result<VertexId> {
        let (a, b) = self.endpoints(edge)?;
        if vertex == a {
            Ok(b)
        } else if vertex == b {
            Ok(a)
        } else {
            Err(Error::VertexNotFound(format!("{} is not an endpoint of {}", vertex, edge)))
        }
    }

    fn vertex_element(&self, vertex: VertexId) -> Result<&V> {
        self.vertices
            .get(vertex.0)
            .ok_or_else(|| Error::VertexNotFound(vertex.to_string()))
    }

    fn edge_element(&self, edge: EdgeId) -> Result<&E> {
        self.edges
            .get(edge.0)
            .map(|e| &e.element)
            .ok_or(Error::EdgeNotFound(edge.0))
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.0 < self.vertices.len()
    }
}

impl<V: Debug, E: Debug> MutableGraph for UndirectedGraph<V, E> {
    fn insert_vertex(&mut self, element: V) -> VertexId {
        let new_id = VertexId(self.vertices.len());
        self.vertices.push(element);
        self.incidence.push(Vec::new());
        new_id
    }

    fn insert_edge(&mut self, u: VertexId, v: VertexId, element: E) -> Result<EdgeId> {
        for endpoint in [u, v] {
            if !self.contains_vertex(endpoint) {
                return Err(Error::VertexNotFound(endpoint.to_string()));
            }
        }

        let new_id = EdgeId(self.edges.len());
        self.edges.push(StoredEdge {
            endpoints: (u, v),
            element,
        });

        self.incidence[u.0].push(new_id);
        // A self-loop is incident to its vertex once
        if u != v {
            self.incidence[v.0].push(new_id);
        }

        Ok(new_id)
    }
}

impl<V: Display, E: Display> Display for UndirectedGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices and {} edges",
            self.vertices.len(),
            self.edges.len()
        )?;
        writeln!(f, "--- Vertices:")?;
        for v in &self.vertices {
            writeln!(f, "\t{}", v)?;
        }
        writeln!(f, "--- Edges:")?;
        for e in &self.edges {
            let (a, b) = e.endpoints;
            writeln!(
                f,
                "\t{} -- {} : {}",
                self.vertices[a.0], self.vertices[b.0], e.element
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Weight;

    #[test]
    fn test_opposite_and_incidence() {
        let mut g: UndirectedGraph<&str, Weight> = UndirectedGraph::new();
        let a = g.insert_vertex("A");
        let b = g.insert_vertex("B");
        let c = g.insert_vertex("C");
        let ab = g.insert_edge(a, b, Weight::new("A-B", 4.0)).unwrap();
        let ab2 = g.insert_edge(a, b, Weight::new("A-B other", 1.0)).unwrap();

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.opposite(a, ab).unwrap(), b);
        assert_eq!(g.opposite(b, ab2).unwrap(), a);
        assert!(g.opposite(c, ab).is_err());
        assert_eq!(g.incident_edges(a).collect::<Vec<_>>(), vec![ab, ab2]);
        assert_eq!(g.incident_edges(c).count(), 0);
        assert!(g.are_adjacent(b, a));
        assert!(!g.are_adjacent(a, c));
    }

    #[test]
    fn test_insert_edge_unknown_vertex() {
        let mut g: UndirectedGraph<&str, f64> = UndirectedGraph::new();
        let a = g.insert_vertex("A");
        let err = g.insert_edge(a, VertexId(7), 1.0).unwrap_err();
        assert_eq!(err, Error::VertexNotFound("v7".to_string()));
    }

    #[test]
    fn test_find_vertex_by_element() {
        let mut g: UndirectedGraph<String, f64> = UndirectedGraph::new();
        g.insert_vertex("A".to_string());
        let b = g.insert_vertex("B".to_string());
        assert_eq!(g.find_vertex(&"B".to_string()).unwrap(), b);
        assert!(matches!(
            g.find_vertex(&"Z".to_string()),
            Err(Error::VertexNotFound(ref e)) if e == "Z"
        ));
    }

    #[test]
    fn test_self_loop_incident_once() {
        let mut g: UndirectedGraph<&str, f64> = UndirectedGraph::new();
        let a = g.insert_vertex("A");
        let loop_edge = g.insert_edge(a, a, 2.0).unwrap();
        assert_eq!(g.incident_edges(a).count(), 1);
        assert_eq!(g.opposite(a, loop_edge).unwrap(), a);
    }
}
