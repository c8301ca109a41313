use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::edge::{TaillessEdge, WeightedEdge};

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod path;

pub type Vertex = u32;
pub type Weight = i64;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("a graph needs at least one vertex")]
    EmptyGraph,
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },
}

/// A weighted graph with a fixed vertex set.
///
/// Edges are kept twice: once in insertion order, which Bellman-Ford and
/// Floyd-Warshall scan, and once grouped by tail vertex for Dijkstra. For an
/// undirected graph the edge list stores each edge once while the adjacency
/// lists contain both directions.
#[derive(Clone, Serialize, Deserialize)]
pub struct Graph {
    number_of_vertices: u32,
    directed: bool,
    edges: Vec<WeightedEdge>,
    out_edges: Vec<Vec<TaillessEdge>>,
}

impl Graph {
    pub fn new(number_of_vertices: u32, directed: bool) -> Result<Graph, GraphError> {
        if number_of_vertices == 0 {
            return Err(GraphError::EmptyGraph);
        }

        Ok(Graph {
            number_of_vertices,
            directed,
            edges: Vec::new(),
            out_edges: vec![Vec::new(); number_of_vertices as usize],
        })
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.number_of_vertices
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Appends an edge. Never merges parallel edges, they simply pile up in
    /// insertion order.
    pub fn add_edge(&mut self, tail: Vertex, head: Vertex, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;

        self.edges.push(WeightedEdge::new(tail, head, weight));
        self.out_edges[tail as usize].push(TaillessEdge::new(head, weight));

        if !self.directed {
            self.out_edges[head as usize].push(TaillessEdge::new(tail, weight));
        }

        Ok(())
    }

    /// Edges in insertion order. For an undirected graph each edge appears
    /// once, in the orientation it was added with.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn out_edges(&self, tail: Vertex) -> impl ExactSizeIterator<Item = WeightedEdge> + '_ {
        self.out_edges[tail as usize]
            .iter()
            .map(move |tailless_edge| tailless_edge.set_tail(tail))
    }

    /// Weight of the first matching edge from `tail` to `head`, if any.
    pub fn edge_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight> {
        self.out_edges
            .get(tail as usize)?
            .iter()
            .find(|tailless_edge| tailless_edge.head() == head)
            .map(|tailless_edge| tailless_edge.weight())
    }

    pub(crate) fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex >= self.number_of_vertices {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                number_of_vertices: self.number_of_vertices,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_is_rejected() {
        assert_eq!(Graph::new(0, false).err(), Some(GraphError::EmptyGraph));
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        let mut graph = Graph::new(3, true).unwrap();
        assert_eq!(
            graph.add_edge(0, 3, 1).err(),
            Some(GraphError::VertexOutOfRange {
                vertex: 3,
                number_of_vertices: 3
            })
        );
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn undirected_adjacency_is_mirrored() {
        let mut graph = Graph::new(2, false).unwrap();
        graph.add_edge(0, 1, 7).unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edge_weight(0, 1), Some(7));
        assert_eq!(graph.edge_weight(1, 0), Some(7));
    }

    #[test]
    fn directed_adjacency_is_one_way() {
        let mut graph = Graph::new(2, true).unwrap();
        graph.add_edge(0, 1, 7).unwrap();

        assert_eq!(graph.edge_weight(0, 1), Some(7));
        assert_eq!(graph.edge_weight(1, 0), None);
    }

    #[test]
    fn edges_keep_insertion_order() {
        let mut graph = Graph::new(3, true).unwrap();
        graph.add_edge(2, 0, 5).unwrap();
        graph.add_edge(0, 1, 3).unwrap();

        let endpoints: Vec<_> = graph
            .edges()
            .iter()
            .map(|edge| (edge.tail(), edge.head(), edge.weight()))
            .collect();
        assert_eq!(endpoints, vec![(2, 0, 5), (0, 1, 3)]);
    }
}
