use crate::graphs::{edge::WeightedEdge, path::ShortestPathTree, Graph, GraphError, Vertex, Weight};

/// Result of a Bellman-Ford run.
///
/// `negative_cycle` gates the meaning of `tree`: when it is true, a negative
/// cycle reachable from the source exists, and the distances and
/// predecessors are the in-progress state at detection time. They still tell
/// which vertices are reachable but must not be used as shortest distances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BellmanFordTree {
    pub tree: ShortestPathTree,
    pub negative_cycle: bool,
}

/// Single-source shortest paths tolerating negative edge weights.
///
/// Runs `V - 1` rounds over the edge list in insertion order. For an
/// undirected graph every stored edge is relaxed in both directions. A final
/// scan over the edges decides whether a negative cycle is reachable from
/// the source. Cost is O(V * E).
pub fn bellman_ford(graph: &Graph, source: Vertex) -> Result<BellmanFordTree, GraphError> {
    graph.check_vertex(source)?;

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut tree = ShortestPathTree::with_source(number_of_vertices, source);

    for _round in 1..graph.number_of_vertices() {
        for edge in graph.edges() {
            relax(&mut tree, edge);
            if !graph.is_directed() {
                relax(&mut tree, &edge.reversed());
            }
        }
    }

    let negative_cycle = graph.edges().iter().any(|edge| {
        can_improve(&tree, edge) || (!graph.is_directed() && can_improve(&tree, &edge.reversed()))
    });

    Ok(BellmanFordTree {
        tree,
        negative_cycle,
    })
}

fn relax(tree: &mut ShortestPathTree, edge: &WeightedEdge) {
    if let Some(base) = tree.distances[edge.tail() as usize] {
        let alternative = base + edge.weight();
        if alternative < tree.distances[edge.head() as usize].unwrap_or(Weight::MAX) {
            tree.distances[edge.head() as usize] = Some(alternative);
            tree.predecessors[edge.head() as usize] = Some(edge.tail());
        }
    }
}

fn can_improve(tree: &ShortestPathTree, edge: &WeightedEdge) -> bool {
    tree.distances[edge.tail() as usize].is_some_and(|base| {
        base + edge.weight() < tree.distances[edge.head() as usize].unwrap_or(Weight::MAX)
    })
}
