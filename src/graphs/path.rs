use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

/// Distances and predecessors computed from a single source vertex.
///
/// `distances[v]` is `None` while `v` is unreached; `predecessors[v]` is
/// `None` for the source and for unreached vertices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    pub distances: Vec<Option<Weight>>,
    pub predecessors: Vec<Option<Vertex>>,
}

impl ShortestPathTree {
    /// Fresh tree where only the source is reached, at distance 0.
    pub fn with_source(number_of_vertices: usize, source: Vertex) -> ShortestPathTree {
        let mut tree = ShortestPathTree {
            distances: vec![None; number_of_vertices],
            predecessors: vec![None; number_of_vertices],
        };
        tree.distances[source as usize] = Some(0);

        tree
    }

    pub fn path(&self, source: Vertex, target: Vertex) -> Vec<Vertex> {
        reconstruct_path(&self.predecessors, source, target)
    }
}

/// Walks `predecessors` backwards from `target` and returns the vertices of
/// the path in source-to-target order.
///
/// Returns an empty sequence when the backward walk does not end at `source`,
/// which covers unreached targets, targets out of range and predecessor
/// arrays computed for a different source. `target == source` yields
/// `[source]`.
pub fn reconstruct_path(
    predecessors: &[Option<Vertex>],
    source: Vertex,
    target: Vertex,
) -> Vec<Vertex> {
    if target as usize >= predecessors.len() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(&Some(predecessor)) = predecessors.get(current as usize) {
        // A well-formed tree never revisits a vertex. Bail out instead of
        // cycling forever on a corrupt array.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        current = predecessor;
        path.push(current);
    }
    path.reverse();

    if path[0] != source {
        return Vec::new();
    }

    path
}

/// A source/target pair with the expected shortest-path distance, `None`
/// when the target is unreachable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub source: Vertex,
    pub target: Vertex,
    pub distance: Option<Weight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_to_the_source() {
        let predecessors = vec![None, Some(0), Some(0), Some(1)];
        assert_eq!(reconstruct_path(&predecessors, 0, 3), vec![0, 1, 3]);
    }

    #[test]
    fn target_equal_to_source_is_a_single_vertex() {
        let predecessors = vec![None, Some(0)];
        assert_eq!(reconstruct_path(&predecessors, 0, 0), vec![0]);
    }

    #[test]
    fn chain_not_reaching_the_source_is_no_path() {
        // 2 hangs off vertex 1, which was never reached from 0.
        let predecessors = vec![None, None, Some(1)];
        assert_eq!(reconstruct_path(&predecessors, 0, 2), Vec::<Vertex>::new());
    }

    #[test]
    fn target_out_of_range_is_no_path() {
        let predecessors = vec![None, Some(0)];
        assert_eq!(reconstruct_path(&predecessors, 0, 9), Vec::<Vertex>::new());
    }
}
