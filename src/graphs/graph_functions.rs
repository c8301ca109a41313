use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rand::prelude::*;
use rayon::prelude::*;

use super::{path::ShortestPathTestCase, Graph, Vertex, Weight};
use crate::search::dijkstra::dijkstra;

/// Total weight of a path, resolving each consecutive pair through the
/// graph. `None` when some pair is not an edge. An empty or single-vertex
/// path weighs 0.
pub fn path_weight(graph: &Graph, path: &[Vertex]) -> Option<Weight> {
    path.iter()
        .tuple_windows()
        .map(|(&tail, &head)| graph.edge_weight(tail, head))
        .sum()
}

/// Random source/target pair with source != target. `None` when the graph
/// is too small for such a pair.
pub fn random_request(graph: &Graph, rng: &mut ThreadRng) -> Option<(Vertex, Vertex)> {
    if graph.number_of_vertices() <= 1 {
        return None;
    }

    // guarantee that source != target
    let source = rng.gen_range(0..graph.number_of_vertices());
    let mut target = rng.gen_range(0..graph.number_of_vertices() - 1);
    if target >= source {
        target += 1;
    }

    Some((source, target))
}

/// Expected-distance test cases for random vertex pairs, one Dijkstra run
/// per pair, fanned out over all cores. Edge weights must be non-negative,
/// as for [`dijkstra`] itself.
pub fn generate_random_pair_test_cases(
    graph: &Graph,
    number_of_test_cases: u32,
) -> Vec<ShortestPathTestCase> {
    (0..number_of_test_cases)
        .into_par_iter()
        .progress_count(number_of_test_cases as u64)
        .map_init(rand::thread_rng, |rng, _| {
            let (source, target) = random_request(graph, rng).unwrap_or((0, 0));
            let tree = dijkstra(graph, source).unwrap();

            ShortestPathTestCase {
                source,
                target,
                distance: tree.distances[target as usize],
            }
        })
        .collect()
}
