use ahash::{HashSet, HashSetExt};
use rand::{rngs::StdRng, Rng, SeedableRng};

use classic_paths::{
    graphs::{graph_functions::path_weight, Graph},
    search::{bellman_ford::bellman_ford, dijkstra::dijkstra, floyd_warshall::floyd_warshall},
};

/// Random graph with non-negative weights and neither self-loops nor
/// parallel edges, so every algorithm agrees on what an edge weighs.
fn random_simple_graph(rng: &mut StdRng) -> Graph {
    let number_of_vertices = rng.gen_range(2..=30);
    let directed = rng.gen_bool(0.5);
    let mut graph = Graph::new(number_of_vertices, directed).unwrap();

    let mut used = HashSet::new();
    for _ in 0..rng.gen_range(0..number_of_vertices * 3) {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if tail == head {
            continue;
        }
        let key = if directed {
            (tail, head)
        } else {
            (tail.min(head), tail.max(head))
        };
        if !used.insert(key) {
            continue;
        }
        graph.add_edge(tail, head, rng.gen_range(0..=20)).unwrap();
    }

    graph
}

#[test]
fn bellman_ford_agrees_with_dijkstra_on_random_nonnegative_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let graph = random_simple_graph(&mut rng);
        for source in 0..graph.number_of_vertices() {
            let dijkstra_tree = dijkstra(&graph, source).unwrap();
            let bellman_ford_tree = bellman_ford(&graph, source).unwrap();

            assert!(!bellman_ford_tree.negative_cycle);
            assert_eq!(bellman_ford_tree.tree.distances, dijkstra_tree.distances);
        }
    }
}

#[test]
fn floyd_warshall_agrees_with_dijkstra_on_random_nonnegative_graphs() {
    let mut rng = StdRng::seed_from_u64(0xf10d);

    for _ in 0..20 {
        let graph = random_simple_graph(&mut rng);
        let matrix = floyd_warshall(&graph);
        for source in 0..graph.number_of_vertices() {
            let tree = dijkstra(&graph, source).unwrap();
            assert_eq!(matrix[source as usize], tree.distances);
        }
    }
}

#[test]
fn reconstructed_paths_always_sum_to_their_distance() {
    let mut rng = StdRng::seed_from_u64(0x90a1);

    for _ in 0..50 {
        let graph = random_simple_graph(&mut rng);
        let tree = dijkstra(&graph, 0).unwrap();

        for target in 0..graph.number_of_vertices() {
            let path = tree.path(0, target);
            match tree.distances[target as usize] {
                Some(distance) => {
                    assert_eq!(path.first(), Some(&0));
                    assert_eq!(path.last(), Some(&target));
                    assert_eq!(path_weight(&graph, &path), Some(distance));
                }
                None => assert!(path.is_empty()),
            }
        }
    }
}
