use crate::{
    graphs::{path::ShortestPathTree, Graph, GraphError, Vertex, Weight},
    queue::{heap_queue::HeapQueue, DijkstraQueue, DijkstraQueueElement},
};

/// Single-source shortest paths for graphs whose edge weights are all
/// non-negative.
///
/// The non-negativity is a caller responsibility and is not checked here;
/// with negative weights the returned distances can be wrong. Use
/// [`bellman_ford`](crate::search::bellman_ford::bellman_ford) for such
/// graphs.
pub fn dijkstra(graph: &Graph, source: Vertex) -> Result<ShortestPathTree, GraphError> {
    graph.check_vertex(source)?;

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut tree = ShortestPathTree::with_source(number_of_vertices, source);
    let mut settled = vec![false; number_of_vertices];

    let mut queue = HeapQueue::new();
    queue.push(DijkstraQueueElement::new(0, source));

    while let Some(DijkstraQueueElement { vertex, .. }) = queue.pop() {
        // A vertex can sit in the queue several times under stale keys.
        // Entries popped after the vertex settled are skipped.
        if settled[vertex as usize] {
            continue;
        }
        settled[vertex as usize] = true;

        let base = tree.distances[vertex as usize].unwrap();
        for edge in graph.out_edges(vertex) {
            let head = edge.head() as usize;
            let alternative = base + edge.weight();
            if alternative < tree.distances[head].unwrap_or(Weight::MAX) {
                tree.distances[head] = Some(alternative);
                tree.predecessors[head] = Some(vertex);
                queue.push(DijkstraQueueElement::new(alternative, edge.head()));
            }
        }
    }

    Ok(tree)
}
