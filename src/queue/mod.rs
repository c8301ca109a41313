use std::cmp::Ordering;

use crate::graphs::{Vertex, Weight};

pub mod heap_queue;

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DijkstraQueueElement {
    pub weight: Weight,
    pub vertex: Vertex,
}

// `BinaryHeap` is a max-heap, so the ordering on weights is flipped here.
// Ties fall back to the vertex id to keep `Ord` consistent with `PartialEq`.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DijkstraQueueElement {
    pub fn new(weight: Weight, vertex: Vertex) -> DijkstraQueueElement {
        DijkstraQueueElement { weight, vertex }
    }
}

pub trait DijkstraQueue {
    fn push(&mut self, state: DijkstraQueueElement);
    fn pop(&mut self) -> Option<DijkstraQueueElement>;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}
