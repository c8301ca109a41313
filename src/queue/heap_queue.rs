use std::collections::BinaryHeap;

use super::{DijkstraQueue, DijkstraQueueElement};

#[derive(Clone)]
pub struct HeapQueue {
    queue: BinaryHeap<DijkstraQueueElement>,
}

impl Default for HeapQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapQueue {
    pub fn new() -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }
}

impl DijkstraQueue for HeapQueue {
    fn push(&mut self, state: DijkstraQueueElement) {
        self.queue.push(state)
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        self.queue.pop()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_weight_first() {
        let mut queue = HeapQueue::new();
        queue.push(DijkstraQueueElement::new(5, 0));
        queue.push(DijkstraQueueElement::new(-2, 1));
        queue.push(DijkstraQueueElement::new(3, 2));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|element| element.weight)
            .collect();
        assert_eq!(order, vec![-2, 3, 5]);
    }
}
