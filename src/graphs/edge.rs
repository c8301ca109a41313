use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }
}

/// An edge stored under its tail vertex, so the tail itself is implicit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    head: Vertex,
    weight: Weight,
}

impl TaillessEdge {
    pub fn new(head: Vertex, weight: Weight) -> TaillessEdge {
        TaillessEdge { head, weight }
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}
