use crate::constants::Weight;

/// Path from the source of a search to a target, source first.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath<L> {
    pub nodes: Vec<L>,
    pub weight: Weight,
}

impl<L> ShortestPath<L> {
    pub fn new(nodes: Vec<L>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
