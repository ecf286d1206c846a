//! Re-exports of the most commonly used items in `sssp_core`.
pub use crate::constants::Weight;
pub use crate::error::{Error, Result};
pub use crate::graph::{Graph, Label};
pub use crate::priority_queue::IndexedMinHeap;

pub use crate::search;
pub use crate::search::dijkstra::{Dijkstra, Exploration, VertexState};
pub use crate::search::shortest_path::ShortestPath;

pub use crate::util::test_graphs::generate_sample_graph;
