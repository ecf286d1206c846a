//! Single-source shortest paths over weighted undirected graphs, driven by an
//! indexed binary min-heap with decrease-key support.
//!
//! # Basic usage
//! ```
//! use sssp_core::prelude::*;
//!
//! // Create a new graph
//! let mut g = Graph::new();
//! g.add_vertices(["a", "b", "c"]);
//! g.add_edge("a", "b", 1.0).unwrap();
//! g.add_edge("b", "c", 2.0).unwrap();
//! g.add_edge("a", "c", 4.0).unwrap();
//!
//! // Settle every vertex reachable from "a"
//! let mut dijkstra = Dijkstra::new(&g);
//! let exploration = dijkstra.explore(&"a").unwrap();
//! assert_eq!(exploration.distance(&"c"), Some(3.0));
//!
//! // Walk the predecessor links back from "c"
//! let path = exploration.backtrace(&"c").unwrap();
//! assert_eq!(path.nodes, vec!["a", "b", "c"]);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod statistics;
pub mod util;
