//! Single-source shortest path searches over a [`Graph`].
use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::error::{Error, Result};
use crate::graph::{Graph, Label};

use self::dijkstra::Dijkstra;
use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Distances from `source` to every vertex reachable from it.
/// Unreachable vertices are absent from the map.
pub fn explore<L: Label>(graph: &Graph<L>, source: &L) -> Result<FxHashMap<L, Weight>> {
    Dijkstra::new(graph)
        .explore(source)
        .map(|exploration| exploration.into_distances())
}

/// Follows the predecessor links from `target` back to the source.
///
/// `distances` holds the settled vertices; `target` must be one of them.
pub fn reconstruct_path<L: Label>(
    target: &L,
    distances: &FxHashMap<L, Weight>,
    predecessors: &FxHashMap<L, L>,
) -> Result<ShortestPath<L>> {
    let weight = *distances
        .get(target)
        .ok_or_else(|| Error::not_found("settled vertex", target))?;

    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(previous) = predecessors.get(current) {
        // A path never visits more vertices than were settled
        if path.len() > distances.len() {
            return Err(Error::NotFound(format!(
                "acyclic predecessor chain for {:?}",
                target
            )));
        }
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();

    Ok(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_path<L: Label>(
    expected_path: Vec<L>,
    expected_weight: Weight,
    path: Option<ShortestPath<L>>,
) {
    assert_eq!(
        Some(ShortestPath::new(expected_path, expected_weight)),
        path
    );
}

#[cfg(test)]
pub(crate) fn assert_no_path<L: Label>(path: Option<ShortestPath<L>>) {
    assert_eq!(None, path);
}
