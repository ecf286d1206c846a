use log::{debug, info, trace};
use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::error::{Error, Result};
use crate::graph::{Graph, Label};
use crate::priority_queue::IndexedMinHeap;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;

/// Status of a vertex during one traversal. Transitions only go forward:
/// `Unvisited` -> `Frontier` -> `Settled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    Unvisited,
    /// Queued with a tentative distance
    Frontier,
    /// Popped from the queue, distance is final
    Settled,
}

/// Result of a Dijkstra traversal.
#[derive(Debug, Clone)]
pub struct Exploration<L> {
    source: L,
    distances: FxHashMap<L, Weight>,
    predecessors: FxHashMap<L, L>,
    settle_order: Vec<L>,
}

impl<L: Label> Exploration<L> {
    pub fn source(&self) -> &L {
        &self.source
    }

    /// Final distances of all settled vertices.
    pub fn distances(&self) -> &FxHashMap<L, Weight> {
        &self.distances
    }

    pub fn predecessors(&self) -> &FxHashMap<L, L> {
        &self.predecessors
    }

    /// Settled vertices in the order they left the queue.
    pub fn settle_order(&self) -> &[L] {
        &self.settle_order
    }

    pub fn distance(&self, label: &L) -> Option<Weight> {
        self.distances.get(label).copied()
    }

    pub fn is_settled(&self, label: &L) -> bool {
        self.distances.contains_key(label)
    }

    /// State `label` was left in when the traversal stopped.
    pub fn state(&self, label: &L) -> VertexState {
        if self.distances.contains_key(label) {
            VertexState::Settled
        } else if self.predecessors.contains_key(label) {
            VertexState::Frontier
        } else {
            VertexState::Unvisited
        }
    }

    /// Shortest path from the source to `target`.
    ///
    /// Fails with [`Error::NotFound`] if `target` was never settled.
    pub fn backtrace(&self, target: &L) -> Result<ShortestPath<L>> {
        super::reconstruct_path(target, &self.distances, &self.predecessors)
    }

    pub fn into_distances(self) -> FxHashMap<L, Weight> {
        self.distances
    }
}

pub struct Dijkstra<'a, L> {
    pub stats: SearchStats,
    g: &'a Graph<L>,
}

impl<'a, L: Label> Dijkstra<'a, L> {
    pub fn new(graph: &'a Graph<L>) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Settles every vertex reachable from `source`.
    ///
    /// Fails with [`Error::NotFound`] if `source` is not part of the graph.
    pub fn explore(&mut self, source: &L) -> Result<Exploration<L>> {
        info!("BEGIN DIJKSTRA EXPLORE from {:?}", source);
        let exploration = self.run(source, None)?;
        info!("{}", self.stats);

        Ok(exploration)
    }

    /// Shortest path from `source` to `target`. The search stops as soon as
    /// `target` is settled.
    ///
    /// Returns `Ok(None)` if `target` cannot be reached or is not part of the
    /// graph.
    pub fn search(&mut self, source: &L, target: &L) -> Result<Option<ShortestPath<L>>> {
        info!("BEGIN DIJKSTRA SEARCH from {:?} to {:?}", source, target);
        let exploration = self.run(source, Some(target))?;

        if !exploration.is_settled(target) {
            info!("No path found: {}", self.stats);
            return Ok(None);
        }

        let sp = exploration.backtrace(target)?;
        debug!("Path found: {:?}", sp);
        info!("Path found: {}", self.stats);

        Ok(Some(sp))
    }

    fn run(&mut self, source: &L, target: Option<&L>) -> Result<Exploration<L>> {
        let g = self.g;
        if !g.contains_vertex(source) {
            return Err(Error::not_found("source vertex", source));
        }

        self.stats.init();

        let mut distances: FxHashMap<L, Weight> = FxHashMap::default();
        let mut predecessors: FxHashMap<L, L> = FxHashMap::default();
        let mut settle_order = Vec::new();

        let mut queue = IndexedMinHeap::new();
        queue.push(0.0, source.clone())?;

        while !queue.is_empty() {
            let (distance, node) = queue.pop_min()?;

            // Every label is queued at most once, so this never triggers
            if distances.contains_key(&node) {
                continue;
            }

            trace!("Settled {:?} at {}", node, distance);
            distances.insert(node.clone(), distance);
            settle_order.push(node.clone());
            self.stats.nodes_settled += 1;

            if target == Some(&node) {
                break;
            }

            for edge in g.neighbors(&node)? {
                self.stats.edges_relaxed += 1;

                if distances.contains_key(&edge.target) {
                    continue;
                }

                let new_distance = distance + edge.weight;
                if queue.contains(&edge.target) {
                    if new_distance < queue.priority_of(&edge.target)? {
                        queue.update_priority(&edge.target, new_distance)?;
                        predecessors.insert(edge.target.clone(), node.clone());
                    }
                } else {
                    queue.push(new_distance, edge.target.clone())?;
                    predecessors.insert(edge.target.clone(), node.clone());
                }
            }
        }
        self.stats.finish();

        Ok(Exploration {
            source: source.clone(),
            distances,
            predecessors,
            settle_order,
        })
    }
}
