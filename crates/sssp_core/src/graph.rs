use std::{fmt, hash::Hash, io, path::Path};

use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::constants::Weight;
use crate::error::{Error, Result};

/// Requirements for a vertex label. Integers and strings both qualify.
pub trait Label: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Label for T {}

/// Adjacency entry: the neighbor on the other side of an undirected edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<L> {
    pub target: L,
    pub weight: Weight,
}

impl<L> Edge<L> {
    pub fn new(target: L, weight: Weight) -> Self {
        Edge { target, weight }
    }
}

#[derive(Debug, Clone)]
pub struct Vertex<L> {
    pub label: L,
    pub edges: Vec<Edge<L>>,
}

impl<L: Label> Vertex<L> {
    fn new(label: L) -> Self {
        Vertex {
            label,
            edges: Vec::new(),
        }
    }

    /// Returns `true` if a new adjacency entry was created.
    fn upsert_edge(&mut self, target: L, weight: Weight) -> bool {
        // If an edge to `target` already exists keep the lower weight
        for edge in self.edges.iter_mut() {
            if edge.target == target {
                if weight < edge.weight {
                    edge.weight = weight;
                }
                return false;
            }
        }

        self.edges.push(Edge::new(target, weight));
        true
    }
}

/// Weighted undirected graph over hashable vertex labels.
#[derive(Debug, Clone)]
pub struct Graph<L> {
    vertices: Vec<Vertex<L>>,
    /// Label -> position in `vertices`
    vertex_index: FxHashMap<L, usize>,
    num_edges: usize,
}

impl<L: Label> Graph<L> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_index: FxHashMap::default(),
            num_edges: 0,
        }
    }

    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            vertex_index: FxHashMap::with_capacity_and_hasher(num_vertices, Default::default()),
            num_edges: 0,
        }
    }

    /// Adds a vertex with an empty adjacency list.
    ///
    /// Returns `false` and leaves the graph unchanged if `label` already exists.
    pub fn add_vertex(&mut self, label: L) -> bool {
        if self.vertex_index.contains_key(&label) {
            return false;
        }

        self.vertex_index.insert(label.clone(), self.vertices.len());
        self.vertices.push(Vertex::new(label));
        true
    }

    pub fn add_vertices(&mut self, labels: impl IntoIterator<Item = L>) {
        for label in labels {
            self.add_vertex(label);
        }
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Both vertices must exist and the weight must be finite and non-negative.
    /// Adding an edge between a pair that is already connected keeps the lower
    /// of the two weights instead of creating a parallel edge.
    pub fn add_edge(&mut self, u: L, v: L, weight: Weight) -> Result<()> {
        let u_idx = self.index_of(&u)?;
        let v_idx = self.index_of(&v)?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                from: format!("{:?}", u),
                to: format!("{:?}", v),
                weight,
            });
        }

        let inserted = self.vertices[u_idx].upsert_edge(v, weight);
        if u_idx != v_idx {
            self.vertices[v_idx].upsert_edge(u, weight);
        }
        if inserted {
            self.num_edges += 1;
        }

        Ok(())
    }

    /// Adds all `(u, v, weight)` triples, stopping at the first invalid one.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (L, L, Weight)>) -> Result<()> {
        for (u, v, weight) in edges {
            self.add_edge(u, v, weight)?;
        }
        Ok(())
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.vertex_index.contains_key(label)
    }

    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertex_index
            .get(label)
            .map(|&idx| &self.vertices[idx])
    }

    /// Incident edges of `label`.
    pub fn neighbors(&self, label: &L) -> Result<&[Edge<L>]> {
        let idx = self.index_of(label)?;
        Ok(&self.vertices[idx].edges)
    }

    /// Weight of the edge between `u` and `v`, if they are adjacent.
    pub fn weight(&self, u: &L, v: &L) -> Option<Weight> {
        self.vertex(u)?
            .edges
            .iter()
            .find(|edge| &edge.target == v)
            .map(|edge| edge.weight)
    }

    /// Returns an iterator over all vertex labels in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &L> {
        self.vertices.iter().map(|vertex| &vertex.label)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn degree(&self, label: &L) -> Option<usize> {
        self.vertex(label).map(|vertex| vertex.edges.len())
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Vertices: {}, #Edges: {}",
            self.num_vertices(),
            self.num_edges()
        );
    }

    fn index_of(&self, label: &L) -> Result<usize> {
        self.vertex_index
            .get(label)
            .copied()
            .ok_or_else(|| Error::not_found("vertex", label))
    }
}

impl<L: Label> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct CsvEdge {
    source: String,
    target: String,
    weight: Weight,
}

impl Graph<String> {
    /// Reads an edge list with the header `source,target,weight`.
    ///
    /// Every endpoint becomes a vertex, in order of first appearance.
    pub fn from_csv(path_to_edges: &Path) -> anyhow::Result<Self> {
        info!("Reading edge list: {:?}", path_to_edges);

        let reader = csv::Reader::from_path(path_to_edges)
            .with_context(|| format!("Could not open {:?}", path_to_edges))?;
        Self::from_csv_reader(reader)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> anyhow::Result<Self> {
        Self::from_csv_reader(csv::Reader::from_reader(reader))
    }

    fn from_csv_reader<R: io::Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Self> {
        let mut edges: Vec<CsvEdge> = Vec::new();
        for result in reader.deserialize() {
            let edge: CsvEdge = result.context("Failed to parse Edge")?;
            edges.push(edge);
        }
        debug!("Parsed {} edges", edges.len());

        let mut g = Graph::with_capacity(edges.len());
        for edge in edges.iter() {
            g.add_vertex(edge.source.clone());
            g.add_vertex(edge.target.clone());
        }

        for (line, CsvEdge { source, target, weight }) in edges.into_iter().enumerate() {
            g.add_edge(source, target, weight)
                .with_context(|| format!("Invalid edge in record {}", line + 1))?;
        }

        info!(
            "Graph has {} vertices and {} edges",
            g.num_vertices(),
            g.num_edges()
        );
        Ok(g)
    }
}

/// Macro to create an undirected `(u, v, weight)` triple for [`Graph::add_edges`]
///
/// edge!("a", "b", 3.0)
#[macro_export]
macro_rules! edge {
    ($source:expr , $target:expr, $weight:expr) => {
        ($source.into(), $target.into(), $weight)
    };
}
