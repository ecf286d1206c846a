use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::constants::Weight;
use crate::graph::Graph;

/// Edges of the sample graph used throughout the tests and as the default
/// input of the binaries.
///
/// ```text
///     1     2
///  a --- b --- c
///  |\____4____/| \
/// 2|          5| 10
///  |           |   \
///  f --- 4 --- e -2- d
/// ```
pub const SAMPLE_EDGES: [(&str, &str, Weight); 8] = [
    ("a", "b", 1.0),
    ("b", "c", 2.0),
    ("a", "c", 4.0),
    ("a", "f", 2.0),
    ("e", "f", 4.0),
    ("c", "e", 5.0),
    ("d", "e", 2.0),
    ("c", "d", 10.0),
];

pub fn generate_sample_graph() -> Graph<&'static str> {
    let mut g = Graph::new();
    g.add_vertices(["a", "b", "c", "d", "e", "f"]);
    for (u, v, w) in SAMPLE_EDGES {
        let _ = g.add_edge(u, v, w);
    }

    g
}

/// [`generate_sample_graph`] with owned labels.
pub fn generate_sample_graph_owned() -> Graph<String> {
    let mut g = Graph::new();
    g.add_vertices(["a", "b", "c", "d", "e", "f"].map(String::from));
    for (u, v, w) in SAMPLE_EDGES {
        let _ = g.add_edge(u.to_string(), v.to_string(), w);
    }

    g
}

/// `n x n` grid with unit weights. Vertex `row * n + col`.
pub fn generate_grid_graph(n: usize) -> Graph<usize> {
    let mut g = Graph::with_capacity(n * n);
    g.add_vertices(0..n * n);

    for row in 0..n {
        for col in 0..n {
            let v = row * n + col;
            if col + 1 < n {
                let _ = g.add_edge(v, v + 1, 1.0);
            }
            if row + 1 < n {
                let _ = g.add_edge(v, v + n, 1.0);
            }
        }
    }

    g
}

/// Graph with `num_vertices` vertices and up to `num_edges` random edges with
/// integral weights in `0..10`.
pub fn generate_random_graph(num_vertices: usize, num_edges: usize, seed: u64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::with_capacity(num_vertices);
    g.add_vertices(0..num_vertices);

    if num_vertices == 0 {
        return g;
    }

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        let w = rng.gen_range(0..10) as f64;
        let _ = g.add_edge(u, v, w);
    }

    g
}
