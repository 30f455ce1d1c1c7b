use crate::graph::Graph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Connected random graph: a random spanning tree plus `m - (n - 1)` extra edges.
/// Extra edges may be parallel, never self-loops.
pub fn random_graph(n: usize, m: usize, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut edges = Vec::with_capacity(m);

    for i in 1..n {
        let j = rng.random_range(0..i);
        edges.push((i, j));
    }

    if n > 1 {
        for _ in n - 1..m {
            let s = rng.random_range(0..n);
            let t = rng.random_range(0..n);
            if s != t {
                edges.push((s, t));
            }
        }
    }

    Graph::from_edges(n, &edges).expect("generated edges are in range")
}

/// Random graph made of `parts` random connected pieces, some of them glued at a
/// shared vertex and some left disconnected. Simple (no parallel edges).
pub fn random_sparse_forest_of_blocks(parts: usize, part_size: usize, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let n = parts * part_size;
    let mut edges = Vec::new();

    for part in 0..parts {
        let offset = part * part_size;
        for i in 1..part_size {
            let j = rng.random_range(0..i);
            edges.push((offset + i, offset + j));
        }
        for _ in 0..part_size / 2 {
            let s = rng.random_range(0..part_size);
            let t = rng.random_range(0..part_size);
            if s != t {
                edges.push((offset + s, offset + t));
            }
        }
        // glue to a previous piece through a single edge or leave it apart
        if part > 0 && rng.random_bool(0.7) {
            let s = rng.random_range(0..offset);
            edges.push((s, offset + rng.random_range(0..part_size)));
        }
    }

    edges.iter_mut().for_each(|e| *e = crate::types::edge(e.0, e.1));
    edges.sort_unstable();
    edges.dedup();
    Graph::from_edges(n, &edges).expect("generated edges are in range")
}
