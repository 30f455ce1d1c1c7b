use crate::config::Config;
use crate::dfs_forest::{Tree, build_forest};
use crate::error::{Error, Result};
use crate::types::{Edge, edge};
use hashbrown::HashMap;
use petgraph::visit::EdgeRef;

/// Undirected graph on vertices `0..n` stored as symmetric adjacency lists.
///
/// Parallel edges are allowed, self-loops are not. Once [`Graph::build_forest`] runs
/// the graph also owns its DFS forest and knows which tree every vertex belongs to.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    // one per adjacency entry, so every undirected edge is counted from both sides
    m: usize,
    adjacency: Vec<Vec<usize>>,
    forest: Vec<Tree>,
    tree_of: Vec<Option<usize>>,
}

impl Graph {
    /// Wraps adjacency lists after checking ranges, self-loops and symmetry.
    pub fn new(n: usize, adjacency: Vec<Vec<usize>>) -> Result<Self> {
        if adjacency.len() != n {
            return Err(Error::RowCount {
                expected: n,
                found: adjacency.len(),
            });
        }

        let mut multiplicity: HashMap<Edge, isize> = HashMap::new();
        let mut m = 0;
        for (u, neighbors) in adjacency.iter().enumerate() {
            for &w in neighbors {
                if w >= n {
                    return Err(Error::OutOfRange {
                        vertex: w,
                        vertex_count: n,
                    });
                }
                if w == u {
                    return Err(Error::SelfLoop(u));
                }
                // +1 when listed from the smaller side, -1 from the bigger one
                *multiplicity.entry(edge(u, w)).or_insert(0) += if u < w { 1 } else { -1 };
                m += 1;
            }
        }
        if let Some((&(a, b), &balance)) = multiplicity.iter().find(|(_, balance)| **balance != 0) {
            let (from, to) = if balance > 0 { (a, b) } else { (b, a) };
            return Err(Error::Asymmetric { from, to });
        }

        Ok(Self {
            n,
            m,
            adjacency,
            forest: Vec::new(),
            tree_of: vec![None; n],
        })
    }

    /// Builds symmetric adjacency from a list of undirected edges.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut adjacency = empty_rows(n)?;
        for &(u, v) in edges {
            for x in [u, v] {
                if x >= n {
                    return Err(Error::OutOfRange {
                        vertex: x,
                        vertex_count: n,
                    });
                }
            }
            if u == v {
                return Err(Error::SelfLoop(u));
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Self::new(n, adjacency)
    }

    /// Converts a petgraph graph, petgraph's node indices become vertex ids.
    pub fn from_petgraph<N, E>(graph: &petgraph::graph::UnGraph<N, E>) -> Result<Self> {
        let edges: Vec<(usize, usize)> = graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        Self::from_edges(graph.node_count(), &edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of stored adjacency entries, twice the number of undirected edges.
    pub fn entry_count(&self) -> usize {
        self.m
    }

    pub fn edge_count(&self) -> usize {
        self.m / 2
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Every physical edge once, as a normalized pair.
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.iter().filter(move |&&w| u < w).map(move |&w| (u, w)))
            .collect()
    }

    /// Number of distinct neighbours, parallel edges count once.
    pub fn distinct_degree(&self, v: usize) -> usize {
        let mut neighbors = self.adjacency[v].clone();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors.len()
    }

    /// Whether `v` has at least two distinct neighbours. Stops at the first neighbour
    /// that differs from the first one.
    pub fn has_two_distinct_neighbors(&self, v: usize) -> bool {
        match self.adjacency[v].split_first() {
            Some((&first, rest)) => rest.iter().any(|&w| w != first),
            None => false,
        }
    }

    /// (Re)builds the DFS forest, replacing any forest from a previous run.
    pub fn build_forest(&mut self, config: &Config) -> Result<()> {
        let forest = build_forest(self, &config.traversal)?;
        self.forest = forest.trees;
        self.tree_of = forest.tree_of;
        Ok(())
    }

    pub fn forest(&self) -> &[Tree] {
        &self.forest
    }

    /// Index into [`Graph::forest`] of the tree containing `v`, `None` before the forest exists.
    pub fn tree_of(&self, v: usize) -> Option<usize> {
        self.tree_of.get(v).copied().flatten()
    }

    /// Split borrow for analyzers that update trees while reading adjacency.
    pub(crate) fn parts_mut(&mut self) -> (&[Vec<usize>], &mut [Tree]) {
        (&self.adjacency, &mut self.forest)
    }
}

/// `n` empty adjacency rows. Fails instead of aborting when they cannot be allocated.
pub(crate) fn empty_rows(n: usize) -> Result<Vec<Vec<usize>>> {
    let mut rows = Vec::new();
    rows.try_reserve_exact(n)
        .map_err(|_| Error::TooLarge { vertex_count: n })?;
    rows.resize_with(n, Vec::new);
    Ok(rows)
}
