//! Chain (ear) decomposition of DFS trees.
//!
//! Reference: J. M. Schmidt, "A simple test on 2-vertex- and 2-edge-connectivity",
//! Information Processing Letters 113 (2013).
//!
//! Every back edge starts an ear at its ancestor endpoint, goes down the back edge and
//! climbs the tree through parent pointers until it hits a vertex that some earlier
//! ear already claimed. With back edges consumed in discovery order of their ancestor:
//!
//! - an edge that no ear walks over is a bridge, unless it is a whole component on its own,
//! - a closed ear (ending where it started) other than the first ear of its tree
//!   starts at an articulation point,
//! - an endpoint of a bridge with at least two distinct neighbours is an articulation point.

use crate::dfs_forest::Tree;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Edge, edge};
use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, HashSet};
use log::{debug, trace};
use std::collections::BTreeSet;

/// Biconnectivity verdict for one connected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Ears cover every vertex and edge and no later ear is closed, or the component
    /// is a single edge.
    Biconnected,
    /// Some vertex or edge is never covered by an ear, or a cut vertex was found.
    Separable,
    /// No back edges at all: the component is a tree with at least two edges, or a
    /// single vertex.
    Acyclic,
}

/// Ears of a single tree together with its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarDecomposition {
    pub root: usize,
    /// Each ear lists its vertices from the start (ancestor endpoint of the back edge)
    /// to the first vertex that was already visited.
    pub ears: Vec<Vec<usize>>,
    /// Vertices of the tree that no ear touched.
    pub keep_count: usize,
    pub verdict: Verdict,
}

/// What is left after every tree went through [`EarState::decompose`].
#[derive(Debug, Clone)]
pub struct EarOutcome {
    pub articulation_points: BTreeSet<usize>,
    pub bridges: BTreeSet<Edge>,
    /// Adjacency holding only the bridges.
    pub residual: Vec<Vec<usize>>,
    /// Every pair some ear walked over.
    pub(crate) covered: HashSet<Edge>,
}

/// State shared by the ear decompositions of all trees of one forest.
///
/// Trees are vertex-disjoint, so a fresh state per tree gives the same answer for that
/// tree as a state threaded through the whole forest.
#[derive(Debug, Clone)]
pub struct EarState {
    visited: FixedBitSet,
    // copies of every pair that no ear walked over yet
    remaining: HashMap<Edge, usize>,
    covered: HashSet<Edge>,
    articulation_points: BTreeSet<usize>,
}

impl EarState {
    pub fn new(graph: &Graph) -> Self {
        let mut remaining = HashMap::with_capacity(graph.edge_count());
        for e in graph.edges() {
            *remaining.entry(e).or_insert(0) += 1;
        }
        Self {
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
            remaining,
            covered: HashSet::with_capacity(graph.edge_count()),
            articulation_points: BTreeSet::new(),
        }
    }

    pub fn is_visited(&self, v: usize) -> bool {
        self.visited.contains(v)
    }

    pub fn is_covered(&self, u: usize, v: usize) -> bool {
        self.covered.contains(&edge(u, v))
    }

    /// Marks `v` visited, returns whether it was new.
    fn claim(&mut self, v: usize) -> bool {
        !self.visited.put(v)
    }

    /// Takes one copy of the edge `(u, v)` out of the remaining edges.
    fn cover(&mut self, u: usize, v: usize) -> Result<()> {
        let pair = edge(u, v);
        match self.remaining.get_mut(&pair) {
            Some(copies) if *copies > 0 => *copies -= 1,
            _ => return Err(Error::invariant(format!("edge ({}, {}) covered twice", u, v))),
        }
        self.covered.insert(pair);
        Ok(())
    }

    /// Consumes all back edges of `tree` as ears.
    pub fn decompose(&mut self, tree: &Tree) -> Result<EarDecomposition> {
        let mut back_edges = tree.back_edges.clone();
        // radsort is stable, so this ends up ordered by (ancestor_time, descendant_time)
        radsort::sort_by_key(&mut back_edges, |be| be.descendant_time);
        radsort::sort_by_key(&mut back_edges, |be| be.ancestor_time);

        let mut keep_count = tree.len();
        let mut ears = Vec::with_capacity(back_edges.len());
        let mut found_cut = false;

        for (j, back_edge) in back_edges.iter().enumerate() {
            let start = back_edge.ancestor;
            if self.claim(start) {
                keep_count -= 1;
            }
            self.cover(start, back_edge.descendant)?;

            let mut ear = vec![start, back_edge.descendant];
            let mut current = back_edge.descendant;
            while self.claim(current) {
                keep_count -= 1;
                let parent = tree.parent(current)?.ok_or_else(|| {
                    Error::invariant(format!("ear starting at {} climbed past root {}", start, tree.root))
                })?;
                self.cover(current, parent)?;
                ear.push(parent);
                current = parent;
            }

            trace!("ear {} of tree rooted at {}: {:?}", j, tree.root, ear);
            if j != 0 && current == start {
                self.articulation_points.insert(start);
                found_cut = true;
            }
            ears.push(ear);
        }

        // a lone edge (K2) is biconnected, its edge is no bridge
        let single_edge = tree.len() == 2 && back_edges.is_empty();
        if single_edge {
            for (p, c) in tree.tree_edges() {
                self.covered.insert(edge(p, c));
            }
        }

        let uncovered_tree_edge = tree.tree_edges().any(|(p, c)| !self.is_covered(p, c));
        let verdict = if single_edge {
            Verdict::Biconnected
        } else if back_edges.is_empty() {
            Verdict::Acyclic
        } else if keep_count > 0 || found_cut || uncovered_tree_edge {
            Verdict::Separable
        } else {
            Verdict::Biconnected
        };

        debug!(
            "tree rooted at {}: {} ears, {} vertices uncovered, {:?}",
            tree.root,
            ears.len(),
            keep_count,
            verdict
        );

        Ok(EarDecomposition {
            root: tree.root,
            ears,
            keep_count,
            verdict,
        })
    }

    /// Collects bridges from the edges no ear covered and finishes the articulation set.
    pub fn finish(self, graph: &Graph) -> EarOutcome {
        let mut bridges = BTreeSet::new();
        let mut residual = vec![Vec::new(); graph.vertex_count()];
        for (u, w) in graph.edges() {
            // leftover parallel copies of a covered pair are not bridges
            if self.covered.contains(&edge(u, w)) {
                continue;
            }
            residual[u].push(w);
            residual[w].push(u);
            bridges.insert(edge(u, w));
        }

        let endpoints: BTreeSet<usize> = bridges.iter().flat_map(|&(u, w)| [u, w]).collect();
        let mut articulation_points = self.articulation_points;
        articulation_points.extend(
            endpoints
                .into_iter()
                .filter(|&x| graph.has_two_distinct_neighbors(x)),
        );

        EarOutcome {
            articulation_points,
            bridges,
            residual,
            covered: self.covered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TraversalOrder;
    use crate::dfs_forest::build_forest;
    use crate::low_link::compute_low;
    use crate::testing::brute_force;
    use crate::testing::graph_enumerator::GraphEnumeratorState;
    use crate::testing::random_graphs::{random_graph, random_sparse_forest_of_blocks};

    fn ears_of(graph: &Graph, order: &TraversalOrder) -> (Vec<EarDecomposition>, EarOutcome) {
        let forest = build_forest(graph, order).unwrap();
        let mut state = EarState::new(graph);
        let decompositions = forest
            .trees
            .iter()
            .map(|tree| state.decompose(tree).unwrap())
            .collect();
        (decompositions, state.finish(graph))
    }

    #[test]
    fn test_triangle_single_ear() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let (decompositions, outcome) = ears_of(&g, &TraversalOrder::Natural);
        assert_eq!(decompositions.len(), 1);
        let d = &decompositions[0];
        assert_eq!(d.ears.len(), 1);
        assert_eq!(d.ears[0].first(), d.ears[0].last());
        assert_eq!(d.ears[0].len(), 4);
        assert_eq!(d.keep_count, 0);
        assert_eq!(d.verdict, Verdict::Biconnected);
        assert!(outcome.articulation_points.is_empty());
        assert!(outcome.bridges.is_empty());
        assert!(outcome.residual.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_path_is_acyclic() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let (decompositions, outcome) = ears_of(&g, &TraversalOrder::Natural);
        assert_eq!(decompositions[0].verdict, Verdict::Acyclic);
        assert_eq!(decompositions[0].keep_count, 3);
        assert_eq!(outcome.articulation_points, BTreeSet::from([1]));
        assert_eq!(outcome.bridges, BTreeSet::from([(0, 1), (1, 2)]));
        assert_eq!(outcome.residual[1].len(), 2);
    }

    #[test]
    fn test_two_triangles_closed_second_ear() {
        let g = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]).unwrap();
        let (decompositions, outcome) = ears_of(&g, &TraversalOrder::Natural);
        let d = &decompositions[0];
        assert_eq!(d.ears.len(), 2);
        assert_eq!(d.ears[1].first(), Some(&2));
        assert_eq!(d.ears[1].last(), Some(&2));
        assert_eq!(d.keep_count, 0);
        assert_eq!(d.verdict, Verdict::Separable);
        assert_eq!(outcome.articulation_points, BTreeSet::from([2]));
        assert!(outcome.bridges.is_empty());
    }

    #[test]
    fn test_triangles_joined_by_bridge() {
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]).unwrap();
        let (decompositions, outcome) = ears_of(&g, &TraversalOrder::Natural);
        assert_eq!(decompositions[0].verdict, Verdict::Separable);
        assert_eq!(decompositions[0].keep_count, 0);
        assert_eq!(outcome.bridges, BTreeSet::from([(2, 3)]));
        assert_eq!(outcome.articulation_points, BTreeSet::from([2, 3]));
    }

    #[test]
    fn test_square_with_chord_is_biconnected() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
        let (decompositions, outcome) = ears_of(&g, &TraversalOrder::Natural);
        assert_eq!(decompositions[0].ears.len(), 2);
        assert_eq!(decompositions[0].verdict, Verdict::Biconnected);
        assert!(outcome.articulation_points.is_empty());
    }

    #[test]
    fn test_parallel_edges_are_not_bridges() {
        let g = Graph::from_edges(3, &[(0, 1), (0, 1), (0, 1), (1, 2)]).unwrap();
        let (_, outcome) = ears_of(&g, &TraversalOrder::Natural);
        assert_eq!(outcome.bridges, BTreeSet::from([(1, 2)]));
        assert_eq!(outcome.articulation_points, BTreeSet::from([1]));
    }

    #[test]
    fn test_fresh_state_per_tree() {
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5)]).unwrap();
        let forest = build_forest(&g, &TraversalOrder::Natural).unwrap();
        let verdicts: Vec<Verdict> = forest
            .trees
            .iter()
            .map(|tree| EarState::new(&g).decompose(tree).unwrap().verdict)
            .collect();
        assert_eq!(verdicts, vec![Verdict::Biconnected, Verdict::Acyclic]);
    }

    #[test]
    fn test_lone_edge_is_biconnected() {
        let g = Graph::from_edges(3, &[(0, 1)]).unwrap();
        let (decompositions, outcome) = ears_of(&g, &TraversalOrder::Natural);
        assert_eq!(decompositions[0].verdict, Verdict::Biconnected);
        assert!(decompositions[0].ears.is_empty());
        assert!(outcome.bridges.is_empty());
        assert!(outcome.articulation_points.is_empty());
    }

    #[test]
    fn test_wheel_hub_walks_every_edge_once() {
        // hub 0 joined to every vertex of the cycle 1..=6
        let mut edges: Vec<(usize, usize)> = (1..=6).map(|v| (0, v)).collect();
        edges.extend((1..=6).map(|v| (v, v % 6 + 1)));
        let g = Graph::from_edges(7, &edges).unwrap();
        let forest = build_forest(&g, &TraversalOrder::Natural).unwrap();
        let mut state = EarState::new(&g);
        let d = state.decompose(&forest.trees[0]).unwrap();
        assert_eq!(d.ears.len(), 6);
        assert_eq!(d.verdict, Verdict::Biconnected);
        assert!(state.remaining.values().all(|&copies| copies == 0));

        let outcome = state.finish(&g);
        assert!(outcome.bridges.is_empty());
        assert!(outcome.articulation_points.is_empty());
        assert_eq!(outcome.covered.len(), 12);
    }

    #[test]
    fn test_isolated_vertex() {
        let g = Graph::from_edges(1, &[]).unwrap();
        let (decompositions, outcome) = ears_of(&g, &TraversalOrder::Natural);
        assert_eq!(decompositions[0].verdict, Verdict::Acyclic);
        assert_eq!(decompositions[0].keep_count, 1);
        assert!(outcome.articulation_points.is_empty());
        assert!(outcome.bridges.is_empty());
    }

    #[test]
    fn test_agrees_with_low_link_and_brute_force() {
        for n in 1..=5 {
            for graph in GraphEnumeratorState::new(n) {
                let mut forest = build_forest(&graph, &TraversalOrder::Natural).unwrap();
                let mut low_articulation = BTreeSet::new();
                for tree in forest.trees.iter_mut() {
                    low_articulation.extend(compute_low(tree, graph.adjacency()).unwrap());
                }
                let (_, outcome) = ears_of(&graph, &TraversalOrder::Natural);

                assert_eq!(outcome.articulation_points, low_articulation);
                assert_eq!(outcome.articulation_points, brute_force::articulation_points(&graph));
                assert_eq!(outcome.bridges, brute_force::bridges(&graph));
            }
        }
    }

    #[test]
    fn test_random_graphs_any_traversal() {
        for seed in 0..25 {
            let graphs = [
                random_graph(20, 26, seed),
                random_sparse_forest_of_blocks(4, 6, seed),
            ];
            for graph in graphs {
                let expected_articulation = brute_force::articulation_points(&graph);
                let expected_bridges = brute_force::bridges(&graph);
                for order in [
                    TraversalOrder::Natural,
                    TraversalOrder::Shuffled { seed: seed as u64 },
                    TraversalOrder::Shuffled { seed: seed as u64 + 1000 },
                ] {
                    let (_, outcome) = ears_of(&graph, &order);
                    assert_eq!(outcome.articulation_points, expected_articulation);
                    assert_eq!(outcome.bridges, expected_bridges);
                }
            }
        }
    }
}
