use crate::config::TraversalOrder;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Edge, edge};
use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, HashSet};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Per-vertex bookkeeping of a DFS tree.
///
/// `discovery_time`, `parent` and `children` are fixed once the tree is built.
/// `low` and `is_articulation` are filled in later by the low-link pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexState {
    pub discovery_time: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub low: usize,
    pub is_articulation: bool,
}

impl VertexState {
    fn new(discovery_time: usize, parent: Option<usize>) -> Self {
        Self {
            discovery_time,
            parent,
            children: Vec::new(),
            low: discovery_time,
            is_articulation: false,
        }
    }
}

/// Non-tree edge of a DFS tree. In an undirected DFS one endpoint is always an
/// ancestor of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackEdge {
    pub ancestor: usize,
    pub descendant: usize,
    pub ancestor_time: usize,
    pub descendant_time: usize,
}

impl BackEdge {
    pub fn pair(&self) -> Edge {
        edge(self.ancestor, self.descendant)
    }
}

/// DFS tree of one connected component.
#[derive(Debug, Clone)]
pub struct Tree {
    pub root: usize,
    pub vertices: HashMap<usize, VertexState>,
    pub back_edges: Vec<BackEdge>,
}

impl Tree {
    fn new(root: usize) -> Self {
        Self {
            root,
            vertices: HashMap::new(),
            back_edges: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains_key(&v)
    }

    /// State of `v`, a miss means the tree is broken.
    pub fn state(&self, v: usize) -> Result<&VertexState> {
        self.vertices
            .get(&v)
            .ok_or_else(|| Error::invariant(format!("vertex {} missing from tree rooted at {}", v, self.root)))
    }

    pub(crate) fn state_mut(&mut self, v: usize) -> Result<&mut VertexState> {
        let root = self.root;
        self.vertices
            .get_mut(&v)
            .ok_or_else(|| Error::invariant(format!("vertex {} missing from tree rooted at {}", v, root)))
    }

    pub fn discovery_time(&self, v: usize) -> Result<usize> {
        Ok(self.state(v)?.discovery_time)
    }

    pub fn parent(&self, v: usize) -> Result<Option<usize>> {
        Ok(self.state(v)?.parent)
    }

    pub fn children(&self, v: usize) -> Result<&[usize]> {
        Ok(&self.state(v)?.children)
    }

    /// Vertices ordered by discovery time.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order: Vec<usize> = self.vertices.keys().copied().collect();
        radsort::sort_by_key(&mut order, |v| self.vertices[v].discovery_time);
        order
    }

    /// Tree edges as `(parent, child)`.
    pub fn tree_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices
            .iter()
            .filter_map(|(&v, state)| state.parent.map(|p| (p, v)))
    }
}

/// Output of [`build_forest`]: the trees and, for every vertex, the tree it ended up in.
#[derive(Debug, Clone)]
pub struct Forest {
    pub trees: Vec<Tree>,
    pub tree_of: Vec<Option<usize>>,
}

/// Builds a DFS forest covering every vertex exactly once.
///
/// The traversal keeps an explicit stack of `(vertex, parent)` pairs, so its depth is
/// bounded by heap memory rather than the call stack. A vertex is claimed when it is
/// popped for the first time; popping an already claimed vertex means the pair is a
/// non-tree edge and it is recorded as a back edge, once per unordered pair.
pub fn build_forest(graph: &Graph, order: &TraversalOrder) -> Result<Forest> {
    let n = graph.vertex_count();
    let mut rng = match order {
        TraversalOrder::Natural => None,
        TraversalOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(*seed)),
    };

    let mut roots: Vec<usize> = (0..n).collect();
    if let Some(rng) = rng.as_mut() {
        roots.shuffle(rng);
    }

    let mut visited = FixedBitSet::with_capacity(n);
    let mut tree_of = vec![None; n];
    let mut trees = Vec::new();

    for root in roots {
        if visited.contains(root) {
            continue;
        }
        let tree_index = trees.len();
        let mut tree = Tree::new(root);
        let mut seen_back_edges: HashSet<Edge> = HashSet::new();
        let mut time = 1;

        let mut stack: Vec<(usize, Option<usize>)> = vec![(root, None)];
        while let Some((v, prev)) = stack.pop() {
            if !visited.contains(v) {
                visited.insert(v);
                tree_of[v] = Some(tree_index);
                tree.vertices.insert(v, VertexState::new(time, prev));
                time += 1;
                if let Some(p) = prev {
                    tree.state_mut(p)?.children.push(v);
                }

                let mut pushes: Vec<usize> = Vec::with_capacity(graph.neighbors(v).len());
                for &w in graph.neighbors(v) {
                    if w >= n {
                        return Err(Error::OutOfRange {
                            vertex: w,
                            vertex_count: n,
                        });
                    }
                    if !visited.contains(w) {
                        pushes.push(w);
                    }
                }
                if let Some(rng) = rng.as_mut() {
                    pushes.shuffle(rng);
                }
                stack.extend(pushes.into_iter().map(|w| (w, Some(v))));
            } else {
                let Some(p) = prev else {
                    return Err(Error::invariant(format!("root {} popped twice", v)));
                };
                if !seen_back_edges.insert(edge(p, v)) {
                    continue;
                }
                let (p_time, v_time) = (tree.discovery_time(p)?, tree.discovery_time(v)?);
                let back_edge = if p_time < v_time {
                    BackEdge {
                        ancestor: p,
                        descendant: v,
                        ancestor_time: p_time,
                        descendant_time: v_time,
                    }
                } else {
                    BackEdge {
                        ancestor: v,
                        descendant: p,
                        ancestor_time: v_time,
                        descendant_time: p_time,
                    }
                };
                tree.back_edges.push(back_edge);
            }
        }

        debug!(
            "tree {} rooted at {}: {} vertices, {} back edges",
            tree_index,
            root,
            tree.len(),
            tree.back_edges.len()
        );
        trees.push(tree);
    }

    Ok(Forest { trees, tree_of })
}
