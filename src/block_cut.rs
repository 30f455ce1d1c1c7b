use crate::analysis::AnalysisResult;
use crate::ear::EarOutcome;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Edge, edge};
use hashbrown::{HashMap, HashSet};
use log::debug;
use petgraph::visit::NodeIndexable;
use std::collections::BTreeSet;

/// Splits the edges of the graph into biconnected components (blocks).
///
/// Walks every tree of the forest with an explicit stack. A child `c` of `v` starts a
/// new block when `v` is the root, or when `v` is an articulation point that separates
/// the subtree of `c` (`low[c] >= discovery[v]`). Otherwise the tree edge continues the
/// block of the edge entering `v`. A back edge joins the block of the tree edge entering
/// its descendant endpoint.
///
/// Bridges, taken from the residual adjacency of the ear analysis, always open a
/// single-edge block of their own. Articulation points belong to several blocks, every
/// edge to exactly one. Parallel edges collapse into one pair.
///
/// Lowpoints must already be computed, see [`crate::low_link::compute_low`].
pub fn biconnected_components(graph: &Graph, ears: &EarOutcome) -> Result<Vec<BTreeSet<Edge>>> {
    let articulation_points = &ears.articulation_points;
    let bridges: HashSet<Edge> = ears
        .residual
        .iter()
        .enumerate()
        .flat_map(|(u, row)| row.iter().map(move |&w| edge(u, w)))
        .collect();
    let mut blocks: Vec<BTreeSet<Edge>> = Vec::new();

    for tree in graph.forest() {
        // block of the tree edge entering each non-root vertex
        let mut block_of: HashMap<usize, usize> = HashMap::with_capacity(tree.len());
        let mut stack = vec![tree.root];

        while let Some(v) = stack.pop() {
            let state = tree.state(v)?;
            for &c in &state.children {
                let separates = state.parent.is_none()
                    || bridges.contains(&edge(v, c))
                    || (articulation_points.contains(&v)
                        && tree.state(c)?.low >= state.discovery_time);
                let block = if separates {
                    blocks.push(BTreeSet::new());
                    blocks.len() - 1
                } else {
                    *block_of
                        .get(&v)
                        .ok_or_else(|| Error::invariant(format!("vertex {} has no block yet", v)))?
                };
                blocks[block].insert(edge(v, c));
                block_of.insert(c, block);
                stack.push(c);
            }
        }

        for back_edge in &tree.back_edges {
            let block = *block_of.get(&back_edge.descendant).ok_or_else(|| {
                Error::invariant(format!(
                    "back edge {:?} hangs below a vertex without block",
                    back_edge.pair()
                ))
            })?;
            blocks[block].insert(back_edge.pair());
        }
    }

    debug!("{} biconnected components", blocks.len());
    Ok(blocks)
}

/// Node of a block-cut tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCutNode {
    /// Index into [`BlockCutTree::blocks`].
    Block(usize),
    /// Articulation point, by its vertex id.
    Cut(usize),
}

impl std::fmt::Display for BlockCutNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockCutNode::Block(id) => write!(f, "B{}", id),
            BlockCutNode::Cut(v) => write!(f, "C{}", v),
        }
    }
}

/// Represents the block-cut tree of a graph, containing blocks, cut vertices, and their relationships.
#[derive(Debug, Clone)]
pub struct BlockCutTree {
    /// Number of blocks in the graph.
    pub block_count: usize,
    /// Number of cut vertices in the graph.
    pub cut_count: usize,
    /// Sorted vertices of every block.
    pub blocks: Vec<Vec<usize>>,
    /// Graph of blocks and cut vertices. Blocks have numbers from 0 to block_count - 1.
    /// Cut vertices have numbers from block_count to block_count + cut_count - 1.
    pub graph: petgraph::graph::UnGraph<BlockCutNode, ()>,
    /// Maps vertex to its node in `graph`.
    /// A cut vertex maps to its own node, any other vertex to the block containing it.
    /// Isolated vertices are in no block.
    pub node_to_id: Vec<Option<usize>>,
}

/// Builds the block-cut tree (a forest for disconnected graphs) of `input` out of its
/// analysis result.
///
/// Fails with [`Error::OutOfRange`] when `result` names a vertex `input` does not have.
pub fn get_block_cut_tree(input: &Graph, result: &AnalysisResult) -> Result<BlockCutTree> {
    let vertex_count = input.vertex_count();
    let mut graph = petgraph::graph::UnGraph::new_undirected();
    let mut node_to_id = vec![None; vertex_count];
    let out_of_range = |vertex: usize| Error::OutOfRange {
        vertex,
        vertex_count,
    };

    let blocks: Vec<Vec<usize>> = result
        .biconnected_components
        .iter()
        .map(|component| {
            let vertices: BTreeSet<usize> = component.iter().flat_map(|&(u, v)| [u, v]).collect();
            vertices.into_iter().collect()
        })
        .collect();

    for (i, block) in blocks.iter().enumerate() {
        let node = graph.add_node(BlockCutNode::Block(i));
        for &u in block {
            *node_to_id.get_mut(u).ok_or_else(|| out_of_range(u))? = Some(node.index());
        }
    }

    for &u in &result.articulation_points {
        let node = graph.add_node(BlockCutNode::Cut(u));
        *node_to_id.get_mut(u).ok_or_else(|| out_of_range(u))? = Some(node.index());
    }

    for (i, block) in blocks.iter().enumerate() {
        for &u in block.iter().filter(|&&u| result.articulation_points.contains(&u)) {
            if let Some(cut) = node_to_id[u] {
                graph.add_edge(graph.from_index(i), graph.from_index(cut), ());
            }
        }
    }

    Ok(BlockCutTree {
        block_count: blocks.len(),
        cut_count: result.articulation_points.len(),
        blocks,
        graph,
        node_to_id,
    })
}
