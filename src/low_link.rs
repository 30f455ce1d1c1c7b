use crate::dfs_forest::Tree;
use crate::error::{Error, Result};
use log::debug;
use std::collections::{BTreeSet, VecDeque};

/// Breadth-first order of the tree walking only tree edges, root first.
///
/// Every vertex comes after its parent, so reading it backwards visits children
/// before parents.
pub fn level_order(tree: &Tree) -> Result<Vec<usize>> {
    let mut order = Vec::with_capacity(tree.len());
    let mut queue = VecDeque::from([tree.root]);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        queue.extend(tree.children(v)?.iter().copied());
    }

    if order.len() != tree.len() {
        return Err(Error::invariant(format!(
            "level order of tree rooted at {} reached {} of {} vertices",
            tree.root,
            order.len(),
            tree.len()
        )));
    }
    Ok(order)
}

/// Computes lowpoints of all vertices of `tree` and marks its articulation points.
///
/// `low[v]` is the smallest discovery time reachable from the subtree of `v` using
/// tree edges downwards and at most one back edge. Edges to the parent do not count.
///
/// `v` is an articulation point iff it has a child `c` with `low[c] >= discovery[v]`,
/// except that the root needs at least two children.
///
/// Returns the articulation points found in this tree.
pub fn compute_low(tree: &mut Tree, adjacency: &[Vec<usize>]) -> Result<BTreeSet<usize>> {
    let order = level_order(tree)?;
    let mut articulation_points = BTreeSet::new();

    for &v in order.iter().rev() {
        let state = tree.state(v)?;
        let discovery = state.discovery_time;
        let mut low = discovery;
        let mut max_child_low = 0;

        for &child in &state.children {
            let child_low = tree.state(child)?.low;
            low = low.min(child_low);
            max_child_low = max_child_low.max(child_low);
        }

        let neighbors = adjacency
            .get(v)
            .ok_or_else(|| Error::invariant(format!("vertex {} has no adjacency row", v)))?;
        for &w in neighbors {
            if state.parent == Some(w) || tree.parent(w)? == Some(v) {
                continue;
            }
            low = low.min(tree.discovery_time(w)?);
        }

        let is_articulation = !state.children.is_empty()
            && max_child_low >= discovery
            && !(v == tree.root && state.children.len() == 1);

        let state = tree.state_mut(v)?;
        state.low = low;
        state.is_articulation = is_articulation;
        if is_articulation {
            articulation_points.insert(v);
        }
    }

    debug!(
        "low-link of tree rooted at {}: articulation points {:?}",
        tree.root, articulation_points
    );
    Ok(articulation_points)
}
