/// Wrapper for petgraph's graph type.
pub type UnGraph = petgraph::graph::UnGraph<u32, ()>;

/// Unordered pair of vertices, always stored as `(min, max)`.
pub type Edge = (usize, usize);

/// Normalizes an unordered pair so that the smaller id comes first.
pub fn edge(u: usize, v: usize) -> Edge {
    if u <= v { (u, v) } else { (v, u) }
}

/// Enum to mark edges in DFS tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DFSEdgeLabel {
    Tree,
    Back,
}

impl std::fmt::Display for DFSEdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DFSEdgeLabel::Tree => write!(f, "Tree"),
            DFSEdgeLabel::Back => write!(f, "Back"),
        }
    }
}
