use crate::graph::Graph;
use crate::types::{Edge, UnGraph, edge};
use petgraph::algo::connected_components;
use std::collections::BTreeSet;

/// Copies `graph` into petgraph, skipping edges for which `keep` says no.
fn to_petgraph(graph: &Graph, mut keep: impl FnMut(usize, usize, usize) -> bool) -> UnGraph {
    let mut g = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..graph.vertex_count()).map(|i| g.add_node(i as u32)).collect();
    for (copy, (u, w)) in graph.edges().into_iter().enumerate() {
        if keep(copy, u, w) {
            g.add_edge(nodes[u], nodes[w], ());
        }
    }
    g
}

/// Vertices whose removal increases the number of connected components.
pub fn articulation_points(graph: &Graph) -> BTreeSet<usize> {
    let base = connected_components(&to_petgraph(graph, |_, _, _| true));
    (0..graph.vertex_count())
        .filter(|&x| {
            // x stays as an isolated vertex, hence the -1
            connected_components(&to_petgraph(graph, |_, u, w| u != x && w != x)) - 1 > base
        })
        .collect()
}

/// Edges whose removal increases the number of connected components.
/// An edge forming a whole component on its own (K2) does not count.
pub fn bridges(graph: &Graph) -> BTreeSet<Edge> {
    let base = connected_components(&to_petgraph(graph, |_, _, _| true));
    graph
        .edges()
        .into_iter()
        .enumerate()
        .filter(|&(skip, _)| connected_components(&to_petgraph(graph, |copy, _, _| copy != skip)) > base)
        .map(|(_, (u, w))| edge(u, w))
        .filter(|&(u, w)| graph.distinct_degree(u) > 1 || graph.distinct_degree(w) > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_on_path() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(articulation_points(&g), BTreeSet::from([1]));
        assert_eq!(bridges(&g), BTreeSet::from([(0, 1), (1, 2)]));
    }

    #[test]
    fn test_oracle_on_lone_edge() {
        let g = Graph::from_edges(3, &[(0, 1)]).unwrap();
        assert!(articulation_points(&g).is_empty());
        assert!(bridges(&g).is_empty());
    }

    #[test]
    fn test_oracle_on_double_edge() {
        let g = Graph::from_edges(2, &[(0, 1), (0, 1)]).unwrap();
        assert!(articulation_points(&g).is_empty());
        assert!(bridges(&g).is_empty());
    }
}
