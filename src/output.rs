use crate::analysis::AnalysisResult;
use crate::block_cut::{BlockCutNode, BlockCutTree};
use crate::error::Result;
use crate::graph::Graph;
use crate::types::{DFSEdgeLabel, Edge, edge};
use dot::{Edges, GraphWalk, Labeller, Nodes};
use hashbrown::HashMap;

type Node = usize;

#[derive(Debug, Clone)]
struct DrawnEdge {
    source: Node,
    target: Node,
    label: DFSEdgeLabel,
}

struct ForestDrawing<'a> {
    graph: &'a Graph,
    nodes: Vec<Node>,
    edges: Vec<DrawnEdge>,
}

impl<'a> Labeller<'a, Node, DrawnEdge> for ForestDrawing<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("forest").expect("valid dot identifier")
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).expect("valid dot identifier")
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let Some(tree) = self.graph.tree_of(*n).map(|i| &self.graph.forest()[i]) else {
            return dot::LabelText::label(n.to_string());
        };
        match tree.state(*n) {
            Ok(state) => dot::LabelText::label(format!(
                "{}{}\nd:{} low:{}{}",
                n,
                if tree.root == *n { " (root)" } else { "" },
                state.discovery_time,
                state.low,
                if state.is_articulation { "\ncut" } else { "" }
            )),
            Err(_) => dot::LabelText::label(n.to_string()),
        }
    }

    fn edge_label(&self, e: &DrawnEdge) -> dot::LabelText<'a> {
        match e.label {
            DFSEdgeLabel::Tree => dot::LabelText::label(""),
            DFSEdgeLabel::Back => dot::LabelText::label("back"),
        }
    }
}

impl<'a> GraphWalk<'a, Node, DrawnEdge> for ForestDrawing<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, DrawnEdge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &DrawnEdge) -> Node {
        e.source
    }

    fn target(&self, e: &DrawnEdge) -> Node {
        e.target
    }
}

/// Returns the DFS forest of `graph` in dot format.
///
/// Tree edges point from parent to child, back edges point from the descendant up to
/// the ancestor and are labelled `back`. Nodes show discovery time and lowpoint.
///
/// Use returned string with `dot` not `neato`.
pub fn draw_forest(graph: &Graph) -> Result<String> {
    let mut drawing = ForestDrawing {
        graph,
        nodes: (0..graph.vertex_count()).collect(),
        edges: Vec::new(),
    };

    for tree in graph.forest() {
        for (p, c) in tree.tree_edges() {
            drawing.edges.push(DrawnEdge {
                source: p,
                target: c,
                label: DFSEdgeLabel::Tree,
            });
        }
        for back_edge in &tree.back_edges {
            drawing.edges.push(DrawnEdge {
                source: back_edge.descendant,
                target: back_edge.ancestor,
                label: DFSEdgeLabel::Back,
            });
        }
    }
    drawing.edges.sort_by_key(|e| (e.source, e.target));

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&drawing, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer.into_inner()).into_owned())
}

/// Returns the graph in DOT format with the analysis drawn on top of it.
///
/// Articulation points are red, bridges are bold and red, every other edge is
/// labelled with the index of its biconnected component.
///
/// Intended to be used with `neato`.
pub fn draw_analysis(graph: &Graph, result: &AnalysisResult) -> String {
    let block_of: HashMap<Edge, usize> = result
        .biconnected_components
        .iter()
        .enumerate()
        .flat_map(|(i, block)| block.iter().map(move |&e| (e, i)))
        .collect();

    let mut output = String::from("graph {\n");
    output.push_str("  node [shape=circle, style=filled];\n");

    for v in 0..graph.vertex_count() {
        let color = if result.is_articulation_point(v) {
            "red"
        } else {
            "lightblue"
        };
        output.push_str(&format!("  {} [label=\"{}\", fillcolor={}];\n", v, v, color));
    }

    for (u, v) in graph.edges() {
        if result.is_bridge(u, v) {
            output.push_str(&format!("  {} -- {} [style=bold, color=red];\n", u, v));
        } else if let Some(block) = block_of.get(&edge(u, v)) {
            output.push_str(&format!("  {} -- {} [label=\"B{}\"];\n", u, v, block));
        } else {
            output.push_str(&format!("  {} -- {};\n", u, v));
        }
    }

    output.push_str("}\n");
    output
}

/// Returns the block-cut tree in DOT format. Blocks are boxes listing their vertices,
/// cut vertices are circles.
pub fn draw_block_cut_tree(bct: &BlockCutTree) -> String {
    let mut output = String::from("graph {\n");

    for node in bct.graph.node_indices() {
        match bct.graph[node] {
            BlockCutNode::Block(id) => {
                let vertices: Vec<String> = bct.blocks[id].iter().map(|v| v.to_string()).collect();
                output.push_str(&format!(
                    "  {} [shape=box, label=\"B{}: {}\"];\n",
                    node.index(),
                    id,
                    vertices.join(" ")
                ));
            }
            BlockCutNode::Cut(v) => {
                output.push_str(&format!(
                    "  {} [shape=circle, style=filled, fillcolor=red, label=\"{}\"];\n",
                    node.index(),
                    v
                ));
            }
        }
    }

    for e in bct.graph.edge_indices() {
        if let Some((a, b)) = bct.graph.edge_endpoints(e) {
            output.push_str(&format!("  {} -- {};\n", a.index(), b.index()));
        }
    }

    output.push_str("}\n");
    output
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
