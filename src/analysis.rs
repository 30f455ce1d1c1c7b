use crate::block_cut::biconnected_components;
use crate::config::Config;
use crate::ear::{EarDecomposition, EarState};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::low_link::compute_low;
use crate::types::Edge;
use log::info;
use std::collections::BTreeSet;

/// Everything the analysis finds about a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub articulation_points: BTreeSet<usize>,
    pub bridges: BTreeSet<Edge>,
    /// Edge sets of the blocks. Bridges and lone edges are single-edge blocks.
    pub biconnected_components: Vec<BTreeSet<Edge>>,
    /// Ear decomposition of every connected component, in forest order.
    pub components: Vec<EarDecomposition>,
}

impl AnalysisResult {
    pub fn is_articulation_point(&self, v: usize) -> bool {
        self.articulation_points.contains(&v)
    }

    pub fn is_bridge(&self, u: usize, v: usize) -> bool {
        self.bridges.contains(&crate::types::edge(u, v))
    }
}

/// Runs the whole pipeline on `graph`.
///
/// Builds the DFS forest, computes lowpoints, decomposes every tree into ears and
/// groups the edges into blocks. With `config.cross_check` set, the articulation
/// points found by lowpoints and by ears must be identical.
pub fn analyze(graph: &mut Graph, config: &Config) -> Result<AnalysisResult> {
    graph.build_forest(config)?;
    analyze_forest(graph, config)
}

/// Everything [`analyze`] does after the forest is built, on the forest `graph` holds.
pub(crate) fn analyze_forest(graph: &mut Graph, config: &Config) -> Result<AnalysisResult> {
    let mut low_articulation = BTreeSet::new();
    let (adjacency, forest) = graph.parts_mut();
    for tree in forest.iter_mut() {
        low_articulation.extend(compute_low(tree, adjacency)?);
    }

    let mut ears = EarState::new(graph);
    let components = graph
        .forest()
        .iter()
        .map(|tree| ears.decompose(tree))
        .collect::<Result<Vec<_>>>()?;
    let outcome = ears.finish(graph);

    if config.cross_check && outcome.articulation_points != low_articulation {
        return Err(Error::invariant(format!(
            "articulation points disagree: low-link {:?}, ears {:?}",
            low_articulation, outcome.articulation_points
        )));
    }

    let biconnected_components = biconnected_components(graph, &outcome)?;

    info!(
        "{} vertices, {} edges, {} components: {} articulation points, {} bridges, {} blocks",
        graph.vertex_count(),
        graph.edge_count(),
        components.len(),
        outcome.articulation_points.len(),
        outcome.bridges.len(),
        biconnected_components.len()
    );

    Ok(AnalysisResult {
        articulation_points: outcome.articulation_points,
        bridges: outcome.bridges,
        biconnected_components,
        components,
    })
}
