// #![warn(missing_docs)]

//! # biconnectivity
//!
//! Articulation points, bridges and biconnected components of undirected,
//! possibly disconnected graphs.
//!
//! The analysis builds a DFS forest without recursion, computes Tarjan lowpoints on
//! every tree, independently decomposes every tree into ears (Schmidt's chain
//! decomposition) and checks that both agree, then groups the edges into blocks.
//!
//! ```
//! use biconnectivity::{Config, Graph, analyze};
//!
//! // two triangles sharing vertex 2
//! let mut graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]).unwrap();
//! let result = analyze(&mut graph, &Config::default()).unwrap();
//!
//! assert!(result.is_articulation_point(2));
//! assert!(result.bridges.is_empty());
//! assert_eq!(result.biconnected_components.len(), 2);
//! ```
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).

pub mod analysis;
pub mod block_cut;
pub mod config;
pub mod dfs_forest;
pub mod ear;
pub mod error;
pub mod graph;
pub mod input;
pub mod low_link;
pub mod output;
pub mod types;

#[cfg(test)]
mod testing;

pub use analysis::{AnalysisResult, analyze};
pub use block_cut::{BlockCutTree, get_block_cut_tree};
pub use config::{Config, TraversalOrder};
pub use error::{Error, Result};
pub use graph::Graph;
pub use input::{from_edge_list_file, from_file};
pub use types::{Edge, UnGraph};
