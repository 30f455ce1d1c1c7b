/// Order in which the DFS forest builder picks roots and pushes neighbours.
///
/// Any order gives a valid forest. Structural results (cut vertices, bridges,
/// blocks) do not depend on it, only the discovery time numbering does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Smallest unvisited vertex becomes the next root, neighbours are pushed in adjacency order.
    #[default]
    Natural,
    /// Roots and push order are permuted by an RNG seeded with `seed`.
    Shuffled { seed: u64 },
}

/// Knobs of a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub traversal: TraversalOrder,
    /// Fail with an invariant violation when the low-link and the ear decomposition
    /// disagree about articulation points.
    pub cross_check: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            traversal: TraversalOrder::Natural,
            cross_check: true,
        }
    }
}

impl Config {
    pub fn with_traversal(mut self, traversal: TraversalOrder) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_cross_check(mut self, cross_check: bool) -> Self {
        self.cross_check = cross_check;
        self
    }
}
