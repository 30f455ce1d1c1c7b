use crate::graph::Graph;

/// Iterates over every simple graph on `n` labelled vertices.
///
/// Bit `k` of the mask decides whether the `k`-th pair `(i, j)`, `i < j`, is an edge.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * n.saturating_sub(1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut edges = Vec::new();
        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    edges.push((i, j));
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(Graph::from_edges(self.n, &edges).expect("enumerated edges are in range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_every_graph_once() {
        assert_eq!(GraphEnumeratorState::new(1).count(), 1);
        assert_eq!(GraphEnumeratorState::new(3).count(), 8);
        assert_eq!(GraphEnumeratorState::new(4).count(), 64);

        let complete = GraphEnumeratorState::new(4).last().unwrap();
        assert_eq!(complete.edge_count(), 6);
    }
}
