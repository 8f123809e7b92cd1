use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Connected components of undirected graphs.
///
/// Isolated vertices form components of their own, which is what the cycle space dimension
/// `|E| - |V| + P` expects.
pub trait Connectivity: AdjacencyList + Traversal + GraphType<Dir = Undirected> + Sized {
    /// Iterates over all connected components (singletons included)
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (singletons included)
    ///
    /// # Example
    /// ```
    /// use ucycles::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2)]);
    /// assert_eq!(g.number_of_connected_components(), 3);
    /// assert_eq!(AdjArrayUndir::new(0).number_of_connected_components(), 0);
    /// ```
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType<Dir = Undirected> + Sized {}

/// Iterator over the connected components of an undirected graph.
/// Components are returned in order of their smallest node; nodes within a component in BFS order.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList + GraphType<Dir = Undirected> {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn singletons_are_components() {
        let mut graph = AdjArrayUndir::new(7);
        graph.add_edges([(1, 2), (2, 3), (4, 5)]);

        let ccs = graph.connected_components().collect_vec();
        assert_eq!(ccs, vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]);
        assert_eq!(graph.number_of_connected_components(), 4);
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArrayUndir::new(0);
        assert_eq!(graph.connected_components().count(), 0);
        assert_eq!(graph.number_of_connected_components(), 0);
    }

    #[test]
    fn long_cycle_is_connected() {
        let n: Node = 10_000;
        let mut graph = AdjArrayUndir::new(n);
        graph.connect_cycle(0..n);
        let ccs = graph.connected_components().collect_vec();
        assert_eq!(ccs.len(), 1);
        assert_eq!(ccs[0].len(), n as usize);
    }

    #[test]
    fn components_partition_gnp() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for i in 1..10 {
            let n = 500;
            let graph = AdjArrayUndir::gnp(rng, n, 0.5 / (n as f64) * (i as f64));
            let ccs = graph.connected_components().collect_vec();

            assert_eq!(ccs.iter().map(|cc| cc.len()).sum::<usize>(), n as usize);
            for cc in &ccs {
                for &u in cc {
                    assert!(graph.neighbors_of(u).all(|v| cc.contains(&v)));
                }
            }
        }
    }
}
