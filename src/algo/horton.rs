/*!
# Horton Candidates

The candidate set from which a minimum cycle basis is selected: for every vertex `v` a BFS tree
rooted at `v` is built and every chord of that tree closes one fundamental cycle. Horton showed that
a minimum cycle basis can always be chosen from these cycles.
*/

use fxhash::FxHashSet;
use tracing::debug;

use super::*;

/// Generates the Horton superset of candidate cycles.
///
/// Roots are processed in ascending order and their cycles concatenated in root order; with the
/// `parallel` feature enabled and [`HortonCandidates::parallel`] set, the roots are distributed
/// over a rayon thread pool and merged back in the same order, so the output does not depend on
/// the number of threads.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, algo::*};
///
/// // triangle: every root sees the same cycle
/// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
///
/// let all = HortonCandidates::new(&g).dedup(false).generate().unwrap();
/// assert_eq!(all.len(), 3);
///
/// let unique = HortonCandidates::new(&g).generate().unwrap();
/// assert_eq!(unique.len(), 1);
/// assert_eq!(unique.get(0).unwrap().sorted_labels(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct HortonCandidates<'a, G> {
    graph: &'a G,
    parallel: bool,
    dedup: bool,
}

impl<'a, G> HortonCandidates<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected> + Sync,
{
    /// Creates the generator; deduplication is enabled and parallelism disabled by default
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            parallel: false,
            dedup: true,
        }
    }

    /// Processes the roots in parallel. Has no effect unless the `parallel` feature is enabled.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Keeps only the first candidate of every distinct edge set
    pub fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Extracts the fundamental cycles of the BFS tree rooted at `root`
    fn cycles_of_root(&self, root: Node) -> Result<Vec<Cycle>> {
        let tree = SpanningTree::bfs(self.graph, root);
        tree.chords(self.graph)
            .map(|chord| extract_cycle(&tree, chord))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn cycles_per_root(&self) -> Result<Vec<(Node, Vec<Cycle>)>> {
        use rayon::prelude::*;

        if self.parallel {
            self.graph
                .vertices_range()
                .into_par_iter()
                .map(|root| self.cycles_of_root(root).map(|cycles| (root, cycles)))
                .collect()
        } else {
            self.cycles_per_root_sequential()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn cycles_per_root(&self) -> Result<Vec<(Node, Vec<Cycle>)>> {
        if self.parallel {
            debug!("the `parallel` feature is disabled; generating candidates sequentially");
        }
        self.cycles_per_root_sequential()
    }

    fn cycles_per_root_sequential(&self) -> Result<Vec<(Node, Vec<Cycle>)>> {
        self.graph
            .vertices_range()
            .map(|root| self.cycles_of_root(root).map(|cycles| (root, cycles)))
            .collect()
    }

    /// Generates all candidates.
    /// Fails only if a cycle uses an edge that cannot be labelled, which cannot happen for the
    /// cycles of a simple graph.
    pub fn generate(&self) -> Result<CandidateCycles> {
        let edge_labels = EdgeLabels::new(self.graph);
        let per_root = self.cycles_per_root()?;

        let mut seen: FxHashSet<Vec<EdgeLabel>> = FxHashSet::default();
        let mut candidates = Vec::new();
        let mut extracted = 0usize;

        for (root, cycles) in per_root {
            extracted += cycles.len();
            for cycle in cycles {
                let candidate = CandidateCycle::new(candidates.len(), root, cycle, &edge_labels)?;
                if self.dedup && !seen.insert(candidate.sorted_labels()) {
                    continue;
                }
                candidates.push(candidate);
            }
        }

        debug!(
            nodes = self.graph.number_of_nodes(),
            extracted,
            candidates = candidates.len(),
            "generated horton candidates"
        );

        Ok(CandidateCycles {
            candidates,
            edge_labels,
        })
    }
}

/// The candidate cycles of a graph together with the stable edge labels they refer to.
/// Keys are `0..len` in discovery order.
#[derive(Debug, Clone, Default)]
pub struct CandidateCycles {
    candidates: Vec<CandidateCycle>,
    edge_labels: EdgeLabels,
}

impl CandidateCycles {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterates over the candidates in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &CandidateCycle> + '_ {
        self.candidates.iter()
    }

    /// Returns the candidate with the given key
    pub fn get(&self, key: usize) -> Option<&CandidateCycle> {
        self.candidates.get(key)
    }

    /// The labelling all candidates refer to
    pub fn edge_labels(&self) -> &EdgeLabels {
        &self.edge_labels
    }

    /// Iterates over `(key, labels)` for all candidates, labels in walk order
    pub fn label_dict(&self) -> impl Iterator<Item = (usize, &[EdgeLabel])> + '_ {
        self.candidates.iter().map(|c| (c.key(), c.labels()))
    }

    /// Returns the candidates sorted by length; candidates of equal length stay in discovery
    /// order.
    pub fn into_sorted_by_length(self) -> (Vec<CandidateCycle>, EdgeLabels) {
        let mut candidates = self.candidates;
        candidates.sort_by_key(|c| c.len());
        (candidates, self.edge_labels)
    }
}

impl<'a> IntoIterator for &'a CandidateCycles {
    type Item = &'a CandidateCycle;
    type IntoIter = std::slice::Iter<'a, CandidateCycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn square_with_diagonal() {
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);

        let all = HortonCandidates::new(&g).dedup(false).generate().unwrap();
        // every root of a connected graph contributes m - n + 1 chords
        assert_eq!(all.len(), 4 * 2);
        assert!(all.iter().enumerate().all(|(i, c)| c.key() == i));

        let unique = HortonCandidates::new(&g).generate().unwrap();
        let edge_sets = unique.iter().map(|c| c.sorted_labels()).collect_vec();
        assert!(edge_sets.iter().all_unique());
        assert_eq!(unique.iter().filter(|c| c.len() == 3).count(), 2);
        assert!(unique.iter().enumerate().all(|(i, c)| c.key() == i));

        let (sorted, labels) = unique.clone().into_sorted_by_length();
        assert!(sorted.iter().tuple_windows().all(|(a, b)| a.len() <= b.len()));
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn roots_in_ascending_order() {
        let mut g = AdjArrayUndir::new(6);
        g.connect_cycle(0..6);
        g.add_edge(0, 3);

        let candidates = HortonCandidates::new(&g).dedup(false).generate().unwrap();
        let roots = candidates.iter().map(|c| c.root()).collect_vec();
        assert!(roots.iter().tuple_windows().all(|(a, b)| a <= b));
        assert_eq!(roots.len(), 6 * 2);
    }

    #[test]
    fn disconnected_and_empty() {
        let g = AdjArrayUndir::from_edges(7, [(0, 1), (1, 2), (2, 0), (4, 5)]);
        let candidates = HortonCandidates::new(&g).generate().unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates.label_dict().count(), 1);

        let g = AdjArrayUndir::new(0);
        assert!(HortonCandidates::new(&g).generate().unwrap().is_empty());

        let mut g = AdjArrayUndir::new(10);
        g.connect_path(0..10);
        assert!(HortonCandidates::new(&g).generate().unwrap().is_empty());
    }

    #[test]
    fn labels_match_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);
        let g = AdjArrayUndir::gnp(rng, 25, 0.2);
        let candidates = HortonCandidates::new(&g).generate().unwrap();

        for candidate in &candidates {
            for (&edge, &label) in candidate.edges().iter().zip(candidate.labels()) {
                assert!(g.has_edge(edge.0, edge.1));
                assert_eq!(candidates.edge_labels().edge_of(label), edge.normalized());
            }
        }
    }

    #[test]
    fn parallel_flag_does_not_change_output() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let g = AdjArrayUndir::gnp(rng, 40, 0.1);

        let sequential = HortonCandidates::new(&g).generate().unwrap();
        let parallel = HortonCandidates::new(&g).parallel(true).generate().unwrap();
        assert_eq!(
            sequential.iter().collect_vec(),
            parallel.iter().collect_vec()
        );
    }
}
