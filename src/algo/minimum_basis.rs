/*!
# Minimum Cycle Basis

Greedy selection over the Horton candidates: sorted by length, a candidate is kept iff it is
linearly independent over GF(2) of the cycles kept so far. The first `nullity` cycles found this way
form a minimum cycle basis.

# Example
```
use ucycles::{prelude::*, algo::*, gens::*};

// two vertices joined by paths of length 2, 3 and 4
let g: AdjArrayUndir = theta_graph(&[2, 3, 4]);

let basis = MinimumCycleBasis::new(&g).compute().unwrap();
assert_eq!(basis.len(), 2);
assert_eq!(basis.total_length(), 5 + 6);
```
*/

use std::ops::Index;

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace, warn};

use super::*;

/// Returns the dimension `|E| - |V| + P` of the cycle space, where `P` counts connected components
/// including isolated vertices.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, algo::*};
///
/// let g = AdjArrayUndir::from_edges(7, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
/// assert_eq!(nullity_of(&g), 2);
/// ```
pub fn nullity_of<G>(graph: &G) -> usize
where
    G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Undirected>,
{
    let components = graph.number_of_connected_components() as usize;
    (graph.number_of_edges() as usize + components).saturating_sub(graph.len())
}

/// Checks the preconditions shared by all basis algorithms: no self-loops and no edges in a graph
/// without vertices.
pub fn validate_input<G>(graph: &G) -> Result<()>
where
    G: AdjacencyTest + GraphEdgeOrder,
{
    let m = graph.number_of_edges() as usize;
    if graph.is_empty() && m > 0 {
        return Err(InvalidInput::EdgesWithoutVertices(m).into());
    }

    if let Some(u) = graph.find_self_loop() {
        return Err(InvalidInput::SelfLoop(u).into());
    }

    Ok(())
}

/// An ordered list of cycles together with the edge labelling they refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleBasis {
    cycles: Vec<CandidateCycle>,
    edge_labels: EdgeLabels,
}

impl CycleBasis {
    pub fn new(cycles: Vec<CandidateCycle>, edge_labels: EdgeLabels) -> Self {
        Self {
            cycles,
            edge_labels,
        }
    }

    /// Number of cycles
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Iterates over the cycles in the order they were accepted
    pub fn iter(&self) -> impl Iterator<Item = &CandidateCycle> + '_ {
        self.cycles.iter()
    }

    /// Sum of the lengths of all cycles
    pub fn total_length(&self) -> usize {
        self.cycles.iter().map(|c| c.len()).sum()
    }

    /// Returns the sorted label list of every cycle
    pub fn label_vectors(&self) -> Vec<Vec<EdgeLabel>> {
        self.cycles.iter().map(|c| c.sorted_labels()).collect()
    }

    /// The labelling the cycles refer to
    pub fn edge_labels(&self) -> &EdgeLabels {
        &self.edge_labels
    }

    /// Returns *true* if the edge sets of all cycles are linearly independent over GF(2)
    pub fn is_independent(&self) -> bool {
        let mut matrix = Gf2Matrix::from_columns(
            self.edge_labels.len(),
            self.cycles
                .iter()
                .map(|c| c.labels().iter().map(|&l| l as usize)),
        );
        matrix.rank() == self.cycles.len()
    }

    pub fn into_cycles(self) -> Vec<CandidateCycle> {
        self.cycles
    }
}

impl Index<usize> for CycleBasis {
    type Output = CandidateCycle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cycles[index]
    }
}

impl<'a> IntoIterator for &'a CycleBasis {
    type Item = &'a CandidateCycle;
    type IntoIter = std::slice::Iter<'a, CandidateCycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}

/// Computes a minimum cycle basis of an unweighted undirected graph.
///
/// The candidates of [`HortonCandidates`] are processed in order of increasing length (ties in
/// discovery order). Edges are assigned matrix rows lazily in the order they are first seen; a
/// candidate that brings an unseen edge is independent of everything accepted so far and is kept
/// without further checks. Otherwise a GF(2) matrix with one column per accepted cycle plus the
/// candidate is eliminated to decide independence. The search stops once `nullity` cycles are
/// found.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, algo::*};
///
/// // two disjoint triangles and an isolated vertex
/// let g = AdjArrayUndir::from_edges(7, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
/// let basis = MinimumCycleBasis::new(&g).compute().unwrap();
///
/// assert_eq!(basis.len(), 2);
/// assert!(basis.iter().all(|c| c.len() == 3));
/// ```
#[derive(Debug, Clone)]
pub struct MinimumCycleBasis<'a, G> {
    graph: &'a G,
    parallel: bool,
    dedup: bool,
    validate: bool,
}

impl<'a, G> MinimumCycleBasis<'a, G>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphType<Dir = Undirected> + Sync,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            parallel: false,
            dedup: true,
            validate: true,
        }
    }

    /// Generates candidates in parallel (requires the `parallel` feature)
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Drops candidates whose edge set was already seen before sorting
    pub fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Enables/disables the upfront check for self-loops
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn compute(&self) -> Result<CycleBasis> {
        if self.validate {
            validate_input(self.graph)?;
        }

        let nullity = nullity_of(self.graph);
        if nullity == 0 {
            debug!(
                nodes = self.graph.number_of_nodes(),
                edges = self.graph.number_of_edges(),
                "graph is a forest; basis is empty"
            );
            return Ok(CycleBasis::new(Vec::new(), EdgeLabels::new(self.graph)));
        }

        let (candidates, edge_labels) = HortonCandidates::new(self.graph)
            .parallel(self.parallel)
            .dedup(self.dedup)
            .generate()?
            .into_sorted_by_length();
        let num_candidates = candidates.len();

        // edge -> row of the incidence matrix, in order of first appearance
        let mut rows_of_edges: FxHashMap<Edge, usize> = FxHashMap::default();
        let mut basis_rows: Vec<Vec<usize>> = Vec::with_capacity(nullity);
        let mut basis = Vec::with_capacity(nullity);

        for candidate in candidates {
            if basis.len() == nullity {
                break;
            }

            let mut has_new_edge = false;
            let rows = candidate
                .edges()
                .iter()
                .map(|e| {
                    let next_row = rows_of_edges.len();
                    *rows_of_edges.entry(e.normalized()).or_insert_with(|| {
                        has_new_edge = true;
                        next_row
                    })
                })
                .collect_vec();

            let independent = has_new_edge || {
                let columns = basis_rows
                    .iter()
                    .chain(std::iter::once(&rows))
                    .map(|column| column.iter().copied())
                    .collect_vec();
                Gf2Matrix::from_columns(rows_of_edges.len(), columns).compute_linear_independence()
            };

            trace!(
                key = candidate.key(),
                len = candidate.len(),
                has_new_edge,
                independent,
                "candidate"
            );

            if independent {
                basis_rows.push(rows);
                basis.push(candidate);
            }
        }

        if basis.len() < nullity {
            warn!(
                found = basis.len(),
                nullity,
                candidates = num_candidates,
                "ran out of candidate cycles"
            );
            return Err(CycleBasisError::Construction {
                found: basis.len(),
                nullity,
            });
        }

        let basis = CycleBasis::new(basis, edge_labels);
        debug!(
            nodes = self.graph.number_of_nodes(),
            edges = self.graph.number_of_edges(),
            nullity,
            candidates = num_candidates,
            total_length = basis.total_length(),
            "minimum cycle basis"
        );

        Ok(basis)
    }
}

/// Cycle basis computations as methods on the graph itself
pub trait CycleBasisAlgo:
    AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphType<Dir = Undirected> + Sync + Sized
{
    /// Computes a minimum cycle basis with the default configuration of [`MinimumCycleBasis`]
    fn minimum_cycle_basis(&self) -> Result<CycleBasis> {
        MinimumCycleBasis::new(self).compute()
    }

    /// Computes the fundamental cycle basis of the BFS forest whose first tree is rooted at `root`
    fn fundamental_cycle_basis(&self, root: Node) -> Result<CycleBasis> {
        FundamentalCycleBasis::new(self).root(root).compute()
    }

    /// Dimension of the cycle space
    fn nullity(&self) -> usize {
        nullity_of(self)
    }
}

impl<G> CycleBasisAlgo for G where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphType<Dir = Undirected> + Sync
{
}
