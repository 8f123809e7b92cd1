/*!
# Fundamental Cycles

Every chord of a spanning tree closes exactly one cycle with the tree paths to its endpoints.
[`extract_cycle`] reconstructs that cycle from the path dictionary of a [`SpanningTree`];
[`FundamentalCycleBasis`] collects the fundamental cycles of one spanning forest, which already
form a (generally not minimum) cycle basis.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use rand::Rng;
use tracing::debug;

use super::*;

/// A simple cycle stored as a vertex walk and the edges along it.
///
/// The walk is not closed explicitly: `edges()[i]` connects `walk()[i]` and `walk()[i + 1]`, the
/// last edge connects the last vertex back to the first one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    walk: Vec<Node>,
    edges: Vec<Edge>,
}

impl Cycle {
    /// Creates the cycle visiting `walk` in order and returning to its first vertex.
    /// Returns `NotACycle` if fewer than three vertices are given or a vertex repeats.
    ///
    /// # Example
    /// ```
    /// use ucycles::{prelude::*, algo::*};
    ///
    /// let cycle = Cycle::from_walk(vec![2, 0, 1]).unwrap();
    /// assert_eq!(cycle.edges(), &[Edge(2, 0), Edge(0, 1), Edge(1, 2)]);
    /// assert!(Cycle::from_walk(vec![0, 1, 0]).is_err());
    /// ```
    pub fn from_walk(walk: Vec<Node>) -> Result<Self> {
        if walk.len() < 3 || !walk.iter().all_unique() {
            return Err(InvalidInput::NotACycle.into());
        }

        let edges = walk
            .iter()
            .circular_tuple_windows()
            .map(|(&u, &v)| Edge(u, v))
            .collect();

        Ok(Self { walk, edges })
    }

    /// Number of edges (and vertices) of the cycle
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always *false* for a valid cycle
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The vertices of the cycle in walk order
    pub fn walk(&self) -> &[Node] {
        &self.walk
    }

    /// The edges of the cycle oriented along the walk
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The closing edge from the last vertex of the walk back to the first one.
    /// For an extracted fundamental cycle this is the chord.
    pub fn closing_edge(&self) -> Edge {
        self.edges[self.edges.len() - 1]
    }

    /// Returns *true* if `edge` (in either orientation) lies on the cycle
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.edges.iter().any(|e| e.same_endpoints(&edge))
    }

    /// Returns the normalized edges of the cycle in sorted order
    pub fn normalized_edges(&self) -> Vec<Edge> {
        self.edges.iter().map(|e| e.normalized()).sorted().collect()
    }
}

/// Reconstructs the fundamental cycle that `chord` closes in the tree given by `paths`.
///
/// Both root paths are reversed so that they start at the chord endpoints. Scanning the longer
/// one (ties: the path of the chord's second endpoint) for the first vertex that also lies on the
/// other yields the lowest common ancestor. The walk follows the first path up to the ancestor and
/// the second one back down; the chord closes it.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, algo::*};
///
/// // a square rooted at 0; the chord (2, 3) closes the whole square
/// let g = AdjArrayUndir::from_edges(4, [(0, 1), (0, 3), (3, 2), (1, 2)]);
/// let tree = SpanningTree::bfs(&g, 0);
///
/// let cycle = extract_cycle(&tree, Edge(2, 3)).unwrap();
/// assert_eq!(cycle.walk(), &[2, 1, 0, 3]);
/// assert_eq!(cycle.closing_edge(), Edge(3, 2));
/// ```
pub fn extract_cycle(paths: &SpanningTree, chord: Edge) -> Result<Cycle> {
    let Edge(a, b) = chord;
    if chord.is_loop() {
        return Err(InvalidInput::SelfLoop(a).into());
    }
    if paths.contains_edge(chord) {
        return Err(InvalidInput::TreeEdge(chord).into());
    }

    let mut to_a = paths.path_to(a).ok_or(InvalidInput::Unreachable(a))?;
    let mut to_b = paths.path_to(b).ok_or(InvalidInput::Unreachable(b))?;
    to_a.reverse();
    to_b.reverse();

    let (l1, l2) = if to_a.len() > to_b.len() {
        (to_a, to_b)
    } else {
        (to_b, to_a)
    };

    let position_in_l2: FxHashMap<Node, usize> =
        l2.iter().enumerate().map(|(i, &u)| (u, i)).collect();
    let (idx1, idx2) = l1
        .iter()
        .enumerate()
        .find_map(|(i, u)| Some((i, *position_in_l2.get(u)?)))
        .ok_or(InvalidInput::NotACycle)?;

    let walk = l1[..=idx1]
        .iter()
        .chain(l2[..idx2].iter().rev())
        .copied()
        .collect_vec();

    Cycle::from_walk(walk)
}

/// A cycle together with its stable edge labels, as produced by candidate generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCycle {
    key: usize,
    root: Node,
    cycle: Cycle,
    labels: Vec<EdgeLabel>,
}

impl CandidateCycle {
    /// Attaches the stable labels of all edges of `cycle`.
    /// Returns `UnknownEdge` if the cycle uses an edge that was not labelled.
    pub fn new(key: usize, root: Node, cycle: Cycle, edge_labels: &EdgeLabels) -> Result<Self> {
        let labels = cycle
            .edges()
            .iter()
            .map(|&e| edge_labels.label_of(e).ok_or(InvalidInput::UnknownEdge(e)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            key,
            root,
            cycle,
            labels,
        })
    }

    /// Index of the candidate in discovery order
    pub fn key(&self) -> usize {
        self.key
    }

    /// Root of the spanning tree the candidate was extracted from
    pub fn root(&self) -> Node {
        self.root
    }

    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// Stable labels of the edges, in the order of [`Cycle::edges`]
    pub fn labels(&self) -> &[EdgeLabel] {
        &self.labels
    }

    /// Stable labels in increasing order; equal for two candidates iff their edge sets are equal
    pub fn sorted_labels(&self) -> Vec<EdgeLabel> {
        self.labels.iter().copied().sorted_unstable().collect()
    }

    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }

    pub fn walk(&self) -> &[Node] {
        self.cycle.walk()
    }

    pub fn edges(&self) -> &[Edge] {
        self.cycle.edges()
    }

    pub fn into_cycle(self) -> Cycle {
        self.cycle
    }
}

/// Computes the fundamental cycle basis of one BFS spanning forest.
///
/// The tree of the component containing `root` is built first; every further component is
/// covered by a tree rooted at its smallest vertex. The result has exactly `nullity` cycles but
/// is in general longer than a minimum cycle basis.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, algo::*};
///
/// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
/// let basis = FundamentalCycleBasis::new(&g).root(1).compute().unwrap();
///
/// assert_eq!(basis.len(), 2);
/// assert!(basis.iter().all(|c| c.root() == 1));
/// ```
#[derive(Debug, Clone)]
pub struct FundamentalCycleBasis<'a, G> {
    graph: &'a G,
    root: Node,
    validate: bool,
}

impl<'a, G> FundamentalCycleBasis<'a, G>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphType<Dir = Undirected>,
{
    /// Creates the algorithm with root `0`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            root: 0,
            validate: true,
        }
    }

    /// Sets the root of the first spanning tree
    pub fn root(mut self, root: Node) -> Self {
        self.root = root;
        self
    }

    /// Draws the root of the first spanning tree uniformly at random
    pub fn random_root<R: Rng>(mut self, rng: &mut R) -> Self {
        if !self.graph.is_empty() {
            self.root = rng.random_range(self.graph.vertices_range());
        }
        self
    }

    /// Enables/disables the upfront check for self-loops
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Computes the basis. Fails with [`InvalidInput::Unreachable`] if the graph has vertices
    /// and `root >= n`.
    pub fn compute(&self) -> Result<CycleBasis> {
        if self.validate {
            validate_input(self.graph)?;
        }
        if !self.graph.is_empty() && self.root >= self.graph.number_of_nodes() {
            return Err(InvalidInput::Unreachable(self.root).into());
        }

        let edge_labels = EdgeLabels::new(self.graph);
        let nullity = nullity_of(self.graph);
        let mut cycles = Vec::with_capacity(nullity);

        if !self.graph.is_empty() {
            let mut covered = self.graph.vertex_bitset_unset();
            let roots = std::iter::once(self.root).chain(self.graph.vertices_range());

            for root in roots {
                if covered.get_bit(root) {
                    continue;
                }

                let tree = SpanningTree::bfs(self.graph, root);
                for &u in tree.reached() {
                    covered.set_bit(u);
                }

                for chord in tree.chords(self.graph) {
                    let cycle = extract_cycle(&tree, chord)?;
                    cycles.push(CandidateCycle::new(cycles.len(), root, cycle, &edge_labels)?);
                }
            }
        }

        debug!(
            nodes = self.graph.number_of_nodes(),
            edges = self.graph.number_of_edges(),
            nullity,
            found = cycles.len(),
            "fundamental cycle basis"
        );

        Ok(CycleBasis::new(cycles, edge_labels))
    }
}
