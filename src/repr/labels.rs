use fxhash::FxHashMap;

use super::*;

/// Stable labels `0..m` for the edges of an undirected graph.
///
/// Labels are assigned in increasing order of the normalized edges, so two graphs with the same
/// edge set always receive the same labelling. The mapping is computed once at the start of a
/// basis computation and never changes afterwards.
///
/// # Example
/// ```
/// use ucycles::prelude::*;
///
/// let g = AdjArrayUndir::from_edges(3, [(2, 1), (0, 1), (0, 2)]);
/// let labels = EdgeLabels::new(&g);
///
/// assert_eq!(labels.label_of(Edge(0, 1)), Some(0));
/// assert_eq!(labels.label_of(Edge(2, 0)), Some(1));
/// assert_eq!(labels.edge_of(2), Edge(1, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeLabels {
    labels: FxHashMap<Edge, EdgeLabel>,
    edges: Vec<Edge>,
}

impl EdgeLabels {
    /// Labels every edge of `graph`
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        let edges: Vec<Edge> = graph.ordered_edges(true).collect();
        let labels = edges
            .iter()
            .enumerate()
            .map(|(label, &e)| (e, label as EdgeLabel))
            .collect();

        Self { labels, edges }
    }

    /// Returns the label of an edge (in either orientation) or `None` if it is not part of the graph
    pub fn label_of(&self, edge: Edge) -> Option<EdgeLabel> {
        self.labels.get(&edge.normalized()).copied()
    }

    /// Returns the normalized edge carrying `label`.
    /// ** Panics if `label >= m` **
    pub fn edge_of(&self, label: EdgeLabel) -> Edge {
        self.edges[label as usize]
    }

    /// Number of labelled edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if no edge was labelled
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over `(label, edge)` pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (EdgeLabel, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(label, &e)| (label as EdgeLabel, e))
    }
}
