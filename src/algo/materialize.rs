/*!
# Materialization

Turns the cycles of a basis into small stand-alone graphs. Every [`CycleGraph`] contains exactly the
edges and vertices of one cycle with local ids `0..k`, a [`NodeMapper`] back to the ids of the input
graph, and a copy of all node and edge attributes of the input.
*/

use itertools::Itertools;

use super::*;

/// A single cycle as its own graph.
///
/// Local ids follow the walk of the cycle it was built from: local node `0` is the first vertex of
/// the walk, local node `1` the second one and so on.
#[derive(Debug, Clone)]
pub struct CycleGraph {
    graph: AttributedGraph<AdjArrayUndir>,
    mapper: NodeMapper,
}

impl CycleGraph {
    /// Builds the graph of `cycle` and copies the attributes of all its nodes and edges from
    /// `source`
    pub fn from_cycle<S: AttributeSource>(source: &S, cycle: &Cycle) -> Self {
        let mapper = NodeMapper::from_first_occurrence(cycle.walk().iter().copied());
        let local_edges = mapper
            .relabelled_edges(cycle.edges().iter().copied())
            .collect_vec();

        let mut graph = AttributedGraph::new(AdjArrayUndir::from_edges(
            mapper.len(),
            local_edges.iter(),
        ));

        for (new, &old) in cycle.walk().iter().enumerate() {
            if let Some(attrs) = source.node_attributes(old) {
                for (key, value) in attrs {
                    graph.set_node_attr(new as Node, key.clone(), value.clone());
                }
            }
        }

        for (&old, &Edge(u, v)) in cycle.edges().iter().zip(&local_edges) {
            if let Some(attrs) = source.edge_attributes(old) {
                for (key, value) in attrs {
                    graph.set_edge_attr(u, v, key.clone(), value.clone());
                }
            }
        }

        Self { graph, mapper }
    }

    /// Builds the graph spanned by an arbitrary edge set without attributes. Local ids are
    /// assigned in order of first appearance of the endpoints; repeated edges are kept once.
    /// Whether the result actually is a simple cycle is only checked by
    /// [`CycleGraph::extract_path_origin`].
    ///
    /// # Example
    /// ```
    /// use ucycles::{prelude::*, algo::*};
    ///
    /// let two_triangles = CycleGraph::from_edges([
    ///     Edge(0, 1), Edge(1, 2), Edge(2, 0),
    ///     Edge(3, 4), Edge(4, 5), Edge(5, 3),
    /// ]);
    /// assert!(two_triangles.extract_path_origin().is_err());
    ///
    /// let square = CycleGraph::from_edges([Edge(5, 7), Edge(7, 9), Edge(9, 8), Edge(8, 5)]);
    /// assert_eq!(square.extract_path_origin().unwrap(), vec![5, 7, 9, 8, 5]);
    /// ```
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        let mapper = NodeMapper::from_first_occurrence(edges.iter().flat_map(|&Edge(u, v)| [u, v]));

        let mut local = AdjArrayUndir::new(mapper.len());
        for Edge(u, v) in mapper.relabelled_edges(edges) {
            local.try_add_edge(u, v);
        }

        Self {
            graph: AttributedGraph::new(local),
            mapper,
        }
    }

    /// The local graph with local ids
    pub fn graph(&self) -> &AttributedGraph<AdjArrayUndir> {
        &self.graph
    }

    /// Mapping between original (old) and local (new) ids
    pub fn mapper(&self) -> &NodeMapper {
        &self.mapper
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.graph.number_of_edges() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.graph.number_of_edges() == 0
    }

    /// Returns the normalized edges in original ids, in sorted order
    pub fn original_edges(&self) -> Vec<Edge> {
        self.graph
            .ordered_edges(true)
            .filter_map(|Edge(u, v)| {
                Some(Edge(self.mapper.old_id_of(u)?, self.mapper.old_id_of(v)?).normalized())
            })
            .sorted()
            .collect()
    }

    /// Returns the closed walk around the cycle in original ids, starting and ending at the first
    /// vertex of the cycle. Returns `NotACycle` if the graph is not a single simple cycle.
    pub fn extract_path_origin(&self) -> Result<Vec<Node>> {
        let n = self.graph.number_of_nodes();
        if n < 3
            || self.graph.number_of_edges() != n
            || self.graph.vertices().any(|u| self.graph.degree_of(u) != 2)
        {
            return Err(InvalidInput::NotACycle.into());
        }

        // local id 1 is the successor of 0 whenever the graph was built from a walk
        let first = self
            .graph
            .neighbors_of(0)
            .min()
            .ok_or(InvalidInput::NotACycle)?;

        let mut walk = Vec::with_capacity(n as usize + 1);
        walk.push(0);

        let (mut prev, mut cur) = (0, first);
        while cur != 0 {
            walk.push(cur);
            let next = self
                .graph
                .continue_path(prev, cur)
                .ok_or(InvalidInput::NotACycle)?;
            (prev, cur) = (cur, next);
        }
        walk.push(0);

        // a walk that closes early missed another component
        if walk.len() != n as usize + 1 {
            return Err(InvalidInput::NotACycle.into());
        }

        Ok(self.mapper.get_filtered_old_ids(walk).collect())
    }

    /// Returns attribute `key` of every vertex along [`CycleGraph::extract_path_origin`]
    /// (including the repeated first vertex at the end)
    pub fn path_attribute(&self, key: &str) -> Result<Vec<Option<&AttrValue>>> {
        Ok(self
            .extract_path_origin()?
            .into_iter()
            .map(|u| self.node_attr(u, key))
            .collect())
    }

    /// Returns attribute `key` of node `u` given by its original id
    pub fn node_attr(&self, u: Node, key: &str) -> Option<&AttrValue> {
        self.graph.node_attr(self.mapper.new_id_of(u)?, key)
    }

    /// Returns attribute `key` of an edge given by its original ids
    pub fn edge_attr(&self, edge: Edge, key: &str) -> Option<&AttrValue> {
        let Edge(u, v) = edge;
        let local = Edge(self.mapper.new_id_of(u)?, self.mapper.new_id_of(v)?);
        self.graph.edge_attr(local, key)
    }
}

/// Materializes every cycle of `basis` as a [`CycleGraph`], copying the attributes of `source`.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, algo::*};
///
/// let mut g = AttributedGraph::new(AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]));
/// for u in 0..3 {
///     g.set_node_attr(u, "pos", [u as f64, 0.0]);
/// }
///
/// let basis = g.minimum_cycle_basis().unwrap();
/// let cycles = materialize(&g, &basis);
///
/// assert_eq!(cycles.len(), 1);
/// let walk = cycles[0].extract_path_origin().unwrap();
/// assert_eq!(walk.len(), 4);
/// assert_eq!(walk.first(), walk.last());
/// assert_eq!(
///     cycles[0].node_attr(2, "pos"),
///     Some(&AttrValue::Point(vec![2.0, 0.0]))
/// );
/// ```
pub fn materialize<S: AttributeSource>(source: &S, basis: &CycleBasis) -> Vec<CycleGraph> {
    basis
        .iter()
        .map(|candidate| CycleGraph::from_cycle(source, candidate.cycle()))
        .collect()
}
