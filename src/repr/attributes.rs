use fxhash::FxHashMap;

use super::*;

/// Value stored in an attribute bag.
///
/// Attributes are opaque to all algorithms of this crate; they are only copied from an input
/// graph onto the materialized cycles (see [`materialize`](crate::algo::materialize())).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A coordinate vector such as a node position
    Point(Vec<f64>),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Vec<f64>> for AttrValue {
    fn from(value: Vec<f64>) -> Self {
        AttrValue::Point(value)
    }
}

impl<const N: usize> From<[f64; N]> for AttrValue {
    fn from(value: [f64; N]) -> Self {
        AttrValue::Point(value.to_vec())
    }
}

/// Key-value bag attached to a node or an edge
pub type Attributes = FxHashMap<String, AttrValue>;

/// Read access to per-node and per-edge attributes.
///
/// Plain representations carry no attributes and return `None` everywhere.
pub trait AttributeSource {
    /// Attributes of node `u`, if any were stored
    fn node_attributes(&self, u: Node) -> Option<&Attributes>;

    /// Attributes of an edge (in either orientation), if any were stored
    fn edge_attributes(&self, edge: Edge) -> Option<&Attributes>;
}

impl<Nbs: Neighborhood> AttributeSource for UndirectedGraph<Nbs> {
    fn node_attributes(&self, _u: Node) -> Option<&Attributes> {
        None
    }

    fn edge_attributes(&self, _edge: Edge) -> Option<&Attributes> {
        None
    }
}

/// A graph with an attribute bag on every node and edge.
///
/// All adjacency traits are forwarded to the wrapped representation, so every algorithm of this
/// crate runs directly on an `AttributedGraph`. The wrapped graph is never mutated by algorithms.
///
/// # Example
/// ```
/// use ucycles::prelude::*;
///
/// let mut g = AttributedGraph::new(AdjArrayUndir::from_edges(2, [(0, 1)]));
/// g.set_node_attr(0, "pos", [0.0, 1.0, 2.0]);
/// assert!(g.set_edge_attr(1, 0, "weight", 2.5));
///
/// assert_eq!(g.node_attr(0, "pos"), Some(&AttrValue::Point(vec![0.0, 1.0, 2.0])));
/// assert_eq!(g.edge_attr(Edge(0, 1), "weight"), Some(&AttrValue::Float(2.5)));
/// assert!(!g.set_edge_attr(0, 0, "weight", 1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributedGraph<G> {
    graph: G,
    node_attrs: Vec<Attributes>,
    edge_attrs: FxHashMap<Edge, Attributes>,
}

impl<G: GraphNodeOrder> AttributedGraph<G> {
    /// Wraps `graph` with empty attribute bags
    pub fn new(graph: G) -> Self {
        let n = graph.len();
        Self {
            graph,
            node_attrs: vec![Attributes::default(); n],
            edge_attrs: FxHashMap::default(),
        }
    }
}

impl<G> AttributedGraph<G> {
    /// Returns the wrapped representation
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Unwraps the representation and drops all attributes
    pub fn into_inner(self) -> G {
        self.graph
    }

    /// Sets attribute `key` of node `u`.
    /// ** Panics if `u >= n` **
    pub fn set_node_attr<K: Into<String>, V: Into<AttrValue>>(&mut self, u: Node, key: K, value: V) {
        self.node_attrs[u as usize].insert(key.into(), value.into());
    }

    /// Returns attribute `key` of node `u`
    /// ** Panics if `u >= n` **
    pub fn node_attr(&self, u: Node, key: &str) -> Option<&AttrValue> {
        self.node_attrs[u as usize].get(key)
    }

    /// Returns attribute `key` of an edge
    pub fn edge_attr(&self, edge: Edge, key: &str) -> Option<&AttrValue> {
        self.edge_attrs.get(&edge.normalized())?.get(key)
    }
}

impl<G: AdjacencyTest> AttributedGraph<G> {
    /// Sets attribute `key` of edge `{u, v}`.
    /// Returns *false* (and stores nothing) if the edge does not exist.
    /// ** Panics if `u >= n || v >= n` **
    pub fn set_edge_attr<K: Into<String>, V: Into<AttrValue>>(
        &mut self,
        u: Node,
        v: Node,
        key: K,
        value: V,
    ) -> bool {
        if !self.graph.has_edge(u, v) {
            return false;
        }

        self.edge_attrs
            .entry(Edge(u, v).normalized())
            .or_default()
            .insert(key.into(), value.into());
        true
    }
}

impl<G> AttributeSource for AttributedGraph<G> {
    fn node_attributes(&self, u: Node) -> Option<&Attributes> {
        self.node_attrs.get(u as usize)
    }

    fn edge_attributes(&self, edge: Edge) -> Option<&Attributes> {
        self.edge_attrs.get(&edge.normalized())
    }
}

impl<G: GraphType> GraphType for AttributedGraph<G> {
    type Dir = G::Dir;
}

impl<G: GraphNodeOrder> GraphNodeOrder for AttributedGraph<G> {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl<G: GraphEdgeOrder> GraphEdgeOrder for AttributedGraph<G> {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl<G: AdjacencyList> AdjacencyList for AttributedGraph<G> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.graph.degree_of(u)
    }
}

impl<G: AdjacencyTest> AdjacencyTest for AttributedGraph<G> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }
}
