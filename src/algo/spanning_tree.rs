use super::*;

/// A breadth-first spanning tree of the component containing `root`.
///
/// The tree doubles as the *path dictionary* of the cycle extraction: for every reached vertex
/// [`SpanningTree::path_to`] returns the unique tree path from the root, which is a shortest path
/// in the graph. Ties between equally short paths are broken by BFS discovery order, i.e. by the
/// order of the adjacency lists.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, algo::*};
///
/// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
/// let tree = SpanningTree::bfs(&g, 0);
///
/// assert_eq!(tree.path_to(3), Some(vec![0, 2, 3]));
/// assert_eq!(tree.chords(&g).collect::<Vec<_>>(), vec![Edge(1, 2)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    root: Option<Node>,
    parent: Vec<Node>,
    depth: Vec<Node>,
    order: Vec<Node>,
}

impl SpanningTree {
    /// The tree of a graph without vertices
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the BFS tree rooted at `root`. Vertices outside the component of `root` stay
    /// unreached.
    /// ** Panics if `root >= n` **
    pub fn bfs<G: AdjacencyList>(graph: &G, root: Node) -> Self {
        let TreeArrays {
            parent,
            depth,
            order,
        } = graph.bfs_with_predecessor(root).tree_arrays();

        Self {
            root: Some(root),
            parent,
            depth,
            order,
        }
    }

    /// Returns the root or `None` for the empty tree
    pub fn root(&self) -> Option<Node> {
        self.root
    }

    /// Returns *true* if `u` was reached from the root
    pub fn reaches(&self, u: Node) -> bool {
        self.parent
            .get(u as usize)
            .is_some_and(|&p| p != INVALID_NODE)
    }

    /// Number of reached vertices
    pub fn number_of_reached(&self) -> NumNodes {
        self.order.len() as NumNodes
    }

    /// Reached vertices in BFS discovery order
    pub fn reached(&self) -> &[Node] {
        &self.order
    }

    /// Number of hops between the root and `u`
    pub fn depth_of(&self, u: Node) -> Option<Node> {
        self.reaches(u).then(|| self.depth[u as usize])
    }

    /// Tree parent of `u`; the root has no parent
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        let p = *self.parent.get(u as usize)?;
        (p != INVALID_NODE && p != u).then_some(p)
    }

    /// Returns the path `root, ..., u` or `None` if `u` was not reached
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        let mut path = Vec::with_capacity(self.depth_of(u)? as usize + 1);
        path.push(u);

        let mut v = u;
        while let Some(p) = self.parent_of(v) {
            path.push(p);
            v = p;
        }

        path.reverse();
        Some(path)
    }

    /// Returns *true* if `edge` (in either orientation) is a tree edge
    pub fn contains_edge(&self, edge: Edge) -> bool {
        let Edge(u, v) = edge;
        self.parent_of(u) == Some(v) || self.parent_of(v) == Some(u)
    }

    /// Iterates over all tree edges `(parent, child)` in BFS discovery order of the child
    pub fn tree_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.order
            .iter()
            .filter_map(|&u| self.parent_of(u).map(|p| Edge(p, u)))
    }

    /// Iterates over all chords, i.e. edges of `graph` within the tree's component that are not
    /// tree edges, as normalized edges in sorted order
    pub fn chords<'a, G: AdjacencyList>(&'a self, graph: &'a G) -> impl Iterator<Item = Edge> + 'a {
        graph.ordered_edges(true).filter(|&e| {
            self.reaches(e.0) && self.reaches(e.1) && !self.contains_edge(e)
        })
    }
}
