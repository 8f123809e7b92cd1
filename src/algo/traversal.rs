/*!
Breadth-first traversal.

This module provides:
- A generic traversal iterator ([`TraversalSearch`]) parameterized by the item it yields
  (plain nodes or `(predecessor, node)` pairs) and by the visited-set implementation.
- [`TraversalTree`], which turns a traversal with predecessors into parent and depth arrays.
- A high-level [`Traversal`] trait that exposes the searches directly as methods on graphs.

The visited-set lives inside the iterator and is dropped with it, so a graph is never
mutated by a search and any number of searches may run on it concurrently.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`] — stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] — stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Generic breadth-first traversal iterator.
///
/// Maintains a FIFO frontier of nodes to visit and a set of discovered nodes.
pub struct TraversalSearch<'a, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: VecDeque<I>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, Node, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> = TraversalSearch<'a, G, PredecessorOfNode, NodeBitSet>;

impl<G, I, V> Iterator for TraversalSearch<'_, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop_front()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.insert(v) {
                self.sequencer.push_back(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.len(),
            Some(self.graph.len() + self.sequencer.len() - self.visited.len()),
        )
    }
}

impl<'a, G, I, V> TraversalSearch<'a, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: VecDeque::from([I::new_without_predecessor(start)]),
            _item: PhantomData,
        }
    }
}

impl<'a, G, I, V> TraversalSearch<'a, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Returns the graph being traversed.
    pub fn graph_ref(&self) -> &'a G {
        self.graph
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.sequencer.is_empty());
        match self.graph.vertices_range().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push_back(I::new_without_predecessor(x));
                true
            }
        }
    }
}

/// Parent and depth arrays of a traversal tree together with the discovery order.
///
/// Unvisited nodes have parent and depth `INVALID_NODE`; the start node is its own parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeArrays {
    pub parent: Vec<Node>,
    pub depth: Vec<Node>,
    pub order: Vec<Node>,
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure.
pub trait TraversalTree<'a, G>: Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Returns the traversed graph
    fn tree_graph(&self) -> &'a G;

    /// Consumes the traversal and records parent, depth (root depth = 0) and discovery order
    /// of every visited node.
    ///
    /// # Examples
    /// ```
    /// use ucycles::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
    ///
    /// let tree = g.bfs_with_predecessor(0).tree_arrays();
    /// assert_eq!(tree.parent, vec![0, 0, 1, INVALID_NODE]);
    /// assert_eq!(tree.depth, vec![0, 1, 2, INVALID_NODE]);
    /// assert_eq!(tree.order, vec![0, 1, 2]);
    /// ```
    fn tree_arrays(self) -> TreeArrays {
        let n = self.tree_graph().len();
        let mut tree = TreeArrays {
            parent: vec![INVALID_NODE; n],
            depth: vec![INVALID_NODE; n],
            order: Vec::new(),
        };

        for pred_with_item in self {
            let u = pred_with_item.item();
            let (p, d) = match pred_with_item.predecessor() {
                Some(p) => (p, tree.depth[p as usize] + 1),
                None => (u, 0),
            };
            tree.parent[u as usize] = p;
            tree.depth[u as usize] = d;
            tree.order.push(u);
        }

        tree
    }
}

impl<'a, G, V> TraversalTree<'a, G> for TraversalSearch<'a, G, PredecessorOfNode, V>
where
    G: AdjacencyList,
    V: Set<Node>,
{
    fn tree_graph(&self) -> &'a G {
        self.graph_ref()
    }
}

/// Provides convenient traversal methods
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use ucycles::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use ucycles::{prelude::*, algo::{*, traversal::SequencedItem}};
    ///
    /// let g = AdjArrayUndir::from_edges(2, [(0, 1)]);
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
