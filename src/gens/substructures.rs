/*!
# Substructure Generators

Utility methods to add common motifs to an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

and constructors for whole graphs whose minimum cycle bases are known:

- **Theta graphs**: two poles joined by internally disjoint paths
- **Grid graphs**: the planar `rows x cols` lattice

# Example

```rust
use ucycles::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use crate::utils::Set;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use ucycles::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last node
    /// is connected back to the first.
    ///
    /// # Example
    /// ```rust
    /// use ucycles::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(3);
    /// g.connect_cycle([0, 1, 2]);
    ///
    /// assert!(g.has_edge(2, 0));
    /// assert_eq!(g.number_of_edges(), 3);
    /// ```
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    /// If `with_loops` is `true`, each node also gets a self-loop.
    ///
    /// # Example
    /// ```rust
    /// use ucycles::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_clique(&NodeBitSet::new_with_bits_set(4, [0 as Node, 1, 3]), false);
    ///
    /// assert!(g.has_edge(0, 3));
    /// assert_eq!(g.number_of_edges(), 3);
    /// ```
    fn connect_clique<C: Set<Node>>(&mut self, nodes: &C, with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // walk the nodes once without cloning the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique<C: Set<Node>>(&mut self, nodes: &C, with_loops: bool) {
        for u in nodes.iter() {
            for v in nodes.iter() {
                let e = Edge(u, v);
                if (!with_loops && e.is_loop()) || (Self::is_undirected() && !e.is_normalized()) {
                    continue;
                }

                self.try_add_edge(u, v);
            }
        }
    }
}

/// Builds a theta graph: nodes `0` and `1` are joined by one internally disjoint path per entry
/// of `lengths`, the entry being the number of edges of that path. Internal nodes are numbered
/// consecutively from `2`, path by path.
/// ** Panics if a length is `0` or more than one length is `1` **
///
/// # Example
/// ```
/// use ucycles::{prelude::*, gens::*};
///
/// let g: AdjArrayUndir = theta_graph(&[1, 2, 3]);
/// assert_eq!(g.number_of_nodes(), 2 + 1 + 2);
/// assert_eq!(g.number_of_edges(), 6);
/// assert!(g.has_edge(0, 1));
/// ```
pub fn theta_graph<G>(lengths: &[NumNodes]) -> G
where
    G: GraphNew + GraphEdgeEditing + GraphType,
{
    assert!(lengths.iter().all(|&l| l > 0));
    assert!(lengths.iter().filter(|&&l| l == 1).count() <= 1);

    let n = 2 + lengths.iter().map(|&l| l - 1).sum::<NumNodes>();
    let mut graph = G::new(n);

    let mut next_free = 2;
    for &length in lengths {
        let inner = next_free..next_free + length - 1;
        next_free = inner.end;
        graph.connect_path(std::iter::once(0).chain(inner).chain(std::iter::once(1)));
    }

    graph
}

/// Builds the `rows x cols` grid graph; node `r * cols + c` is connected to its right and lower
/// neighbor.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, gens::*};
///
/// let g: AdjArrayUndir = grid_graph(2, 3);
/// assert_eq!(g.number_of_nodes(), 6);
/// assert_eq!(g.number_of_edges(), 2 * 2 + 3);
/// ```
pub fn grid_graph<G>(rows: NumNodes, cols: NumNodes) -> G
where
    G: GraphNew + GraphEdgeEditing + GraphType,
{
    let mut graph = G::new(rows * cols);
    for r in 0..rows {
        graph.connect_path((0..cols).map(|c| r * cols + c));
    }
    for c in 0..cols {
        graph.connect_path((0..rows).map(|r| r * cols + c));
    }
    graph
}
