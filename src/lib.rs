/*!
`ucycles` computes **minimum cycle bases** of graphs that are
- **u**nlabelled : Nodes are numbered `0` to `n - 1`
- **u**nweighted : Every edge contributes `1` to the length of a cycle
- **u**ndirected : Cycle bases are taken over the cycle space of the undirected graph

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; as all graphs are undirected,
`Edge(u, v)` and `Edge(v, u)` are the same edge and get normalized whenever used as a key.

Graphs are stored as [`AdjArrayUndir`](crate::repr::AdjArrayUndir) or
[`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir). Vertex and edge attributes (such as
positions of a spatial network) can be attached with
[`AttributedGraph`](crate::repr::AttributedGraph); they are passed through untouched onto the
materialized basis cycles.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
The most common entry points are also implemented via traits on the graph itself.

The minimum cycle basis is computed in three stages:
1. [`HortonCandidates`](crate::algo::HortonCandidates) builds a BFS spanning tree rooted at every
   vertex and extracts one fundamental cycle per chord (the *Horton superset*),
2. [`MinimumCycleBasis`](crate::algo::MinimumCycleBasis) sorts the candidates by length and greedily
   keeps those that are independent over GF(2) until `|E| - |V| + P` cycles are found,
3. [`materialize`](crate::algo::materialize()) turns the accepted cycles into small graphs carrying
   the attributes of the input.

# Usage

```
use ucycles::{prelude::*, algo::*};

// a square with one diagonal
let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);

let basis = g.minimum_cycle_basis().unwrap();
assert_eq!(basis.len(), 2);
assert!(basis.iter().all(|cycle| cycle.len() == 3));
```

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all representations,
- [`algo`] includes spanning trees, candidate generation, the basis selection and materialization,
- [`gens`] includes generators for random graphs and deterministic substructures such as paths, cycles, cliques and theta graphs,
- [`utils`] includes helper traits such as `Set` and the `NodeMapper` used during materialization.

The optional `parallel` feature distributes candidate generation over all cores using `rayon`.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `ucycles::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
