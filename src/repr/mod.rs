/*!
# Graph Representations

- [`UndirectedGraph`] stores one [`Neighborhood`] per node; [`AdjArrayUndir`] and
  [`SparseAdjArrayUndir`] are the two provided instantiations.
- [`AttributedGraph`] wraps any representation and attaches an attribute bag
  ([`Attributes`]) to every node and edge.
- [`EdgeLabels`] assigns the stable labels `0..m` to the edges of a graph.
*/

use crate::{ops::*, *};

mod attributes;
mod labels;
mod neighborhood;
mod undirected;

pub use attributes::*;
pub use labels::*;
pub use neighborhood::*;
pub use undirected::*;
