/*!
# Cycle Basis Algorithms

This module provides the algorithms that compute (minimum) cycle bases on top of the graph
representations in this crate. All algorithms are re-exported at the top level of this module, so
you can simply do:
```rust
use ucycles::algo::*;
```
and gain access to traversal, connectivity, spanning trees, candidate generation, the GF(2)
independence test, the basis selection and materialization.
If possible, algorithms are provided as **iterators** or configurable structs; the most common entry
points are also available as traits on the graph itself (see [`CycleBasisAlgo`]).
*/

mod connectivity;
mod fundamental;
mod gf2;
mod horton;
mod materialize;
mod minimum_basis;
mod spanning_tree;
pub mod traversal;

use crate::{error::*, prelude::*, utils::*};

pub use connectivity::*;
pub use fundamental::*;
pub use gf2::*;
pub use horton::*;
pub use materialize::*;
pub use minimum_basis::*;
pub use spanning_tree::*;
pub use traversal::*;
