/*!
# Utilities

Provides
- abstractions over [`Set`] so that traversals can run on dense or sparse visited-sets,
- the `NodeMapper`-framework for mapping a graph onto a smaller graph (see [`NodeMapSetter`] / [`NodeMapGetter`]).
*/

use crate::prelude::*;

pub mod node_mapper;
pub mod set;

pub use node_mapper::{NodeMapGetter, NodeMapSetter, NodeMapper};
pub use set::Set;

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeBitSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // a bitset must cover the maximum element
        Self::new(total as Node)
    }
}
