use std::{iter::Copied, slice::Iter};

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// Calling this for an existing neighbor creates a parallel edge, which no algorithm
    /// of this crate supports.
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse (e.g. planar networks where most
/// nodes have degree at most 3).
#[derive(Default, Clone, Debug)]
pub struct SparseNeighborhood<const N: usize = 4>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}
