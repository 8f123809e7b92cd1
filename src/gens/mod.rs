/*!
# Graph Generators

This module provides generators for the graphs cycle bases are tested and benchmarked on.

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The `RandomGraph` trait wraps these generators into constructors of whole graph instances, and
[`GeneratorSubstructures`] adds deterministic motifs (paths, cycles, cliques) to existing graphs.
[`theta_graph`] and [`grid_graph`] build the classic instances with known minimum cycle bases.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random simple `G(n,p)` graph using edge probability `p`.
    ///
    /// # Example
    /// ```
    /// use ucycles::{prelude::*, gens::*};
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
    /// let g = AdjArrayUndir::gnp(rng, 10, 1.0);
    /// assert_eq!(g.number_of_edges(), 45);
    /// ```
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphType<Dir = Undirected>,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }
}
