use super::*;

/// `G(n,p)` graphs contain every possible edge `{u, v}` with `u < v` with probability `p`
/// independent from each other. Generated graphs are simple: no self-loops and every edge is
/// emitted once in normalized form, in sorted order.
///
/// # Example
/// ```
/// use ucycles::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand::rngs::StdRng::seed_from_u64(3);
/// let edges = Gnp::new().nodes(20).prob(0.15).generate(rng);
/// assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob));
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n;
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };

        (0..n)
            .flat_map(move |u| (u + 1..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(Gnp::new().nodes(30).prob(0.0).generate(rng).is_empty());
        assert_eq!(Gnp::new().nodes(30).prob(1.0).generate(rng).len(), 30 * 29 / 2);
        assert!(Gnp::new().nodes(0).prob(0.5).generate(rng).is_empty());
    }

    #[test]
    fn edges_are_simple_and_sorted() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        for _ in 0..20 {
            let edges = Gnp::new().nodes(50).prob(0.2).generate(rng);
            assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
            assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
        }
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 2000;
        let g = AdjArrayUndir::gnp(rng, n, 5.0 / n as f64);

        let avg = 2.0 * g.number_of_edges() as f64 / n as f64;
        assert!((4.5..5.5).contains(&avg), "average degree {avg}");
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().nodes(10).prob(1.5);
    }
}
