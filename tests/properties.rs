use fxhash::FxHashSet;
use itertools::Itertools;
use proptest::prelude::*;
use ucycles::{algo::*, prelude::*};

/// Simple graphs with up to 14 nodes; loops and repeated pairs are dropped
fn simple_graph() -> impl Strategy<Value = AdjArrayUndir> {
    (1u32..15)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..45)))
        .prop_map(|(n, pairs)| {
            let mut graph = AdjArrayUndir::new(n);
            for (u, v) in pairs {
                if u != v {
                    graph.try_add_edge(u, v);
                }
            }
            graph
        })
}

/// Graphs with up to 8 nodes and at most 16 edges, small enough to enumerate all edge subsets
fn tiny_graph() -> impl Strategy<Value = AdjArrayUndir> {
    (1u32..9)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..24)))
        .prop_map(|(n, pairs)| {
            let mut graph = AdjArrayUndir::new(n);
            for (u, v) in pairs {
                if u != v && graph.number_of_edges() < 16 {
                    graph.try_add_edge(u, v);
                }
            }
            graph
        })
}

/// Returns *true* if the edges selected by `mask` form one simple cycle: every touched vertex has
/// degree two and all of them are connected
fn is_simple_cycle(n: NumNodes, edges: &[Edge], mask: u64) -> bool {
    let chosen = edges
        .iter()
        .enumerate()
        .filter(|&(i, _)| (mask >> i) & 1 == 1)
        .map(|(_, &e)| e)
        .collect_vec();

    let mut degrees = vec![0u32; n as usize];
    for &Edge(u, v) in &chosen {
        degrees[u as usize] += 1;
        degrees[v as usize] += 1;
    }
    if degrees.iter().any(|&d| d != 0 && d != 2) {
        return false;
    }

    // a 2-regular edge set is a single cycle iff it is connected
    let subgraph = AdjArrayUndir::from_edges(n, chosen.iter().copied());
    subgraph.bfs(chosen[0].0).count() == chosen.len()
}

/// Total length of a minimum cycle basis found by enumerating every simple cycle and picking
/// greedily by length with a xor basis
fn brute_force_minimum_length(graph: &AdjArrayUndir) -> usize {
    let edges = graph.ordered_edges(true).collect_vec();
    let mut cycles = (1u64..1 << edges.len())
        .filter(|&mask| is_simple_cycle(graph.number_of_nodes(), &edges, mask))
        .collect_vec();
    cycles.sort_by_key(|mask| mask.count_ones());

    let mut basis: Vec<u64> = Vec::new();
    let mut total = 0;
    for mask in cycles {
        let mut x = mask;
        for &b in &basis {
            x = x.min(x ^ b);
        }
        if x != 0 {
            basis.push(x);
            basis.sort_unstable_by(|a, b| b.cmp(a));
            total += mask.count_ones() as usize;
        }
    }
    total
}

/// GF(2) rank of label sets via a xor basis over `u64` masks
fn xor_rank(label_sets: &[Vec<EdgeLabel>]) -> usize {
    let mut basis: Vec<u64> = Vec::new();
    for labels in label_sets {
        let mut x = labels.iter().fold(0u64, |acc, &l| acc ^ (1 << l));
        for &b in &basis {
            x = x.min(x ^ b);
        }
        if x != 0 {
            basis.push(x);
            basis.sort_unstable_by(|a, b| b.cmp(a));
        }
    }
    basis.len()
}

/// Edges that lie on at least one cycle, found by removing them one at a time
fn cycle_edges(graph: &AdjArrayUndir) -> Vec<Edge> {
    graph
        .ordered_edges(true)
        .filter(|&Edge(u, v)| {
            let mut without = graph.clone();
            without.remove_edge(u, v);
            without.bfs(u).any(|x| x == v)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn basis_size_equals_nullity(graph in simple_graph()) {
        let basis = graph.minimum_cycle_basis().unwrap();
        let n = graph.number_of_nodes() as usize;
        let m = graph.number_of_edges() as usize;
        let p = graph.number_of_connected_components() as usize;

        prop_assert_eq!(basis.len(), m + p - n);
        prop_assert_eq!(basis.len(), graph.nullity());
    }

    #[test]
    fn basis_is_independent(graph in simple_graph()) {
        let basis = graph.minimum_cycle_basis().unwrap();

        prop_assert!(basis.is_independent());
        prop_assert_eq!(xor_rank(&basis.label_vectors()), basis.len());
    }

    #[test]
    fn basis_spans_all_cycle_edges(graph in simple_graph()) {
        let basis = graph.minimum_cycle_basis().unwrap();

        let covered: FxHashSet<Edge> = basis
            .iter()
            .flat_map(|c| c.cycle().normalized_edges())
            .collect();
        let expected: FxHashSet<Edge> = cycle_edges(&graph).into_iter().collect();
        prop_assert_eq!(covered, expected);

        // every chord of a fixed spanning tree lies on some basis cycle
        if !graph.is_empty() {
            let tree = SpanningTree::bfs(&graph, 0);
            for chord in tree.chords(&graph) {
                prop_assert!(basis.iter().any(|c| c.cycle().contains_edge(chord)));
            }
        }
    }

    #[test]
    fn basis_cycles_are_simple_and_sorted(graph in simple_graph()) {
        let basis = graph.minimum_cycle_basis().unwrap();

        for cycle in &basis {
            prop_assert!(cycle.len() >= 3);
            prop_assert!(cycle.walk().iter().all_unique());
            prop_assert!(cycle.edges().iter().all(|e| graph.has_edge(e.0, e.1)));
        }
        prop_assert!(basis.iter().tuple_windows().all(|(a, b)| a.len() <= b.len()));
    }

    #[test]
    fn minimum_is_never_longer_than_fundamental(graph in simple_graph()) {
        let minimum = graph.minimum_cycle_basis().unwrap();

        for root in graph.vertices() {
            let fundamental = graph.fundamental_cycle_basis(root).unwrap();
            prop_assert_eq!(fundamental.len(), minimum.len());
            prop_assert!(fundamental.is_independent());
            prop_assert!(fundamental.total_length() >= minimum.total_length());
        }
    }

    #[test]
    fn computation_is_deterministic(graph in simple_graph()) {
        let first = graph.minimum_cycle_basis().unwrap();
        let second = MinimumCycleBasis::new(&graph).compute().unwrap();
        let parallel = MinimumCycleBasis::new(&graph).parallel(true).compute().unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &parallel);
    }

    #[test]
    fn elimination_agrees_with_xor_rank(
        rows in 1usize..40,
        columns in prop::collection::vec(prop::collection::vec(0usize..40, 0..12), 1..16),
    ) {
        let columns = columns
            .into_iter()
            .map(|c| c.into_iter().filter(|&r| r < rows).collect::<FxHashSet<_>>())
            .collect_vec();
        let as_labels = columns
            .iter()
            .map(|c| c.iter().map(|&r| r as EdgeLabel).collect_vec())
            .collect_vec();

        let expected = xor_rank(&as_labels);
        let mut matrix = Gf2Matrix::from_columns(rows, columns.iter().map(|c| c.iter().copied()));
        prop_assert_eq!(matrix.rank(), expected);

        let (_, basis) = as_labels.split_last().unwrap();
        let independent = xor_rank(basis) < expected;
        let mut matrix = Gf2Matrix::from_columns(rows, columns.iter().map(|c| c.iter().copied()));
        prop_assert_eq!(matrix.compute_linear_independence(), independent);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn minimum_matches_exhaustive_search(graph in tiny_graph()) {
        let basis = graph.minimum_cycle_basis().unwrap();
        prop_assert_eq!(basis.len(), graph.nullity());
        prop_assert_eq!(basis.total_length(), brute_force_minimum_length(&graph));
    }
}
