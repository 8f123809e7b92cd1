use itertools::Itertools;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use ucycles::{algo::*, gens::*, prelude::*, *};

fn square_with_diagonal() -> AdjArrayUndir {
    AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)])
}

#[test]
fn single_triangle() {
    let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    let basis = g.minimum_cycle_basis().unwrap();

    assert_eq!(basis.len(), 1);
    assert_eq!(
        basis[0].cycle().normalized_edges(),
        vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)]
    );
}

#[test]
fn square_with_one_diagonal() {
    let g = square_with_diagonal();
    let basis = g.minimum_cycle_basis().unwrap();

    let edge_sets = basis
        .iter()
        .map(|c| c.cycle().normalized_edges())
        .sorted()
        .collect_vec();
    assert_eq!(
        edge_sets,
        vec![
            vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)],
            vec![Edge(0, 2), Edge(0, 3), Edge(2, 3)],
        ]
    );
}

#[test]
fn two_disjoint_triangles() {
    let g = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
    assert_eq!(g.nullity(), 2);

    let basis = g.minimum_cycle_basis().unwrap();
    assert_eq!(basis.len(), 2);

    let mut components = basis
        .iter()
        .map(|c| c.walk().iter().copied().sorted().collect_vec())
        .collect_vec();
    components.sort();
    assert_eq!(components, vec![vec![0, 1, 2], vec![3, 4, 5]]);
}

#[test]
fn single_edge_has_empty_basis() {
    let g = AdjArrayUndir::from_edges(2, [(0, 1)]);
    assert_eq!(g.nullity(), 0);

    let basis = g.minimum_cycle_basis().unwrap();
    assert!(basis.is_empty());
    assert!(materialize(&g, &basis).is_empty());
}

#[test]
fn isolated_vertices_count_as_components() {
    let mut g = AdjArrayUndir::new(10);
    g.connect_cycle([0, 1, 2, 3]);
    assert_eq!(g.number_of_connected_components(), 7);
    assert_eq!(g.nullity(), 1);
    assert_eq!(g.minimum_cycle_basis().unwrap().len(), 1);
}

#[test]
fn theta_graph_picks_the_two_shortest_cycles() {
    let g: AdjArrayUndir = theta_graph(&[2, 3, 4]);
    let basis = g.minimum_cycle_basis().unwrap();

    assert_eq!(basis.len(), 2);
    assert_eq!(basis.total_length(), 11);
    assert_eq!(basis.iter().map(|c| c.len()).collect_vec(), vec![5, 6]);

    // no fundamental basis is shorter
    let worst = g
        .vertices()
        .map(|root| g.fundamental_cycle_basis(root).unwrap().total_length())
        .max()
        .unwrap();
    assert!(worst >= 11);
}

#[test]
fn repeated_runs_are_identical() {
    let rng = &mut Pcg64Mcg::seed_from_u64(31);
    let g = AdjArrayUndir::gnp(rng, 60, 0.08);

    let first = g.minimum_cycle_basis().unwrap();
    for _ in 0..3 {
        assert_eq!(g.minimum_cycle_basis().unwrap(), first);
    }

    let parallel = MinimumCycleBasis::new(&g).parallel(true).compute().unwrap();
    assert_eq!(parallel, first);
}

#[test]
fn representations_agree_on_length() {
    let rng = &mut Pcg64Mcg::seed_from_u64(8);

    for _ in 0..10 {
        let dense = AdjArrayUndir::gnp(rng, 40, 0.1);
        let sparse = SparseAdjArrayUndir::from_edges(40, dense.ordered_edges(true));

        let a = dense.minimum_cycle_basis().unwrap();
        let b = sparse.minimum_cycle_basis().unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.total_length(), b.total_length());
        assert!(b.is_independent());
    }
}

#[test]
fn materialized_cycles_carry_positions() {
    // a 3 x 3 grid embedded in the plane
    let grid: AdjArrayUndir = grid_graph(3, 3);
    let mut g = AttributedGraph::new(grid);
    for u in 0..9 {
        g.set_node_attr(u, "pos", [(u % 3) as f64, (u / 3) as f64, 0.0]);
    }
    for Edge(u, v) in g.graph().ordered_edges(true).collect_vec() {
        assert!(g.set_edge_attr(u, v, "length", 1.0));
    }

    let basis = g.minimum_cycle_basis().unwrap();
    assert_eq!(basis.len(), 4);

    let cycles = materialize(&g, &basis);
    assert_eq!(cycles.len(), 4);

    for cycle in &cycles {
        assert_eq!(cycle.len(), 4);

        let walk = cycle.extract_path_origin().unwrap();
        assert_eq!(walk.len(), 5);
        assert_eq!(walk.first(), walk.last());

        let positions = cycle.path_attribute("pos").unwrap();
        assert_eq!(positions.len(), walk.len());
        for (&u, pos) in walk.iter().zip(&positions) {
            assert_eq!(*pos, g.node_attr(u, "pos"));
        }

        for (u, v) in walk.iter().tuple_windows() {
            assert_eq!(
                cycle.edge_attr(Edge(*u, *v), "length"),
                Some(&AttrValue::Float(1.0))
            );
        }
    }
}

#[test]
fn self_loops_are_rejected() {
    let mut g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    g.add_edge(2, 2);

    assert_eq!(
        g.minimum_cycle_basis(),
        Err(CycleBasisError::InvalidInput(InvalidInput::SelfLoop(2)))
    );
    assert_eq!(
        g.fundamental_cycle_basis(0),
        Err(CycleBasisError::InvalidInput(InvalidInput::SelfLoop(2)))
    );

    let message = g.minimum_cycle_basis().unwrap_err().to_string();
    assert_eq!(message, "invalid input: self-loop at node 2");
}

/// Reports edges but no vertices
struct Inconsistent;

impl GraphNodeOrder for Inconsistent {
    fn number_of_nodes(&self) -> NumNodes {
        0
    }
}

impl GraphEdgeOrder for Inconsistent {
    fn number_of_edges(&self) -> NumEdges {
        3
    }
}

impl AdjacencyTest for Inconsistent {
    fn has_edge(&self, _u: Node, _v: Node) -> bool {
        false
    }
}

#[test]
fn edges_without_vertices_are_rejected() {
    assert_eq!(
        validate_input(&Inconsistent),
        Err(CycleBasisError::InvalidInput(
            InvalidInput::EdgesWithoutVertices(3)
        ))
    );
    assert_eq!(validate_input(&AdjArrayUndir::new(0)), Ok(()));
}

#[test]
fn candidate_dictionary_uses_stable_labels() {
    let g = square_with_diagonal();
    let candidates = HortonCandidates::new(&g).generate().unwrap();
    let labels = candidates.edge_labels();

    assert_eq!(
        labels.iter().collect_vec(),
        vec![
            (0, Edge(0, 1)),
            (1, Edge(0, 2)),
            (2, Edge(0, 3)),
            (3, Edge(1, 2)),
            (4, Edge(2, 3)),
        ]
    );

    for (key, cycle_labels) in candidates.label_dict() {
        let candidate = candidates.get(key).unwrap();
        assert_eq!(candidate.labels(), cycle_labels);
        assert_eq!(
            cycle_labels.iter().map(|&l| labels.edge_of(l)).collect_vec(),
            candidate.edges().iter().map(|e| e.normalized()).collect_vec()
        );
    }
}
