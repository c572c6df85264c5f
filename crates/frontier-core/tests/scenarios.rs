//! Known-topology regression tests for the traversal variants.
//!
//! Each test uses a hand-crafted matrix whose breadth-first order can be
//! worked out by hand. Random graphs are cross-checked against petgraph's
//! own BFS for reachability.

use std::collections::BTreeSet;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

use frontier_core::compare::{CompareOptions, compare};
use frontier_core::graph::{AdjacencyList, AdjacencyMatrix, GraphGenerator};
use frontier_core::traverse::{Variant, VisitedSet, bfs_list, bfs_matrix, bfs_matrix_ring};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run_all(rows: &[Vec<u8>], start: usize) -> Vec<Vec<usize>> {
    let matrix = AdjacencyMatrix::from_rows(rows).expect("valid matrix");
    let list = AdjacencyList::from_matrix(&matrix);
    let mut visited = VisitedSet::new(matrix.vertex_count());

    Variant::ALL
        .iter()
        .map(|variant| {
            visited.reset();
            variant
                .run(&matrix, &list, &mut visited, start)
                .expect("bfs")
                .into_inner()
        })
        .collect()
}

fn petgraph_reachable(matrix: &AdjacencyMatrix, start: usize) -> BTreeSet<usize> {
    let n = matrix.vertex_count();
    let mut graph = UnGraph::<(), ()>::new_undirected();
    let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            if matrix.has_edge(i, j) {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
    }

    let mut bfs = Bfs::new(&graph, nodes[start]);
    let mut reached = BTreeSet::new();
    while let Some(node) = bfs.next(&graph) {
        reached.insert(node.index());
    }
    reached
}

// ---------------------------------------------------------------------------
// Fixed topologies
// ---------------------------------------------------------------------------

#[test]
fn star_from_leaf_visits_hub_then_other_leaves() {
    let rows = vec![
        vec![0, 1, 0, 0],
        vec![1, 0, 1, 1],
        vec![0, 1, 0, 0],
        vec![0, 1, 0, 0],
    ];
    for order in run_all(&rows, 0) {
        assert_eq!(order, vec![0, 1, 2, 3]);
    }
}

#[test]
fn isolated_start_in_disconnected_graph() {
    let rows = vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]];
    for order in run_all(&rows, 2) {
        assert_eq!(order, vec![2]);
    }
}

#[test]
fn path_from_middle_expands_by_layer() {
    // 0 - 1 - 2 - 3 - 4
    let rows = vec![
        vec![0, 1, 0, 0, 0],
        vec![1, 0, 1, 0, 0],
        vec![0, 1, 0, 1, 0],
        vec![0, 0, 1, 0, 1],
        vec![0, 0, 0, 1, 0],
    ];
    for order in run_all(&rows, 2) {
        assert_eq!(order, vec![2, 1, 3, 0, 4]);
    }
}

#[test]
fn cycle_ties_break_by_ascending_index() {
    // 0 - 1 - 2 - 3 - 0
    let rows = vec![
        vec![0, 1, 0, 1],
        vec![1, 0, 1, 0],
        vec![0, 1, 0, 1],
        vec![1, 0, 1, 0],
    ];
    for order in run_all(&rows, 0) {
        assert_eq!(order, vec![0, 1, 3, 2]);
    }
}

#[test]
fn complete_graph_emits_ascending_after_start() {
    let n = 6;
    let rows: Vec<Vec<u8>> = (0..n)
        .map(|i| (0..n).map(|j| u8::from(i != j)).collect())
        .collect();
    for order in run_all(&rows, 4) {
        assert_eq!(order, vec![4, 0, 1, 2, 3, 5]);
    }
}

#[test]
fn two_components_only_reach_own_side() {
    // {0, 2} and {1, 3}
    let rows = vec![
        vec![0, 0, 1, 0],
        vec![0, 0, 0, 1],
        vec![1, 0, 0, 0],
        vec![0, 1, 0, 0],
    ];
    for order in run_all(&rows, 1) {
        assert_eq!(order, vec![1, 3]);
    }
}

// ---------------------------------------------------------------------------
// Shared visited set
// ---------------------------------------------------------------------------

#[test]
fn stale_visited_set_hides_vertices() {
    let matrix = GraphGenerator::from_seed(8).generate(10);
    let mut visited = VisitedSet::new(10);

    let first = bfs_matrix(&matrix, &mut visited, 0).expect("bfs");
    // Without a reset, every vertex the first run reached stays marked.
    let second = bfs_matrix_ring(&matrix, &mut visited, 0).expect("bfs");
    assert!(second.len() <= first.len());
    assert_eq!(second.as_slice(), &[0]);

    visited.reset();
    let third = bfs_matrix_ring(&matrix, &mut visited, 0).expect("bfs");
    assert_eq!(third, first);
}

// ---------------------------------------------------------------------------
// Random graphs vs petgraph
// ---------------------------------------------------------------------------

#[test]
fn random_graphs_match_petgraph_reachability() {
    for seed in 0..20_u64 {
        let matrix = GraphGenerator::from_seed(seed).generate(15);
        let list = AdjacencyList::from_matrix(&matrix);
        let start = usize::try_from(seed % 15).expect("fits");

        let expected = petgraph_reachable(&matrix, start);
        let mut visited = VisitedSet::new(15);
        let order = bfs_list(&list, &mut visited, start).expect("bfs");
        let reached: BTreeSet<usize> = order.as_slice().iter().copied().collect();

        assert_eq!(reached.len(), order.len(), "seed {seed}: duplicate vertex");
        assert_eq!(reached, expected, "seed {seed}");
    }
}

#[test]
fn compare_reports_identical_orders_on_random_graphs() {
    for seed in [3_u64, 21, 77, 1024] {
        let matrix = GraphGenerator::from_seed(seed).generate(40);
        let list = AdjacencyList::from_matrix(&matrix);
        let cmp = compare(&matrix, &list, 0, CompareOptions::all_measured(2)).expect("compare");
        assert!(cmp.orders_agree(), "seed {seed}");
        assert_eq!(cmp.bench.report().operations.len(), 3);
    }
}
