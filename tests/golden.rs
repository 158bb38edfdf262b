//! Golden tests for graph contraction.
//!
//! These tests pin the enumeration semantics of the contracted view on
//! small hand-built graphs.

use std::collections::BTreeSet;
use graph_contraction::{
    Arc, ArcFilter, ContractedGraph, Directedness, Graph, InMemoryGraph, Node,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Triangle {
    graph: InMemoryGraph,
    a: Node,
    b: Node,
    c: Node,
    ab: Arc,
    bc: Arc,
    ca: Arc,
}

fn build_triangle(directedness: Directedness) -> Triangle {
    let mut graph = InMemoryGraph::new();
    let a = graph.add_node().unwrap();
    let b = graph.add_node().unwrap();
    let c = graph.add_node().unwrap();
    let ab = graph.add_arc(a, b, directedness).unwrap();
    let bc = graph.add_arc(b, c, directedness).unwrap();
    let ca = graph.add_arc(c, a, directedness).unwrap();
    Triangle { graph, a, b, c, ab, bc, ca }
}

fn build_path(n: usize) -> (InMemoryGraph, Vec<Node>, Vec<Arc>) {
    let mut graph = InMemoryGraph::new();
    let nodes: Vec<Node> = (0..n).map(|_| graph.add_node().unwrap()).collect();
    let arcs = nodes
        .windows(2)
        .map(|pair| graph.add_arc(pair[0], pair[1], Directedness::Directed).unwrap())
        .collect();
    (graph, nodes, arcs)
}

fn collect_once(arcs: impl Iterator<Item = Arc>) -> BTreeSet<Arc> {
    let arcs: Vec<Arc> = arcs.collect();
    let set: BTreeSet<Arc> = arcs.iter().copied().collect();
    assert_eq!(set.len(), arcs.len(), "duplicate arcs in {arcs:?}");
    set
}

// ─────────────────────────────────────────────────────────────────────────────
// Triangle Scenario
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_triangle_merge_undirected() {
    init_tracing();
    let t = build_triangle(Directedness::Undirected);
    let mut view = ContractedGraph::new(&t.graph);

    let r = view.merge(t.a, t.b);
    assert!(r == t.a || r == t.b);

    assert_eq!(view.node_count(), 2);
    assert_eq!(view.arc_count(ArcFilter::All), 3);
    assert_eq!(
        collect_once(view.arcs_of(r, ArcFilter::All)),
        BTreeSet::from([t.ab, t.bc, t.ca])
    );
    assert!(view.is_loop(t.ab));
    assert_eq!(view.u(t.ab), r);
    assert_eq!(view.v(t.ab), r);
}

#[test]
fn test_triangle_merge_directed() {
    init_tracing();
    let t = build_triangle(Directedness::Directed);
    let mut view = ContractedGraph::new(&t.graph);
    let r = view.merge(t.a, t.b);

    assert_eq!(
        collect_once(view.arcs_of(r, ArcFilter::All)),
        BTreeSet::from([t.ab, t.bc, t.ca])
    );
    // ab is a loop, bc leaves the class, ca enters it
    assert_eq!(
        collect_once(view.arcs_of(r, ArcFilter::Forward)),
        BTreeSet::from([t.ab, t.bc])
    );
    assert_eq!(
        collect_once(view.arcs_of(r, ArcFilter::Backward)),
        BTreeSet::from([t.ab, t.ca])
    );
    assert_eq!(view.arc_count_of(r, ArcFilter::Edge), 0);
    assert_eq!(view.arc_count_of(t.c, ArcFilter::All), 2);
}

#[test]
fn test_triangle_contract_all() {
    let t = build_triangle(Directedness::Undirected);
    let mut view = ContractedGraph::new(&t.graph);

    view.contract(t.ab);
    let r = view.contract(t.bc);
    assert_eq!(view.contract(t.ca), r);

    assert_eq!(view.merge_count(), 2);
    assert_eq!(view.node_count(), 1);
    assert_eq!(view.arc_count_between(r, r, ArcFilter::All), 3);
    assert!(view.has_arc(t.ca));
}

// ─────────────────────────────────────────────────────────────────────────────
// Identity Behaviour
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unmerged_view_matches_base() {
    let t = build_triangle(Directedness::Directed);
    let view = ContractedGraph::new(&t.graph);

    assert_eq!(view.nodes().collect::<Vec<_>>(), t.graph.nodes().collect::<Vec<_>>());
    for node in [t.a, t.b, t.c] {
        assert_eq!(
            view.arcs_of(node, ArcFilter::All).collect::<Vec<_>>(),
            t.graph.arcs_of(node, ArcFilter::All).collect::<Vec<_>>()
        );
        assert_eq!(view.representative(node), node);
    }
}

#[test]
fn test_reset_restores_identity() {
    let (graph, nodes, _) = build_path(10);
    let mut view = ContractedGraph::new(&graph);
    for pair in nodes.chunks(2) {
        view.merge(pair[0], pair[1]);
    }
    assert_eq!(view.node_count(), 5);

    view.reset();
    assert_eq!(view.node_count(), 10);
    assert!(nodes.iter().all(|&n| view.has_node(n)));
    assert!(view.partition().is_identity());
}

// ─────────────────────────────────────────────────────────────────────────────
// Larger Merges
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_path_collapse_keeps_every_arc() {
    let (graph, nodes, arcs) = build_path(50);
    let mut view = ContractedGraph::new(&graph);

    let mut r = nodes[0];
    for &arc in &arcs {
        r = view.contract(arc);
    }

    assert_eq!(view.node_count(), 1);
    assert_eq!(view.class_members(r).count(), 50);
    assert_eq!(
        collect_once(view.arcs_of(r, ArcFilter::Directed)),
        arcs.iter().copied().collect()
    );
    assert_eq!(collect_once(view.arcs_of(r, ArcFilter::Backward)).len(), 49);
}

#[test]
fn test_two_classes_arcs_between() {
    // 1 → 2 → 3 → 4, merge {1, 2} and {3, 4}
    let (graph, nodes, arcs) = build_path(4);
    let mut view = ContractedGraph::new(&graph);
    let left = view.merge(nodes[0], nodes[1]);
    let right = view.merge(nodes[2], nodes[3]);

    assert_eq!(view.arcs_between(left, right, ArcFilter::All).collect::<Vec<_>>(), vec![arcs[1]]);
    assert_eq!(view.arcs_between(right, left, ArcFilter::Backward).collect::<Vec<_>>(), vec![arcs[1]]);
    assert_eq!(view.arc_count_between(right, left, ArcFilter::Forward), 0);
    assert_eq!(view.arc_count_between(left, left, ArcFilter::All), 1);

    let partition = view.partition();
    assert_eq!(partition.num_classes(), 2);
    assert_eq!(partition.classes[0].members, vec![nodes[0], nodes[1]]);
    assert_eq!(partition.classes[1].members, vec![nodes[2], nodes[3]]);
}

#[test]
fn test_same_grouping_same_fingerprint() {
    let (graph, nodes, _) = build_path(6);

    let mut first = ContractedGraph::new(&graph);
    first.merge(nodes[0], nodes[1]);
    first.merge(nodes[1], nodes[2]);

    let mut second = ContractedGraph::new(&graph);
    second.merge(nodes[2], nodes[0]);
    second.merge(nodes[1], nodes[0]);

    assert_eq!(first.partition().fingerprint(), second.partition().fingerprint());

    second.merge(nodes[4], nodes[5]);
    assert_ne!(first.partition().fingerprint(), second.partition().fingerprint());
}

#[test]
fn test_partition_json_shape() {
    let (graph, nodes, _) = build_path(3);
    let mut view = ContractedGraph::new(&graph);
    view.merge(nodes[0], nodes[2]);

    let json = serde_json::to_value(view.partition()).unwrap();
    assert_eq!(json["merge_count"], 1);
    assert_eq!(json["classes"][0]["members"], serde_json::json!([1, 3]));
    assert_eq!(json["schema_version"], graph_contraction::PARTITION_SCHEMA_VERSION);
}
