//! Graph capability and the in-memory backend.

pub mod memory;

use crate::types::{Arc, ArcFilter, Node};

/// Read access to a graph of nodes and arcs.
///
/// Enumerations are lazy and restartable: every call produces a fresh
/// iterator over the current state. Implementations must yield each
/// incident arc of a node once, self-loops included.
pub trait Graph {
    /// First endpoint of an arc (the tail of a directed arc).
    fn u(&self, arc: Arc) -> Node;

    /// Second endpoint of an arc (the head of a directed arc).
    fn v(&self, arc: Arc) -> Node;

    /// Whether the arc is an undirected edge.
    fn is_edge(&self, arc: Arc) -> bool;

    /// All nodes.
    fn nodes(&self) -> Box<dyn Iterator<Item = Node> + '_>;

    /// All arcs passing `filter`.
    fn arcs(&self, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_>;

    /// Arcs incident to `node` passing `filter`.
    fn arcs_of(&self, node: Node, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_>;

    /// Arcs between `u` and `v` passing `filter` as seen from `u`.
    fn arcs_between(&self, u: Node, v: Node, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        Box::new(self.arcs_of(u, filter).filter(move |&arc| self.other(arc, u) == v))
    }

    /// Number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of arcs passing `filter`.
    fn arc_count(&self, filter: ArcFilter) -> usize {
        self.arcs(filter).count()
    }

    /// Number of arcs incident to `node` passing `filter`.
    fn arc_count_of(&self, node: Node, filter: ArcFilter) -> usize {
        self.arcs_of(node, filter).count()
    }

    /// Number of arcs between `u` and `v` passing `filter`.
    fn arc_count_between(&self, u: Node, v: Node, filter: ArcFilter) -> usize {
        self.arcs_between(u, v, filter).count()
    }

    /// Whether `node` is in the graph.
    fn has_node(&self, node: Node) -> bool;

    /// Whether `arc` is in the graph.
    fn has_arc(&self, arc: Arc) -> bool;

    /// The endpoint of `arc` that is not `node`, or `node` itself for a loop.
    fn other(&self, arc: Arc, node: Node) -> Node {
        let u = self.u(arc);
        if u != node { u } else { self.v(arc) }
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    fn u(&self, arc: Arc) -> Node {
        (**self).u(arc)
    }

    fn v(&self, arc: Arc) -> Node {
        (**self).v(arc)
    }

    fn is_edge(&self, arc: Arc) -> bool {
        (**self).is_edge(arc)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = Node> + '_> {
        (**self).nodes()
    }

    fn arcs(&self, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        (**self).arcs(filter)
    }

    fn arcs_of(&self, node: Node, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        (**self).arcs_of(node, filter)
    }

    fn arcs_between(&self, u: Node, v: Node, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        (**self).arcs_between(u, v, filter)
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn arc_count(&self, filter: ArcFilter) -> usize {
        (**self).arc_count(filter)
    }

    fn arc_count_of(&self, node: Node, filter: ArcFilter) -> usize {
        (**self).arc_count_of(node, filter)
    }

    fn arc_count_between(&self, u: Node, v: Node, filter: ArcFilter) -> usize {
        (**self).arc_count_between(u, v, filter)
    }

    fn has_node(&self, node: Node) -> bool {
        (**self).has_node(node)
    }

    fn has_arc(&self, arc: Arc) -> bool {
        (**self).has_arc(arc)
    }

    fn other(&self, arc: Arc, node: Node) -> Node {
        (**self).other(arc, node)
    }
}

pub use memory::{InMemoryGraph, GraphError};
