//! Contraction view over a graph.
//!
//! A [`ContractedGraph`] merges nodes of a base graph into equivalence
//! classes without touching the base graph. Each class is seen as a single
//! node, its representative.
//!
//! ## Invariants
//!
//! - A node is visible iff it is a base node equal to its own representative
//! - `node_count() == base.node_count() - merge_count()`
//! - The set of arcs never changes; an arc whose endpoints were merged is
//!   reported as a loop
//! - `arcs_of` yields every incident arc of a class exactly once
//!
//! ## Caller Discipline
//!
//! Enumerations borrow the view, so `merge`/`contract` cannot run while one
//! is alive. The base graph may gain nodes and arcs through
//! [`ContractedGraph::base_mut`], but nodes that took part in a merge must
//! not be deleted.

use crate::disjoint_set::DisjointSet;
use crate::graph::Graph;
use crate::types::{Arc, ArcFilter, Node, NodeClass, Partition};

/// Pick the one member of a class that lists a loop arc.
///
/// A loop `(u, v)` inside a class is reachable from both raw endpoints. The
/// raw `u` endpoint lists it, unless `filter` rejects the arc from the `u`
/// side, in which case the raw `v` endpoint does (the base graph only yields
/// it there).
pub(crate) fn canonical_endpoint(filter: ArcFilter, is_edge: bool, u: Node, v: Node) -> Node {
    if filter.admits(is_edge, true, u == v) { u } else { v }
}

/// Read view of a graph with some nodes merged together.
#[derive(Debug, Clone)]
pub struct ContractedGraph<G> {
    graph: G,
    classes: DisjointSet<Node>,
    merge_count: usize,
}

impl<G: Graph> ContractedGraph<G> {
    /// Wrap a graph with every node in its own class.
    ///
    /// Pass `&graph` to keep ownership outside the view.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            classes: DisjointSet::new(),
            merge_count: 0,
        }
    }

    /// Merge the classes of `u` and `v` and return the resulting representative.
    ///
    /// If they are already merged nothing changes. Which of the two
    /// representatives survives is unspecified.
    pub fn merge(&mut self, u: Node, v: Node) -> Node {
        let a = self.classes.find(u);
        let b = self.classes.find(v);
        if a == b {
            let representative = self.classes.representative(a);
            tracing::trace!(%u, %v, %representative, "nodes already merged");
            return representative;
        }

        let merged = self.classes.union(a, b);
        self.merge_count += 1;
        let representative = self.classes.representative(merged);
        tracing::debug!(
            %u,
            %v,
            %representative,
            merge_count = self.merge_count,
            "merged node classes"
        );
        representative
    }

    /// Merge the endpoints of `arc`. The arc stays and becomes a loop.
    pub fn contract(&mut self, arc: Arc) -> Node {
        let (u, v) = (self.graph.u(arc), self.graph.v(arc));
        self.merge(u, v)
    }

    /// Undo every merge.
    pub fn reset(&mut self) {
        tracing::debug!(merge_count = self.merge_count, "resetting contraction");
        self.classes.clear();
        self.merge_count = 0;
    }

    /// Number of merges that united two distinct classes since creation or `reset`.
    pub fn merge_count(&self) -> usize {
        self.merge_count
    }

    /// The representative standing for `node`.
    pub fn representative(&self, node: Node) -> Node {
        self.classes.representative_of(node)
    }

    /// Whether `u` and `v` are in the same class.
    pub fn is_merged(&self, u: Node, v: Node) -> bool {
        self.representative(u) == self.representative(v)
    }

    /// Base nodes in the class of `node`, in unspecified order.
    pub fn class_members(&self, node: Node) -> Box<dyn Iterator<Item = Node> + '_> {
        match self.classes.class_of(node) {
            Some(class) => Box::new(self.classes.elements(class)),
            None => Box::new(std::iter::once(node)),
        }
    }

    /// Whether `arc` currently reports as a loop.
    pub fn is_loop(&self, arc: Arc) -> bool {
        self.u(arc) == self.v(arc)
    }

    /// Snapshot of the current classes.
    pub fn partition(&self) -> Partition {
        let classes = self.classes.classes().map(|class| {
            NodeClass::new(
                self.classes.representative(class),
                self.classes.elements(class).collect(),
            )
        });
        Partition::new(self.merge_count, classes)
    }

    /// The wrapped graph.
    pub fn base(&self) -> &G {
        &self.graph
    }

    /// Mutable access to the wrapped graph, for adding nodes and arcs.
    pub fn base_mut(&mut self) -> &mut G {
        &mut self.graph
    }

    /// Unwrap the base graph, discarding the contraction.
    pub fn into_inner(self) -> G {
        self.graph
    }

    /// Whether a base arc found from `member` should be yielded for its class.
    fn lists_from(&self, member: Node, arc: Arc, filter: ArcFilter) -> bool {
        if !self.is_loop(arc) {
            // Only one endpoint lies in this class
            return true;
        }
        let (u, v) = (self.graph.u(arc), self.graph.v(arc));
        member == canonical_endpoint(filter, self.graph.is_edge(arc), u, v)
    }
}

impl<G: Graph> Graph for ContractedGraph<G> {
    fn u(&self, arc: Arc) -> Node {
        self.representative(self.graph.u(arc))
    }

    fn v(&self, arc: Arc) -> Node {
        self.representative(self.graph.v(arc))
    }

    fn is_edge(&self, arc: Arc) -> bool {
        self.graph.is_edge(arc)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = Node> + '_> {
        Box::new(
            self.graph
                .nodes()
                .filter(move |&node| self.representative(node) == node),
        )
    }

    fn arcs(&self, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        self.graph.arcs(filter)
    }

    fn arcs_of(&self, node: Node, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        Box::new(self.class_members(node).flat_map(move |member| {
            self.graph
                .arcs_of(member, filter)
                .filter(move |&arc| self.lists_from(member, arc, filter))
        }))
    }

    fn arcs_between(&self, u: Node, v: Node, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        let (u, v) = (self.representative(u), self.representative(v));
        Box::new(self.arcs_of(u, filter).filter(move |&arc| self.other(arc, u) == v))
    }

    fn node_count(&self) -> usize {
        self.graph.node_count().saturating_sub(self.merge_count)
    }

    fn arc_count(&self, filter: ArcFilter) -> usize {
        self.graph.arc_count(filter)
    }

    fn has_node(&self, node: Node) -> bool {
        self.graph.has_node(node) && self.representative(node) == node
    }

    fn has_arc(&self, arc: Arc) -> bool {
        self.graph.has_arc(arc)
    }
}
