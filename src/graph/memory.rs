//! In-memory graph.

use std::collections::{BTreeMap, BTreeSet};

use crate::id_allocator::{AllocError, AllocatorConfig, IdAllocator};
use crate::types::{Arc, ArcFilter, Directedness, Node};
use super::Graph;

/// Error type for in-memory graph mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(Node),
    /// No free id for a new node or arc.
    #[error("Id space exhausted: {0}")]
    IdSpaceExhausted(#[from] AllocError),
}

/// Stored endpoints of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArcRecord {
    u: Node,
    v: Node,
    directedness: Directedness,
}

/// Mutable graph held in memory.
///
/// Uses BTreeMap/BTreeSet for deterministic iteration order. Node and arc
/// ids come from two [`IdAllocator`]s probing this graph's own maps.
#[derive(Debug, Clone)]
pub struct InMemoryGraph {
    /// Node -> incident arcs.
    nodes: BTreeMap<Node, BTreeSet<Arc>>,
    /// All arcs.
    arcs: BTreeMap<Arc, ArcRecord>,
    /// Number of undirected edges among `arcs`.
    edge_count: usize,
    node_ids: IdAllocator,
    arc_ids: IdAllocator,
}

impl InMemoryGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_allocator_config(AllocatorConfig::default())
    }

    /// Create a new empty graph whose id allocators use `config`.
    pub fn with_allocator_config(config: AllocatorConfig) -> Self {
        Self {
            nodes: BTreeMap::new(),
            arcs: BTreeMap::new(),
            edge_count: 0,
            node_ids: IdAllocator::with_config(config.clone()),
            arc_ids: IdAllocator::with_config(config),
        }
    }

    /// Add a node.
    pub fn add_node(&mut self) -> Result<Node, GraphError> {
        let nodes = &self.nodes;
        let id = self
            .node_ids
            .allocate(&|id: i64| nodes.contains_key(&Node::new(id)))?;
        let node = Node::new(id);
        self.nodes.insert(node, BTreeSet::new());
        Ok(node)
    }

    /// Add an arc from `u` to `v`. Both endpoints must exist; `u == v` adds a self-loop.
    pub fn add_arc(&mut self, u: Node, v: Node, directedness: Directedness) -> Result<Arc, GraphError> {
        for endpoint in [u, v] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(GraphError::NodeNotFound(endpoint));
            }
        }

        let arcs = &self.arcs;
        let id = self
            .arc_ids
            .allocate(&|id: i64| arcs.contains_key(&Arc::new(id)))?;
        let arc = Arc::new(id);

        self.arcs.insert(arc, ArcRecord { u, v, directedness });
        if directedness == Directedness::Undirected {
            self.edge_count += 1;
        }
        for endpoint in [u, v] {
            self.nodes.entry(endpoint).or_default().insert(arc);
        }
        Ok(arc)
    }

    /// Delete an arc. Returns false if it was not in the graph.
    pub fn delete_arc(&mut self, arc: Arc) -> bool {
        let Some(record) = self.arcs.remove(&arc) else {
            return false;
        };
        if record.directedness == Directedness::Undirected {
            self.edge_count -= 1;
        }
        for endpoint in [record.u, record.v] {
            if let Some(incident) = self.nodes.get_mut(&endpoint) {
                incident.remove(&arc);
            }
        }
        true
    }

    /// Delete a node together with its incident arcs. Returns false if it was not in the graph.
    pub fn delete_node(&mut self, node: Node) -> bool {
        let Some(incident) = self.nodes.get(&node) else {
            return false;
        };
        let incident: Vec<Arc> = incident.iter().copied().collect();
        for arc in incident {
            self.delete_arc(arc);
        }
        self.nodes.remove(&node);
        true
    }

    /// Remove every node and arc.
    ///
    /// Both allocators are rewound so ids are handed out from 1 again.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.arcs.clear();
        self.edge_count = 0;
        self.node_ids.rewind();
        self.arc_ids.rewind();
    }

    fn record(&self, arc: Arc) -> Option<&ArcRecord> {
        self.arcs.get(&arc)
    }
}

impl Default for InMemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for InMemoryGraph {
    /// Returns [`Node::INVALID`] for an arc not in the graph.
    fn u(&self, arc: Arc) -> Node {
        self.record(arc).map(|r| r.u).unwrap_or(Node::INVALID)
    }

    /// Returns [`Node::INVALID`] for an arc not in the graph.
    fn v(&self, arc: Arc) -> Node {
        self.record(arc).map(|r| r.v).unwrap_or(Node::INVALID)
    }

    fn is_edge(&self, arc: Arc) -> bool {
        self.record(arc)
            .map(|r| r.directedness == Directedness::Undirected)
            .unwrap_or(false)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = Node> + '_> {
        Box::new(self.nodes.keys().copied())
    }

    fn arcs(&self, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        Box::new(
            self.arcs
                .iter()
                .filter(move |(_, r)| filter.admits_globally(r.directedness == Directedness::Undirected))
                .map(|(&arc, _)| arc),
        )
    }

    fn arcs_of(&self, node: Node, filter: ArcFilter) -> Box<dyn Iterator<Item = Arc> + '_> {
        let Some(incident) = self.nodes.get(&node) else {
            return Box::new(std::iter::empty());
        };
        Box::new(incident.iter().copied().filter(move |&arc| {
            self.record(arc).is_some_and(|r| {
                filter.admits(r.directedness == Directedness::Undirected, r.u == node, r.v == node)
            })
        }))
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn arc_count(&self, filter: ArcFilter) -> usize {
        match filter {
            ArcFilter::Edge => self.edge_count,
            ArcFilter::Directed => self.arcs.len() - self.edge_count,
            ArcFilter::All | ArcFilter::Forward | ArcFilter::Backward => self.arcs.len(),
        }
    }

    fn has_node(&self, node: Node) -> bool {
        self.nodes.contains_key(&node)
    }

    fn has_arc(&self, arc: Arc) -> bool {
        self.arcs.contains_key(&arc)
    }
}
