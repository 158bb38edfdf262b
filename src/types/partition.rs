//! Partition snapshots of a contracted graph.
//!
//! A [`Partition`] records which base nodes are currently merged, in a
//! canonical order, so that contraction states can be stored, compared
//! and fingerprinted.
//!
//! ## Canonical Form
//!
//! - Only classes with two or more members are listed; every other node is
//!   implicitly a singleton
//! - Members are sorted by [`Node`] order
//! - Classes are ordered by their smallest member

use serde::{Deserialize, Serialize};
use super::node::Node;
use crate::PARTITION_SCHEMA_VERSION;

/// Fingerprint of a partition.
///
/// Derived from the member sets only. Two partitions that group the same
/// nodes share a fingerprint even when different representatives won.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionFingerprint(String);

impl PartitionFingerprint {
    /// Create a new fingerprint from a hash string.
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the fingerprint as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartitionFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One equivalence class of merged nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeClass {
    /// The node standing for the whole class.
    pub representative: Node,
    /// All base nodes in the class, sorted.
    pub members: Vec<Node>,
}

impl NodeClass {
    /// Create a class, sorting its members.
    pub fn new(representative: Node, mut members: Vec<Node>) -> Self {
        members.sort();
        Self { representative, members }
    }

    /// Check if a node belongs to this class.
    pub fn contains(&self, node: &Node) -> bool {
        self.members.binary_search(node).is_ok()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the class has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Snapshot of every non-trivial class of a contracted graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Number of merges that united distinct classes.
    pub merge_count: usize,
    /// Classes with two or more members, in canonical order.
    pub classes: Vec<NodeClass>,
    /// Schema version of this snapshot.
    pub schema_version: String,
}

impl Partition {
    /// Create a partition, bringing the classes into canonical order.
    ///
    /// Singleton classes are dropped.
    pub fn new(merge_count: usize, classes: impl IntoIterator<Item = NodeClass>) -> Self {
        let mut classes: Vec<NodeClass> = classes
            .into_iter()
            .filter(|class| class.len() > 1)
            .map(|class| NodeClass::new(class.representative, class.members))
            .collect();
        classes.sort_by(|a, b| a.members.first().cmp(&b.members.first()));

        Self {
            merge_count,
            classes,
            schema_version: PARTITION_SCHEMA_VERSION.to_string(),
        }
    }

    /// Find the class containing a node, if it is merged with anything.
    pub fn class_containing(&self, node: &Node) -> Option<&NodeClass> {
        self.classes.iter().find(|class| class.contains(node))
    }

    /// Number of non-singleton classes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Whether no nodes are merged.
    pub fn is_identity(&self) -> bool {
        self.classes.is_empty()
    }

    /// Compute the partition fingerprint (deterministic fold over member sets).
    pub fn fingerprint(&self) -> PartitionFingerprint {
        use std::hash::Hasher;
        use xxhash_rust::xxh64::Xxh64;

        let mut hasher = Xxh64::new(0);
        hasher.write(self.schema_version.as_bytes());
        hasher.write(&(self.classes.len() as u64).to_le_bytes());

        for class in &self.classes {
            hasher.write(&(class.members.len() as u64).to_le_bytes());
            for member in &class.members {
                hasher.write(&member.id().to_le_bytes());
            }
        }

        PartitionFingerprint(format!("{:016x}", hasher.finish()))
    }
}
