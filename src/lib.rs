//! # graph-contraction
//!
//! Node contraction views over graphs.
//!
//! The crate answers one question:
//!
//! > Given a graph, what does it look like if some of its nodes were **one node**?
//!
//! ## Core Contract
//!
//! 1. A [`ContractedGraph`] wraps any [`Graph`] and merges nodes into classes on demand
//! 2. The base graph is never written to; every merge lives in a [`DisjointSet`]
//! 3. Arcs are never created or destroyed by contraction: an arc whose endpoints were
//!    merged is reported as a loop, exactly once
//!
//! ## Architecture
//!
//! ```text
//! merge / contract → DisjointSet<Node> (representatives)
//!                          ↓
//! queries ───────→ normalize endpoints → base Graph (read only)
//! ```
//!
//! An [`IdAllocator`] hands out collision-free ids for new graph elements;
//! [`InMemoryGraph`] uses one for nodes and one for arcs.
//!
//! ## Caller Discipline
//!
//! Nothing here is thread-safe. Enumerations borrow the view immutably, so
//! merging while an enumeration is alive does not compile.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod graph;
pub mod disjoint_set;
pub mod contracted;
pub mod id_allocator;

// Re-exports
pub use types::{Node, Arc, ArcFilter, Directedness};
pub use types::partition::{Partition, NodeClass, PartitionFingerprint};
pub use graph::{Graph, InMemoryGraph, GraphError};
pub use disjoint_set::{DisjointSet, ClassHandle, Elements};
pub use contracted::ContractedGraph;
pub use id_allocator::{IdAllocator, AllocatorConfig, AllocationTable, AllocError};

/// Schema version for [`Partition`] snapshots.
/// Increment on breaking changes to the snapshot layout.
pub const PARTITION_SCHEMA_VERSION: &str = "1.0.0";
