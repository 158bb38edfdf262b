//! Core types for graph contraction.

pub mod node;
pub mod filter;
pub mod partition;

pub use node::{Node, Arc};
pub use filter::{ArcFilter, Directedness};
pub use partition::{Partition, NodeClass, PartitionFingerprint};
