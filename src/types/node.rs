//! Node and arc identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vertex in a graph.
///
/// Wraps a non-zero `i64`; zero is never handed out by an
/// [`IdAllocator`](crate::IdAllocator). Implements `Ord` for deterministic ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Node(i64);

impl Node {
    /// Sentinel that no graph contains.
    pub const INVALID: Node = Node(0);

    /// Create a node from a raw id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw id.
    pub fn id(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i64> for Node {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier of a directed arc or undirected edge in a graph.
///
/// Carries no endpoint data; ask the owning [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Arc(i64);

impl Arc {
    /// Create an arc from a raw id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw id.
    pub fn id(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}", self.0)
    }
}

impl From<i64> for Arc {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ordering() {
        assert!(Node::new(1) < Node::new(2));
        assert!(Node::new(-5) < Node::new(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Node::new(7).to_string(), "#7");
        assert_eq!(Arc::new(3).to_string(), "|3");
    }
}
