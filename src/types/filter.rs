//! Arc filters and directedness.

use serde::{Deserialize, Serialize};

/// Whether a new arc is a directed arc or an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Directedness {
    /// Directed arc from `u` to `v`.
    Directed,
    /// Undirected edge between `u` and `v`.
    Undirected,
}

impl Directedness {
    /// Parse directedness from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "directed" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl std::fmt::Display for Directedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directed => write!(f, "directed"),
            Self::Undirected => write!(f, "undirected"),
        }
    }
}

/// Restricts which arcs an enumeration yields.
///
/// For incident-arc queries the orientation filters look at which endpoint
/// the queried node is. For whole-graph queries `Forward` and `Backward`
/// behave like `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArcFilter {
    /// Every arc.
    All,
    /// Undirected edges only.
    Edge,
    /// Directed arcs only.
    Directed,
    /// Undirected edges, plus directed arcs leaving the node.
    Forward,
    /// Undirected edges, plus directed arcs entering the node.
    Backward,
}

impl ArcFilter {
    /// Whether an arc incident to some node passes the filter.
    ///
    /// `leaves` is true when the node is the arc's `u` endpoint, `enters`
    /// when it is the `v` endpoint. Both hold for a self-loop.
    pub fn admits(self, is_edge: bool, leaves: bool, enters: bool) -> bool {
        match self {
            Self::All => true,
            Self::Edge => is_edge,
            Self::Directed => !is_edge,
            Self::Forward => is_edge || leaves,
            Self::Backward => is_edge || enters,
        }
    }

    /// Whether an arc passes the filter in a whole-graph enumeration.
    pub fn admits_globally(self, is_edge: bool) -> bool {
        match self {
            Self::Edge => is_edge,
            Self::Directed => !is_edge,
            Self::All | Self::Forward | Self::Backward => true,
        }
    }
}

impl Default for ArcFilter {
    fn default() -> Self {
        Self::All
    }
}
