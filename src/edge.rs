use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// All graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the
/// same edge. Use [`Edge::normalized`] whenever an edge is used as a key.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Stable integer label of an edge, in the range `0..m`.
/// Labels are assigned once per basis computation (see [`EdgeLabels`](crate::repr::EdgeLabels)).
pub type EdgeLabel = NumEdges;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if both edges connect the same endpoints (ignoring orientation)
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        self.normalized() == other.normalized()
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert_eq!(Edge(1, 3).normalized(), Edge(1, 3));
        assert!(Edge(2, 2).is_loop());
        assert!(!Edge(4, 2).is_normalized());
        assert!(Edge(4, 2).same_endpoints(&Edge(2, 4)));
        assert!(!Edge(4, 2).same_endpoints(&Edge(2, 5)));
        assert_eq!(format!("{:?}", Edge(0, 7)), "(0,7)");
    }
}
