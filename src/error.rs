use thiserror::Error;

use crate::{Edge, Node};

/// Errors reported by the cycle basis algorithms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleBasisError {
    /// The candidate cycles ran out before a full-rank basis was assembled.
    /// This hints at a violated precondition (e.g. hidden parallel edges).
    #[error("construction error: found {found} independent cycles but the nullity is {nullity}")]
    Construction { found: usize, nullity: usize },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Contract violations of the caller-supplied data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("self-loop at node {0}")]
    SelfLoop(Node),

    #[error("graph has no vertices but {0} edges")]
    EdgesWithoutVertices(usize),

    #[error("node {0} was not reached by the spanning tree")]
    Unreachable(Node),

    #[error("edge {0} is not part of the graph")]
    UnknownEdge(Edge),

    #[error("edge {0} belongs to the spanning tree and closes no cycle")]
    TreeEdge(Edge),

    #[error("edge set is not a simple cycle")]
    NotACycle,
}

pub type Result<T> = std::result::Result<T, CycleBasisError>;
