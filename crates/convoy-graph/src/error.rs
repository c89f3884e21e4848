//! Error types for convoy-graph operations.

use thiserror::Error;

/// The error type for convoy-graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph contains a dependency cycle and has no valid order.
    ///
    /// The named node is the first node revisited while still on the
    /// active traversal path, which is deterministic given the graph's
    /// lexicographic start order but not necessarily the alphabetically
    /// smallest member of the cycle.
    #[error("cycle detected at service: {node}")]
    CycleDetected {
        /// The node at which the back-edge was found.
        node: String,
    },

    /// A node in a sorted order has no entry in the equivalence mapping.
    ///
    /// This indicates inconsistent upstream artifacts (the order and the
    /// grouping were built from different graphs), not user error.
    #[error("no equivalence root recorded for service: {0}")]
    UnknownRoot(String),

    /// A node name was looked up in a structure that does not contain it.
    #[error("unknown node: {0}")]
    UnknownNode(String),
}

/// A specialized Result type for convoy-graph operations.
pub type Result<T> = std::result::Result<T, Error>;
