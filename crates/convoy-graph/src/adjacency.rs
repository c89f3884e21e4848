//! Adjacency-list graph model.
//!
//! A [`DependencyGraph`] maps each service name to the ordered list of
//! names it depends on. Names that appear only on the right-hand side of
//! an edge (declared nowhere as a key) are still graph nodes; they simply
//! have zero out-edges. Keys are held in a `BTreeMap` so that every
//! iteration over the node set is lexicographic, which makes traversal
//! start order (and therefore sort output and cycle reporting)
//! reproducible across runs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A directed dependency graph keyed by service name.
///
/// Edges point from a service to the services it depends on. Dependency
/// list order is preserved for output fidelity but carries no semantic
/// weight for the algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Build a graph from `(service, dependencies)` pairs.
    pub fn from_edges<I, S, D>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: IntoIterator<Item = S>,
    {
        let adjacency = edges
            .into_iter()
            .map(|(node, deps)| (node.into(), deps.into_iter().map(Into::into).collect()))
            .collect();
        Self { adjacency }
    }

    /// All node names in lexicographic order, including names that occur
    /// only as dependencies of other nodes.
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: BTreeSet<&str> = self.adjacency.keys().map(String::as_str).collect();
        for deps in self.adjacency.values() {
            nodes.extend(deps.iter().map(String::as_str));
        }
        nodes.into_iter().collect()
    }

    /// The declared dependencies of `node`, in declaration order.
    ///
    /// Implicit nodes (present only as someone else's dependency) have no
    /// adjacency entry and return an empty slice.
    pub fn deps(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Whether `node` is part of the graph, explicitly or implicitly.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
            || self.adjacency.values().any(|deps| deps.iter().any(|d| d == node))
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// The raw adjacency mapping.
    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.adjacency
    }
}

impl From<BTreeMap<String, Vec<String>>> for DependencyGraph {
    fn from(adjacency: BTreeMap<String, Vec<String>>) -> Self {
        Self { adjacency }
    }
}
