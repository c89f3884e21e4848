//! Disjoint-set (union-find) grouping of services into connected components.
//!
//! Dependency edges are treated as undirected here: two services belong to
//! the same component when any chain of `dependsOn` relations links them,
//! regardless of direction. Components identify service families that can
//! be deployed independently of each other.

use crate::adjacency::DependencyGraph;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Union-find over string-named nodes with path compression.
///
/// Which root survives a union is an implementation detail: only the
/// partition, never the root label, is meaningful to callers.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: BTreeMap<String, String>,
}

impl UnionFind {
    /// Create a structure where every node is its own set.
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parent = nodes
            .into_iter()
            .map(|node| {
                let node = node.into();
                (node.clone(), node)
            })
            .collect();
        Self { parent }
    }

    /// Build the connected components of `graph`, treating every
    /// dependency edge as undirected.
    ///
    /// # Errors
    ///
    /// Cannot fail for a well-formed graph; an edge naming a node outside
    /// the graph's own node set would surface as [`Error::UnknownNode`].
    pub fn components(graph: &DependencyGraph) -> Result<Self> {
        let mut uf = Self::new(graph.nodes());
        for (service, deps) in graph.as_map() {
            for dep in deps {
                uf.union(service, dep)?;
            }
        }
        Ok(uf)
    }

    /// Find the representative root of `x`, compressing the path walked.
    ///
    /// The walk is iterative: a first pass follows parent pointers to the
    /// root, a second pass rewrites every intermediate node to point at
    /// the root directly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] when `x` was never added.
    pub fn find(&mut self, x: &str) -> Result<String> {
        if !self.parent.contains_key(x) {
            return Err(Error::UnknownNode(x.to_string()));
        }

        let mut root = x.to_string();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }

        // Path compression: repoint everything we walked at the root.
        let mut current = x.to_string();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        Ok(root)
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] when either name was never added.
    pub fn union(&mut self, x: &str, y: &str) -> Result<()> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x != root_y {
            self.parent.insert(root_y, root_x);
        }
        Ok(())
    }

    /// Map every node to its representative root.
    ///
    /// Two nodes share a root iff a chain of unions connects them.
    pub fn groups(&mut self) -> BTreeMap<String, String> {
        let nodes: Vec<String> = self.parent.keys().cloned().collect();
        let mut groups = BTreeMap::new();
        for node in nodes {
            // find cannot fail: every key is a known node.
            if let Ok(root) = self.find(&node) {
                groups.insert(node, root);
            }
        }
        groups
    }

    /// Number of nodes tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure tracks no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
