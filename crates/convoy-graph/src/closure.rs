//! Transitive dependency closure.

use crate::adjacency::DependencyGraph;
use std::collections::BTreeSet;

/// Every node reachable from `start` by following dependency edges,
/// directly or indirectly. `start` itself is only included when some
/// edge chain leads back to it.
///
/// The walk uses an explicit work stack and a visited set, so it is
/// bounded by the number of distinct nodes and terminates on cyclic
/// input even though the sorter rejects cycles upstream.
pub fn reachable(graph: &DependencyGraph, start: &str) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut stack: Vec<&str> = graph.deps(start).iter().map(String::as_str).collect();

    while let Some(node) = stack.pop() {
        if seen.insert(node.to_string()) {
            stack.extend(graph.deps(node).iter().map(String::as_str));
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn follows_chains_transitively() {
        let graph =
            DependencyGraph::from_edges([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec![])]);
        assert_eq!(reachable(&graph, "a"), set(&["b", "c"]));
        assert_eq!(reachable(&graph, "b"), set(&["c"]));
        assert_eq!(reachable(&graph, "c"), set(&[]));
    }

    #[test]
    fn start_node_is_excluded_unless_cyclic() {
        let graph = DependencyGraph::from_edges([("a", vec!["b"]), ("b", vec![])]);
        assert!(!reachable(&graph, "a").contains("a"));
    }

    #[test]
    fn terminates_on_cycles() {
        let graph = DependencyGraph::from_edges([("a", vec!["b"]), ("b", vec!["a"])]);
        assert_eq!(reachable(&graph, "a"), set(&["a", "b"]));
    }

    #[test]
    fn shared_dependencies_appear_once() {
        let graph = DependencyGraph::from_edges([
            ("api", vec!["auth", "billing"]),
            ("auth", vec!["db"]),
            ("billing", vec!["db"]),
        ]);
        assert_eq!(reachable(&graph, "api"), set(&["auth", "billing", "db"]));
    }

    #[test]
    fn unknown_start_reaches_nothing() {
        let graph = DependencyGraph::from_edges([("a", vec!["b"])]);
        assert!(reachable(&graph, "ghost").is_empty());
    }
}
