//! Topological sorting with cycle detection.
//!
//! Produces a dependencies-first ordering of a [`DependencyGraph`] via an
//! iterative depth-first post-order traversal. An explicit frame stack
//! replaces recursion so arbitrarily deep dependency chains cannot
//! overflow the call stack, and three-state node coloring (unvisited,
//! in-progress, done) detects back-edges.

use crate::adjacency::DependencyGraph;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Traversal color for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the active DFS path, children not yet fully processed.
    InProgress,
    /// Fully processed and emitted to the result.
    Done,
}

/// A work-stack entry. Each node is visited twice: once to expand its
/// children and once (the `expanded` frame) to emit it post-order.
struct Frame<'a> {
    node: &'a str,
    expanded: bool,
}

/// Sort the graph so that every dependency precedes the services that
/// depend on it (reverse postorder).
///
/// Traversal starts are taken in lexicographic node order, so the output
/// and any cycle report are reproducible across runs.
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] naming the first node encountered
/// again while still on the active DFS path.
pub fn topo_sort(graph: &DependencyGraph) -> Result<Vec<String>> {
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut result = Vec::with_capacity(graph.node_count());

    for start in graph.nodes() {
        if marks.contains_key(start) {
            continue;
        }

        let mut stack = vec![Frame {
            node: start,
            expanded: false,
        }];

        while let Some(frame) = stack.pop() {
            match marks.get(frame.node) {
                Some(Mark::Done) => continue,
                Some(Mark::InProgress) if !frame.expanded => {
                    // Back-edge: the node is still on the active path.
                    return Err(Error::CycleDetected {
                        node: frame.node.to_string(),
                    });
                }
                _ => {}
            }

            if frame.expanded {
                marks.insert(frame.node, Mark::Done);
                result.push(frame.node.to_string());
                continue;
            }

            marks.insert(frame.node, Mark::InProgress);

            // Re-visit frame first, then children on top of it.
            stack.push(Frame {
                node: frame.node,
                expanded: true,
            });
            for dep in graph.deps(frame.node) {
                if marks.get(dep.as_str()) != Some(&Mark::Done) {
                    stack.push(Frame {
                        node: dep,
                        expanded: false,
                    });
                }
            }
        }
    }

    tracing::debug!(nodes = result.len(), "topological sort complete");
    Ok(result)
}
