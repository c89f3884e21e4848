//! String-keyed dependency graph algorithms for deployment ordering.
//!
//! This library provides the algorithmic core used by the convoy CLI:
//! an adjacency-list graph model, topological sorting with cycle
//! detection, disjoint-set connected-component grouping, transitive
//! reachability, and stable per-component bucketing of a sorted order.
//!
//! All algorithms are pure functions over owned data: nothing here
//! performs I/O or holds state between calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adjacency;
pub mod bucketize;
pub mod closure;
pub mod error;
pub mod topo;
pub mod union_find;

pub use adjacency::DependencyGraph;
pub use bucketize::bucketize;
pub use closure::reachable;
pub use error::{Error, Result};
pub use topo::topo_sort;
pub use union_find::UnionFind;
