//! Cluster grouping: connected components and per-cluster plans.
//!
//! Two services belong to the same cluster when any chain of dependency
//! edges connects them, direction ignored. Clusters can be deployed
//! independently of one another; within a cluster the master order is
//! preserved untouched.

use crate::domain::{ClusteredPlan, Manifest, MasterPlan};
use crate::error::Result;
use convoy_graph::{bucketize, DependencyGraph, UnionFind};
use std::collections::BTreeMap;

/// Partition the manifest's services into connected components.
///
/// Returns the equivalence artifact: every service name mapped to its
/// cluster's representative root.
pub fn group_services(manifest: &Manifest) -> Result<BTreeMap<String, String>> {
    let graph = DependencyGraph::from(manifest.dependency_adjacency_list.clone());
    let mut uf = UnionFind::components(&graph)?;
    Ok(uf.groups())
}

/// Regroup a master plan into per-cluster ordered sublists.
///
/// # Errors
///
/// Returns [`convoy_graph::Error::UnknownRoot`] (wrapped) when a planned
/// service has no entry in `roots` — the grouping and the order were
/// built from different graphs.
pub fn cluster_plan(
    master: &MasterPlan,
    roots: &BTreeMap<String, String>,
) -> Result<ClusteredPlan> {
    let order = master.service_names();
    let buckets = bucketize(&order, roots)?;

    let clusters = buckets
        .into_iter()
        .map(|(root, members)| {
            let services = members
                .iter()
                .filter_map(|name| master.get(name).cloned())
                .collect();
            (root, services)
        })
        .collect();

    Ok(ClusteredPlan { clusters })
}
