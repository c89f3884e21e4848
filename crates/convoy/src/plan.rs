//! Master deployment-plan assembly.
//!
//! Turns a dependency manifest into the master deployment-order
//! artifact: topologically sort the dependency graph, then attach each
//! service's metadata in sorted position. Construction is pure; the
//! manifest is never mutated.

use crate::domain::{Manifest, MasterPlan, PlannedService, ServiceMetadata};
use crate::error::Result;
use convoy_graph::{topo_sort, DependencyGraph};

/// Build the master deployment order for every service in the manifest.
///
/// Services that appear in the adjacency list (or only as dependencies)
/// without a `services` entry are planned with empty-string defaults and
/// a warning, mirroring how absent metadata is tolerated for otherwise
/// valid graph nodes. Branches are trimmed and fall back to the
/// manifest-wide default when blank.
///
/// # Errors
///
/// Returns [`convoy_graph::Error::CycleDetected`] (wrapped) when the
/// graph admits no valid order.
pub fn build_master_plan(manifest: &Manifest) -> Result<MasterPlan> {
    let graph = DependencyGraph::from(manifest.dependency_adjacency_list.clone());
    let order = topo_sort(&graph)?;

    let mut deployment_order = Vec::with_capacity(order.len());
    for name in order {
        let meta = match manifest.services.get(&name) {
            Some(meta) => meta.clone(),
            None => {
                tracing::warn!(service = %name, "no metadata found for service, using defaults");
                ServiceMetadata::default()
            }
        };

        let branch = match meta.branch.trim() {
            "" => manifest.default_branch.clone(),
            branch => branch.to_string(),
        };

        deployment_order.push(PlannedService {
            service_name: name.clone(),
            repository: meta.repository.trim().to_string(),
            manifest: meta.path_to_manifest,
            dev_local: meta.path_to_devlocal,
            depends_on: graph.deps(&name).to_vec(),
            branch,
        });
    }

    Ok(MasterPlan {
        deployment_order,
        dependency_adjacency_list: manifest.dependency_adjacency_list.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn manifest_with(adjacency: &[(&str, &[&str])]) -> Manifest {
        Manifest {
            default_branch: "main".to_string(),
            dependency_adjacency_list: adjacency
                .iter()
                .map(|(name, deps)| {
                    (
                        (*name).to_string(),
                        deps.iter().map(ToString::to_string).collect(),
                    )
                })
                .collect(),
            services: BTreeMap::new(),
        }
    }

    #[test]
    fn orders_dependencies_first() {
        let manifest = manifest_with(&[("a", &["b"]), ("b", &["c"])]);
        let plan = build_master_plan(&manifest).unwrap();
        assert_eq!(plan.service_names(), ["c", "b", "a"]);
    }

    #[test]
    fn cycle_in_manifest_is_fatal() {
        let manifest = manifest_with(&[("a", &["b"]), ("b", &["a"])]);
        let err = build_master_plan(&manifest).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Graph(convoy_graph::Error::CycleDetected { .. })
        ));
    }

    #[test]
    fn missing_metadata_falls_back_to_defaults() {
        let manifest = manifest_with(&[("api", &["db"])]);
        let plan = build_master_plan(&manifest).unwrap();
        let db = plan.get("db").unwrap();
        assert!(db.repository.is_empty());
        assert!(db.manifest.is_empty());
        // Branch still picks up the manifest-wide default.
        assert_eq!(db.branch, "main");
    }

    #[test]
    fn blank_branch_falls_back_to_default() {
        let mut manifest = manifest_with(&[("api", &[])]);
        manifest.services.insert(
            "api".to_string(),
            ServiceMetadata {
                repository: "  git@example.com:org/api.git  ".to_string(),
                branch: "   ".to_string(),
                ..Default::default()
            },
        );
        let plan = build_master_plan(&manifest).unwrap();
        let api = plan.get("api").unwrap();
        assert_eq!(api.branch, "main");
        assert_eq!(api.repository, "git@example.com:org/api.git");
    }

    #[test]
    fn explicit_branch_wins_over_default() {
        let mut manifest = manifest_with(&[("api", &[])]);
        manifest.services.insert(
            "api".to_string(),
            ServiceMetadata {
                branch: " feature/login ".to_string(),
                ..Default::default()
            },
        );
        let plan = build_master_plan(&manifest).unwrap();
        assert_eq!(plan.get("api").unwrap().branch, "feature/login");
    }

    #[test]
    fn depends_on_preserves_declaration_order() {
        let manifest = manifest_with(&[("api", &["zlib", "auth", "db"])]);
        let plan = build_master_plan(&manifest).unwrap();
        assert_eq!(plan.get("api").unwrap().depends_on, ["zlib", "auth", "db"]);
    }

    #[test]
    fn adjacency_list_is_retained_in_the_artifact() {
        let manifest = manifest_with(&[("api", &["db"])]);
        let plan = build_master_plan(&manifest).unwrap();
        assert_eq!(
            plan.dependency_adjacency_list,
            manifest.dependency_adjacency_list
        );
    }
}
