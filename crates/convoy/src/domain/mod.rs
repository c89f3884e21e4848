//! Domain types for deployment planning.
//!
//! These types mirror the documents convoy consumes and produces: the
//! dependency manifest, the master deployment-order artifact, the local
//! override configuration, and the final local deployment plan.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-service metadata declared in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    /// Repository URL the service is built from.
    #[serde(default)]
    pub repository: String,

    /// Path to the service's deployment manifest.
    #[serde(default)]
    pub path_to_manifest: String,

    /// Path to the service's local-development compose/override file.
    #[serde(default)]
    pub path_to_devlocal: String,

    /// Branch to deploy. Blank (after trimming) falls back to the
    /// manifest-wide default branch.
    #[serde(default)]
    pub branch: String,
}

/// The dependency manifest: the declarative input describing every
/// service and its `dependsOn` edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Branch used for services that declare none of their own.
    #[serde(default)]
    pub default_branch: String,

    /// Service name -> ordered list of dependency names.
    #[serde(default)]
    pub dependency_adjacency_list: BTreeMap<String, Vec<String>>,

    /// Service name -> metadata. Services missing here but present in
    /// the adjacency list are planned with empty-string defaults.
    #[serde(default)]
    pub services: BTreeMap<String, ServiceMetadata>,
}

/// One entry of a deployment order: a service with everything needed to
/// deploy it, in its ordered position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedService {
    /// Unique service name.
    pub service_name: String,

    /// Repository URL (whitespace-trimmed).
    pub repository: String,

    /// Path to the deployment manifest.
    pub manifest: String,

    /// Path to the local-development file.
    pub dev_local: String,

    /// Direct dependencies, in manifest declaration order.
    pub depends_on: Vec<String>,

    /// Branch to deploy (service branch or manifest default).
    pub branch: String,
}

/// The master deployment-order artifact produced by `convoy order`.
///
/// The adjacency list that generated the order is retained alongside it
/// for traceability and for downstream subset resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterPlan {
    /// Every service, dependencies first.
    pub deployment_order: Vec<PlannedService>,

    /// The adjacency list the order was computed from.
    pub dependency_adjacency_list: BTreeMap<String, Vec<String>>,
}

impl MasterPlan {
    /// Look up a planned service by name.
    pub fn get(&self, name: &str) -> Option<&PlannedService> {
        self.deployment_order
            .iter()
            .find(|svc| svc.service_name == name)
    }

    /// The ordered service names of the plan.
    pub fn service_names(&self) -> Vec<String> {
        self.deployment_order
            .iter()
            .map(|svc| svc.service_name.clone())
            .collect()
    }
}

/// A per-service override directive for local deployment runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOverride {
    /// The service this directive targets.
    pub service_name: String,

    /// Replacement branch (applied only when non-empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Replacement manifest path (applied only when non-empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<String>,

    /// Replacement local-development path (applied only when non-empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_local: Option<String>,

    /// Exclude this exact service from the plan (no cascade).
    #[serde(default)]
    pub skip: bool,

    /// Force this service and its transitive dependencies into the plan.
    #[serde(default)]
    pub force_deploy: bool,
}

/// Local deployment configuration: the target service plus overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalConfig {
    /// The service whose dependency closure seeds the plan.
    pub service_name: String,

    /// Per-service override directives.
    #[serde(default)]
    pub dependency_overrides: Vec<ServiceOverride>,
}

/// A master order regrouped into per-cluster ordered sublists, keyed by
/// each cluster's representative root service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusteredPlan {
    /// Cluster root -> services of that cluster in master order.
    pub clusters: BTreeMap<String, Vec<PlannedService>>,
}
