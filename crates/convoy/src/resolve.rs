//! Deployment-subset resolution for local environments.
//!
//! Given a master plan and a local configuration, compute the minimal
//! ordered subset to deploy: the target service plus its transitive
//! dependency closure, widened by force-deploy directives, narrowed by
//! skip directives, with per-service field overrides applied last. The
//! final list is the master order filtered down to the deploy-set, so
//! it stays a valid topological order without re-sorting.

use crate::domain::{LocalConfig, MasterPlan, PlannedService, ServiceOverride};
use crate::error::{Error, Result};
use convoy_graph::{reachable, DependencyGraph};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// A non-fatal inconsistency detected while resolving a plan.
///
/// Warnings are surfaced to the caller, who decides whether to treat
/// them as fatal (strict mode) or merely report them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyWarning {
    /// A retained service still lists a skipped service among its
    /// dependencies. Skips do not cascade, so the plan may reference a
    /// service it will not deploy.
    #[error("'{service}' depends on '{skipped}', which is skipped by override")]
    SkippedDependency {
        /// The retained dependent.
        service: String,
        /// The dependency removed by a skip directive.
        skipped: String,
    },
}

/// The outcome of subset resolution: the ordered plan plus any
/// consistency warnings worth surfacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The final deployment plan, a restriction of the master order.
    pub plan: Vec<PlannedService>,
    /// Non-fatal inconsistencies detected along the way.
    pub warnings: Vec<ConsistencyWarning>,
}

/// Resolve the local deployment plan for `config` against `master`.
///
/// # Errors
///
/// - [`Error::UnknownService`] when the target service is not in the
///   master plan.
/// - [`Error::DuplicateOverride`] when two directives name the same
///   service.
pub fn resolve(master: &MasterPlan, config: &LocalConfig) -> Result<Resolution> {
    if master.get(&config.service_name).is_none() {
        return Err(Error::UnknownService(config.service_name.clone()));
    }

    let overrides = index_overrides(&config.dependency_overrides)?;
    let graph = DependencyGraph::from(master.dependency_adjacency_list.clone());

    // Target service plus its transitive dependency closure.
    let mut deploy_set: BTreeSet<String> = reachable(&graph, &config.service_name);
    deploy_set.insert(config.service_name.clone());

    // Force-deploy directives widen the set with their own closures.
    // Re-adding already-included services is a no-op.
    for directive in overrides.values() {
        if directive.force_deploy {
            if master.get(&directive.service_name).is_none() {
                tracing::warn!(
                    service = %directive.service_name,
                    "force-deploy target not in master plan, ignoring"
                );
                continue;
            }
            deploy_set.insert(directive.service_name.clone());
            deploy_set.extend(reachable(&graph, &directive.service_name));
        }
    }

    // Skips remove exactly the named service, never its dependents.
    let mut skipped: BTreeSet<&str> = BTreeSet::new();
    for directive in overrides.values() {
        if directive.skip && deploy_set.remove(&directive.service_name) {
            skipped.insert(directive.service_name.as_str());
        }
    }

    // Filter the master order down to the deploy-set and apply field
    // overrides; master entries are copied, never mutated.
    let mut plan = Vec::with_capacity(deploy_set.len());
    let mut warnings = Vec::new();
    for svc in &master.deployment_order {
        if !deploy_set.contains(&svc.service_name) {
            continue;
        }

        for dep in &svc.depends_on {
            if skipped.contains(dep.as_str()) {
                warnings.push(ConsistencyWarning::SkippedDependency {
                    service: svc.service_name.clone(),
                    skipped: dep.clone(),
                });
            }
        }

        let mut svc = svc.clone();
        if let Some(directive) = overrides.get(svc.service_name.as_str()) {
            apply_field_overrides(&mut svc, directive);
        }
        plan.push(svc);
    }

    tracing::debug!(
        services = plan.len(),
        warnings = warnings.len(),
        target = %config.service_name,
        "resolved local deployment plan"
    );
    Ok(Resolution { plan, warnings })
}

/// Index directives by service name, rejecting duplicates.
fn index_overrides(
    directives: &[ServiceOverride],
) -> Result<BTreeMap<&str, &ServiceOverride>> {
    let mut indexed = BTreeMap::new();
    for directive in directives {
        if indexed
            .insert(directive.service_name.as_str(), directive)
            .is_some()
        {
            return Err(Error::DuplicateOverride(directive.service_name.clone()));
        }
    }
    Ok(indexed)
}

/// Replace master field values with override values, but only where the
/// override is explicitly provided and non-empty.
fn apply_field_overrides(svc: &mut PlannedService, directive: &ServiceOverride) {
    if let Some(branch) = &directive.branch {
        if !branch.is_empty() {
            svc.branch = branch.clone();
        }
    }
    if let Some(manifest) = &directive.manifest_path {
        if !manifest.is_empty() {
            svc.manifest = manifest.clone();
        }
    }
    if let Some(dev_local) = &directive.dev_local {
        if !dev_local.is_empty() {
            svc.dev_local = dev_local.clone();
        }
    }
}
