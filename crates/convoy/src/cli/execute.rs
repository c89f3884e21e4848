//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;

use super::args::{ClustersArgs, GroupArgs, LocalArgs, OrderArgs};
use crate::cluster::{cluster_plan, group_services};
use crate::error::Error;
use crate::manifest::{
    load_document, load_local_config, load_manifest, load_master_plan, write_document,
};
use crate::output::{self, color, OutputConfig, OutputMode};
use crate::plan::build_master_plan;
use crate::resolve::resolve;
use std::collections::BTreeMap;
use std::path::Path;

/// Confirm a written artifact on stdout in text mode. JSON output must
/// stay machine-parseable, so the confirmation goes to the log instead.
fn report_saved(what: &str, path: &Path, output_mode: OutputMode) {
    match output_mode {
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            println!(
                "{}",
                color::success(&format!("{what} saved to {}", path.display()), &config)
            );
        }
        OutputMode::Json => tracing::info!(path = %path.display(), "artifact saved"),
    }
}

/// Execute the order command
pub fn execute_order(args: &OrderArgs, output_mode: OutputMode) -> Result<()> {
    let manifest = load_manifest(&args.input)?;
    let plan = build_master_plan(&manifest)?;

    output::print_order(&plan, output_mode)?;

    if let Some(out) = &args.output {
        write_document(out, &plan)?;
        report_saved("Deployment order", out, output_mode);
    }
    Ok(())
}

/// Execute the group command
pub fn execute_group(args: &GroupArgs, output_mode: OutputMode) -> Result<()> {
    let manifest = load_manifest(&args.input)?;
    let groups = group_services(&manifest)?;

    output::print_groups(&groups, output_mode)?;

    if let Some(out) = &args.output {
        write_document(out, &groups)?;
        report_saved("Cluster grouping", out, output_mode);
    }
    Ok(())
}

/// Execute the clusters command
pub fn execute_clusters(args: &ClustersArgs, output_mode: OutputMode) -> Result<()> {
    let master = load_master_plan(&args.deployment_order)?;
    let roots: BTreeMap<String, String> = load_document(&args.union)?;
    let clustered = cluster_plan(&master, &roots)?;

    output::print_clusters(&clustered, output_mode)?;

    if let Some(out) = &args.output {
        write_document(out, &clustered)?;
        report_saved("Clustered plan", out, output_mode);
    }
    Ok(())
}

/// Execute the local command
pub fn execute_local(args: &LocalArgs, output_mode: OutputMode) -> Result<()> {
    let master = load_master_plan(&args.deployment_order)?;
    let config = load_local_config(&args.config)?;
    let resolution = resolve(&master, &config)?;

    if args.strict && !resolution.warnings.is_empty() {
        for warn in &resolution.warnings {
            tracing::warn!(%warn, "consistency warning");
        }
        return Err(Error::StrictConsistency(resolution.warnings.len()).into());
    }

    output::print_local_plan(&resolution, output_mode)?;

    if let Some(out) = &args.output {
        write_document(out, &resolution.plan)?;
        report_saved("Local deployment plan", out, output_mode);
    }
    Ok(())
}
