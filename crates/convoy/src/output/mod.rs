//! Output formatting for CLI commands.
//!
//! This module renders convoy's artifacts for the console in both
//! human-readable text and JSON for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors)

pub mod color;

use crate::domain::{ClusteredPlan, MasterPlan, PlannedService};
use crate::resolve::Resolution;
use color::{bold, dimmed, info, warning};
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::io::{self, Write};

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `CONVOY_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        let convoy_color = !matches!(
            env::var("CONVOY_COLOR").as_deref(),
            Ok("0") | Ok("false")
        );
        Self {
            use_colors: !no_color && convoy_color,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Print any serializable value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{}", json)
}

/// Print the master deployment order.
pub fn print_order(plan: &MasterPlan, mode: OutputMode) -> io::Result<()> {
    let config = OutputConfig::from_env();
    match mode {
        OutputMode::Json => print_json(plan),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(
                handle,
                "{}",
                bold("Deployment order (dependencies first):", &config)
            )?;
            for (i, svc) in plan.deployment_order.iter().enumerate() {
                print_service_entry(&mut handle, i, svc, &config)?;
            }
            Ok(())
        }
    }
}

/// Print the connected-component grouping (service -> cluster root).
pub fn print_groups(groups: &BTreeMap<String, String>, mode: OutputMode) -> io::Result<()> {
    let config = OutputConfig::from_env();
    match mode {
        OutputMode::Json => print_json(groups),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", bold("Connected components:", &config))?;

            // Invert to root -> members for readable presentation.
            let mut clusters: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for (node, root) in groups {
                clusters.entry(root).or_default().push(node);
            }
            for (root, members) in clusters {
                writeln!(
                    handle,
                    "{}: {}",
                    info(root, &config),
                    members.join(", ")
                )?;
            }
            Ok(())
        }
    }
}

/// Print a clustered plan, one ordered sublist per cluster.
pub fn print_clusters(clustered: &ClusteredPlan, mode: OutputMode) -> io::Result<()> {
    let config = OutputConfig::from_env();
    match mode {
        OutputMode::Json => print_json(clustered),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for (root, services) in &clustered.clusters {
                writeln!(
                    handle,
                    "{} {}",
                    bold("Cluster:", &config),
                    info(root, &config)
                )?;
                for (i, svc) in services.iter().enumerate() {
                    print_service_entry(&mut handle, i, svc, &config)?;
                }
                writeln!(handle, "---------------------------------")?;
            }
            Ok(())
        }
    }
}

/// Print a resolved local deployment plan, warnings included.
pub fn print_local_plan(resolution: &Resolution, mode: OutputMode) -> io::Result<()> {
    let config = OutputConfig::from_env();
    match mode {
        OutputMode::Json => print_json(&local_plan_json(resolution)),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(
                handle,
                "{}",
                bold("Final deployment plan (in topological order):", &config)
            )?;
            for (i, svc) in resolution.plan.iter().enumerate() {
                print_service_entry(&mut handle, i, svc, &config)?;
            }
            for warn in &resolution.warnings {
                writeln!(
                    handle,
                    "{} {}",
                    warning("warning:", &config),
                    warn
                )?;
            }
            Ok(())
        }
    }
}

/// JSON shape for a resolved plan: the plan plus rendered warnings.
fn local_plan_json(resolution: &Resolution) -> serde_json::Value {
    serde_json::json!({
        "deploymentPlan": resolution.plan,
        "warnings": resolution
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    })
}

/// One numbered entry in the shape the original planner printed.
fn print_service_entry(
    handle: &mut impl Write,
    index: usize,
    svc: &PlannedService,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(handle, "{}. {}", index + 1, info(&svc.service_name, config))?;
    writeln!(handle, "   {} {}", dimmed("Repo:", config), svc.repository)?;
    writeln!(handle, "   {} {}", dimmed("Branch:", config), svc.branch)?;
    writeln!(handle, "   {} {}", dimmed("Manifest:", config), svc.manifest)?;
    writeln!(handle, "   {} {}", dimmed("DevLocal:", config), svc.dev_local)?;
    writeln!(
        handle,
        "   {} {}",
        dimmed("Depends on:", config),
        svc.depends_on.join(", ")
    )
}
