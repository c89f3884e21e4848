//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for convoy using clap's
//! derive API. Each command has its own argument struct.
//!
//! # Commands
//!
//! - `order`: Compute the master deployment order from a manifest
//! - `group`: Partition services into connected components
//! - `clusters`: Regroup a deployment order into per-cluster plans
//! - `local`: Resolve a filtered deployment plan for local development
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! convoy order -i dependency-manifest.yml -o deployment-order.yml
//! convoy group -i dependency-manifest.yml -o union.yml
//! convoy clusters -d deployment-order.yml -u union.yml
//! convoy local -d deployment-order.yml -c local-config.json
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{ClustersArgs, GroupArgs, LocalArgs, OrderArgs};

/// Convoy - a deployment-order planner for interdependent services
///
/// Computes safe dependencies-first deployment orders, independent
/// deployment clusters, and filtered local deployment plans. Convoy only
/// plans; it never executes a deployment.
#[derive(Parser, Debug)]
#[command(name = "convoy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the master deployment order
    ///
    /// Reads a dependency manifest, topologically sorts the service graph
    /// (failing on cycles), and prints the dependencies-first order.
    /// With `-o`, the master deployment-order artifact is written for the
    /// `clusters` and `local` commands to consume.
    Order(OrderArgs),

    /// Partition services into independent clusters
    ///
    /// Groups services into maximal connected components (edges treated
    /// as undirected), so unrelated service families can be deployed
    /// independently.
    Group(GroupArgs),

    /// Regroup a deployment order by cluster
    ///
    /// Combines the order artifact with the grouping artifact, producing
    /// one ordered sublist per cluster. Within a cluster, master order is
    /// preserved.
    Clusters(ClustersArgs),

    /// Resolve a local deployment plan
    ///
    /// Restricts the master order to a target service's transitive
    /// dependency closure, applies force-deploy and skip directives plus
    /// per-service field overrides, and prints the resulting plan.
    Local(LocalArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Order(args)) => execute::execute_order(args, output_mode),
            Some(Commands::Group(args)) => execute::execute_group(args, output_mode),
            Some(Commands::Clusters(args)) => execute::execute_clusters(args, output_mode),
            Some(Commands::Local(args)) => execute::execute_local(args, output_mode),
            None => {
                println!("Convoy deployment-order planner");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ========== CLI Parsing Tests ==========

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["convoy"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_global_json_flag() {
        let cli = Cli::try_parse_from(["convoy", "--json", "order", "-i", "m.yml"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Order(_))));
    }

    #[test]
    fn test_parse_order_minimal() {
        let cli = Cli::try_parse_from(["convoy", "order", "-i", "m.yml"]).unwrap();
        match cli.command {
            Some(Commands::Order(args)) => {
                assert_eq!(args.input, PathBuf::from("m.yml"));
                assert!(args.output.is_none());
            }
            _ => panic!("Expected Order command"),
        }
    }

    #[test]
    fn test_parse_order_with_output() {
        let cli = Cli::try_parse_from([
            "convoy",
            "order",
            "--input",
            "dependency-manifest.json",
            "--output",
            "deployment-order.yml",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Order(args)) => {
                assert_eq!(args.input, PathBuf::from("dependency-manifest.json"));
                assert_eq!(args.output, Some(PathBuf::from("deployment-order.yml")));
            }
            _ => panic!("Expected Order command"),
        }
    }

    #[test]
    fn test_parse_order_requires_input() {
        let result = Cli::try_parse_from(["convoy", "order"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_group() {
        let cli = Cli::try_parse_from(["convoy", "group", "-i", "m.yml", "-o", "u.yml"]).unwrap();
        match cli.command {
            Some(Commands::Group(args)) => {
                assert_eq!(args.input, PathBuf::from("m.yml"));
                assert_eq!(args.output, Some(PathBuf::from("u.yml")));
            }
            _ => panic!("Expected Group command"),
        }
    }

    #[test]
    fn test_parse_clusters() {
        let cli = Cli::try_parse_from([
            "convoy",
            "clusters",
            "-d",
            "deployment-order.yml",
            "-u",
            "union.yml",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Clusters(args)) => {
                assert_eq!(args.deployment_order, PathBuf::from("deployment-order.yml"));
                assert_eq!(args.union, PathBuf::from("union.yml"));
                assert!(args.output.is_none());
            }
            _ => panic!("Expected Clusters command"),
        }
    }

    #[test]
    fn test_parse_clusters_long_flags() {
        let cli = Cli::try_parse_from([
            "convoy",
            "clusters",
            "--deployment-order",
            "d.yml",
            "--union",
            "u.yml",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Clusters(_))));
    }

    #[test]
    fn test_parse_local() {
        let cli = Cli::try_parse_from([
            "convoy",
            "local",
            "-d",
            "deployment-order.yml",
            "-c",
            "local-config.json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Local(args)) => {
                assert_eq!(args.config, PathBuf::from("local-config.json"));
                assert!(!args.strict);
            }
            _ => panic!("Expected Local command"),
        }
    }

    #[test]
    fn test_parse_local_strict() {
        let cli = Cli::try_parse_from([
            "convoy", "local", "-d", "d.yml", "-c", "c.json", "--strict",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Local(args)) => assert!(args.strict),
            _ => panic!("Expected Local command"),
        }
    }

    #[test]
    fn test_parse_local_requires_config() {
        let result = Cli::try_parse_from(["convoy", "local", "-d", "d.yml"]);
        assert!(result.is_err());
    }
}
