//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the `order` command
#[derive(Parser, Debug, Clone)]
pub struct OrderArgs {
    /// Dependency manifest to plan from (YAML or JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the master deployment-order artifact to this path
    ///
    /// Format follows the extension: `.json` for JSON, anything else YAML.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `group` command
#[derive(Parser, Debug, Clone)]
pub struct GroupArgs {
    /// Dependency manifest to group (YAML or JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the service -> cluster-root mapping to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `clusters` command
#[derive(Parser, Debug, Clone)]
pub struct ClustersArgs {
    /// Master deployment-order artifact produced by `convoy order`
    #[arg(short = 'd', long = "deployment-order")]
    pub deployment_order: PathBuf,

    /// Grouping artifact produced by `convoy group`
    #[arg(short = 'u', long = "union")]
    pub union: PathBuf,

    /// Write the per-cluster plan to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `local` command
#[derive(Parser, Debug, Clone)]
pub struct LocalArgs {
    /// Master deployment-order artifact produced by `convoy order`
    #[arg(short = 'd', long = "deployment-order")]
    pub deployment_order: PathBuf,

    /// Local override configuration (target service plus directives)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Write the final local deployment plan to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat consistency warnings as fatal
    #[arg(long)]
    pub strict: bool,
}
