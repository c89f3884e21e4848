//! Common test utilities shared across integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/convoy to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_convoy_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "convoy", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build convoy");

    assert!(status.success(), "Failed to build convoy binary");

    workspace.join("target/debug/convoy")
}

/// Run the convoy binary directly in the specified directory
pub fn run_convoy_in_dir(dir: &Path, args: &[&str]) -> Output {
    let binary = get_convoy_binary();

    Command::new(&binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute convoy binary")
}

/// Write a file into the test directory and return its path as a string
pub fn write_file(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    name.to_string()
}

/// A three-service chain plus an unrelated pair, with full metadata for
/// the chain's head.
pub const CHAIN_MANIFEST: &str = r#"defaultBranch: main
dependencyAdjacencyList:
  a: [b]
  b: [c]
  x: [y]
services:
  a:
    repository: "git@example.com:org/a.git"
    pathToManifest: deploy/a.yml
    pathToDevlocal: deploy/a.dev.yml
    branch: feature/demo
"#;

/// A manifest whose graph contains a two-node cycle.
pub const CYCLIC_MANIFEST: &str = r#"dependencyAdjacencyList:
  a: [b]
  b: [a]
"#;
