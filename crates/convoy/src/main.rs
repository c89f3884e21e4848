//! Convoy CLI binary.

use convoy::cli::Cli;
use convoy::output::{color, OutputConfig};
use tracing_subscriber::EnvFilter;

/// Main entry point for the convoy CLI.
///
/// Every command is a pure load -> compute -> emit transformation, so the
/// binary is fully synchronous.
fn main() {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=convoy=debug,convoy_graph=trace convoy order -i m.yml
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("convoy=info,convoy_graph=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting convoy CLI");

    let cli = Cli::parse_args();
    if let Err(err) = cli.execute() {
        let config = OutputConfig::from_env();
        eprintln!("{}", color::error(&format!("Error: {err:#}"), &config));
        std::process::exit(1);
    }

    tracing::debug!("Convoy CLI completed successfully");
}
