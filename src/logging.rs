//! Tracing setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber (stdout carries the MCP protocol).
///
/// An explicit `filter` wins over `RUST_LOG`, which wins over `fallback`.
pub fn init(filter: Option<&str>, fallback: &str) {
    let env_filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    };

    // A subscriber may already be installed (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .try_init();
}
