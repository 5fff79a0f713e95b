//! Knit MCP Server — knitting helpers for AI agents.
//!
//! Runs a JSON-RPC 2.0 server over STDIO exposing chart generation,
//! gauge maths and abbreviation lookup through the Model Context
//! Protocol (MCP).
//!
//! Usage:
//!   knit-mcp [--config knit.toml] [--log-filter debug]

use clap::Parser;
use tracing::info;

use knit::cli::KnitServerCli;
use knit::config::KnitConfig;
use knit::mcp::{server, KnitServer};

fn main() {
    let cli = KnitServerCli::parse();

    let config = KnitConfig::load(&cli.config);

    // Initialize tracing to stderr (MCP uses stdout for protocol)
    knit::logging::init(cli.server.log_filter.as_deref(), &config.logging.filter);

    info!(config = %cli.config.display(), name = %config.server.name, "Knit MCP server starting");

    let service = KnitServer::new(&config);

    info!("MCP server ready — waiting for JSON-RPC requests on stdin");

    // Blocks until stdin closes
    server::run(&service);
}
