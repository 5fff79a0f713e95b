//! Demo MCP server — `add`, `echo` and `greeting://{name}` over STDIO.

use clap::Parser;
use tracing::info;

use knit::cli::DemoServerCli;
use knit::config::DEFAULT_LOG_FILTER;
use knit::mcp::{server, DemoServer};

fn main() {
    let cli = DemoServerCli::parse();

    knit::logging::init(cli.server.log_filter.as_deref(), DEFAULT_LOG_FILTER);

    info!("Demo MCP server ready — waiting for JSON-RPC requests on stdin");

    server::run(&DemoServer::new());
}
