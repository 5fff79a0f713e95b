//! Command-line definitions.
//!
//! Commands:
//! - Charts: chart, pattern, patterns
//! - Reference: abbrev, table
//! - Maths: gauge

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "knit")]
#[command(about = "Knitting charts, gauge and abbreviations")]
pub struct Cli {
    /// Config file (default: ./knit.toml)
    #[arg(short, long, default_value = "knit.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    // ─── Charts ───────────────────────────────────────────────────
    /// Generate a stitch chart
    Chart {
        /// Pattern name (garter, stockinette, rib1x1, rib2x2, seed, lace_mesh)
        pattern: String,

        /// Stitches per row
        #[arg(short, long, default_value = "20")]
        width: usize,

        /// Number of rows
        #[arg(short = 'H', long, default_value = "20")]
        height: usize,

        /// Render as Markdown instead of JSON
        #[arg(short, long)]
        markdown: bool,

        /// Markdown title
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Print a pre-rendered pattern resource (scarf_seed, mesh_sw, ...)
    Pattern {
        name: String,
    },

    /// List supported chart patterns
    Patterns,

    // ─── Reference ────────────────────────────────────────────────
    /// Explain abbreviations (comma-separated or as separate arguments)
    Abbrev {
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Print the abbreviation reference table
    Table,

    // ─── Maths ────────────────────────────────────────────────────
    /// Cast-on and row counts from swatch gauge
    Gauge {
        /// Stitches per 10 units of swatch
        #[arg(allow_negative_numbers = true)]
        sts: f64,
        /// Rows per 10 units of swatch
        #[arg(allow_negative_numbers = true)]
        rows: f64,
        /// Target width
        #[arg(allow_negative_numbers = true)]
        width: f64,
        /// Target height
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },
}

/// Options shared by the MCP server binaries.
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Tracing filter directive (overrides RUST_LOG and the config file)
    #[arg(long)]
    pub log_filter: Option<String>,
}

/// `knit-mcp` arguments.
#[derive(Parser, Debug)]
#[command(name = "knit-mcp")]
#[command(about = "Knitting MCP server over stdio")]
pub struct KnitServerCli {
    /// Config file (default: ./knit.toml)
    #[arg(short, long, default_value = "knit.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub server: ServerArgs,
}

/// `knit-demo-mcp` arguments.
#[derive(Parser, Debug)]
#[command(name = "knit-demo-mcp")]
#[command(about = "Demo MCP server (add, echo, greeting) over stdio")]
pub struct DemoServerCli {
    #[command(flatten)]
    pub server: ServerArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chart_command() {
        let cli = Cli::parse_from(["knit", "chart", "seed", "-w", "4", "-H", "3", "--markdown"]);
        match cli.command {
            Commands::Chart {
                pattern,
                width,
                height,
                markdown,
                title,
            } => {
                assert_eq!(pattern, "seed");
                assert_eq!((width, height), (4, 3));
                assert!(markdown);
                assert!(title.is_none());
            }
            _ => panic!("expected chart command"),
        }
    }

    #[test]
    fn test_gauge_accepts_negative_numbers() {
        let cli = Cli::parse_from(["knit", "gauge", "-1", "28", "50", "-0.5"]);
        match cli.command {
            Commands::Gauge {
                sts,
                rows,
                width,
                height,
            } => {
                assert_eq!(sts, -1.0);
                assert_eq!(rows, 28.0);
                assert_eq!(width, 50.0);
                assert_eq!(height, -0.5);
            }
            _ => panic!("expected gauge command"),
        }
    }

    #[test]
    fn test_parse_server_args() {
        let cli = KnitServerCli::parse_from(["knit-mcp", "--log-filter", "debug"]);
        assert_eq!(cli.server.log_filter.as_deref(), Some("debug"));
        assert_eq!(cli.config, PathBuf::from("knit.toml"));
    }
}
