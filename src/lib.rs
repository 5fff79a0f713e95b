//! # Knit
//!
//! Knitting helpers served over the Model Context Protocol.
//!
//! ## Key Features
//!
//! - **Charts**: garter, stockinette, 1x1 / 2x2 rib, seed and lace mesh
//! - **Export**: Markdown documents with the chart read bottom-to-top
//! - **Gauge**: swatch density to cast-on and row counts
//! - **Abbreviations**: case-sensitive dictionary plus a reference table
//!
//! ## Quick Start
//!
//! ```rust
//! use knit::{export_markdown, generate_chart};
//!
//! let chart = generate_chart("seed", 4, 3).unwrap();
//! let doc = export_markdown(&chart, Some("Swatch"));
//! assert!(doc.starts_with("# Swatch"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod stitch;

// Re-exports for convenience
pub use error::{KnitError, Result};

pub use stitch::{
    abbreviation_table, export_markdown, gauge_calc, generate_chart, pattern, translate_abbrev,
    AbbrevQuery, AbbreviationDictionary, Chart, ChartResult, GaugeResult, Legend, Stitch,
    StitchPattern, DEFAULT_TITLE, UNKNOWN_ABBREVIATION,
};

pub use mcp::demo::{add, echo, greeting};
pub use mcp::{DemoServer, KnitServer, McpService};
