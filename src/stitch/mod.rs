//! Stitch helpers — abbreviations, charts, gauge and Markdown export.
//!
//! Everything here is a pure function of its inputs; the MCP layer only
//! adapts arguments and results.

pub mod abbrev;
pub mod chart;
pub mod export;
pub mod gauge;

pub use abbrev::{
    abbreviation_table, translate_abbrev, AbbrevQuery, AbbreviationDictionary,
    UNKNOWN_ABBREVIATION,
};
pub use chart::{generate_chart, Chart, ChartResult, Legend, Stitch, StitchPattern};
pub use export::{export_markdown, DEFAULT_TITLE};
pub use gauge::{gauge_calc, GaugeResult};

use crate::error::Result;

/// A ready-made pattern served as a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetPattern {
    pub key: &'static str,
    pub title: &'static str,
    pub pattern: StitchPattern,
    pub width: usize,
    pub height: usize,
}

/// Named presets; any other name falls back to a garter square.
pub const PRESETS: &[PresetPattern] = &[
    PresetPattern {
        key: "scarf_seed",
        title: "Seed Stitch Scarf",
        pattern: StitchPattern::Seed,
        width: 30,
        height: 20,
    },
    PresetPattern {
        key: "mesh_sw",
        title: "Lace Mesh Swatch",
        pattern: StitchPattern::LaceMesh,
        width: 24,
        height: 16,
    },
];

const FALLBACK_SIZE: usize = 20;

/// Render the Markdown document for pattern resource `name`.
pub fn pattern(name: &str) -> Result<String> {
    let (title, stitch_pattern, width, height) = match PRESETS.iter().find(|p| p.key == name) {
        Some(preset) => (preset.title, preset.pattern, preset.width, preset.height),
        None => (name, StitchPattern::Garter, FALLBACK_SIZE, FALLBACK_SIZE),
    };

    let result = generate_chart(stitch_pattern.name(), width, height)?;
    Ok(export_markdown(&result, Some(title)))
}
