//! Knitting server — maps MCP tool calls and resource reads onto the
//! helpers in [`crate::stitch`].

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::types::{
    ResourceContents, ResourceDefinition, ResourceTemplate, ServerInfo, ToolDefinition,
    ToolsCallResult,
};
use super::{markdown, parse_args, resource_param, McpService};
use crate::config::KnitConfig;
use crate::error::{KnitError, Result};
use crate::stitch::{
    abbreviation_table, export_markdown, gauge_calc, generate_chart, pattern, AbbrevQuery,
    AbbreviationDictionary, ChartResult, StitchPattern,
};

pub const ABBREVIATIONS_URI: &str = "knit://abbreviations";

#[derive(Debug, Deserialize)]
struct TranslateArgs {
    items: AbbrevQuery,
}

#[derive(Debug, Deserialize)]
struct ChartArgs {
    pattern: String,
    width: usize,
    height: usize,
}

#[derive(Debug, Deserialize)]
struct GaugeArgs {
    sts_per_10units: f64,
    rows_per_10units: f64,
    target_width: f64,
    target_height: f64,
}

#[derive(Debug, Deserialize)]
struct ExportArgs {
    chart_result: ChartResult,
    title: Option<String>,
}

/// The knitting MCP server. Holds only read-only tables.
#[derive(Debug, Clone)]
pub struct KnitServer {
    name: String,
    default_title: String,
    dictionary: AbbreviationDictionary,
}

impl KnitServer {
    pub fn new(config: &KnitConfig) -> Self {
        Self {
            name: config.server.name.clone(),
            default_title: config.export.default_title.clone(),
            dictionary: AbbreviationDictionary::standard(),
        }
    }

    fn handle_translate(&self, args: &Value) -> ToolsCallResult {
        let args: TranslateArgs = match parse_args(args) {
            Ok(a) => a,
            Err(result) => return result,
        };
        ToolsCallResult::json(&self.dictionary.translate(&args.items))
    }

    fn handle_generate_chart(&self, args: &Value) -> ToolsCallResult {
        let args: ChartArgs = match parse_args(args) {
            Ok(a) => a,
            Err(result) => return result,
        };
        match generate_chart(&args.pattern, args.width, args.height) {
            Ok(result) => ToolsCallResult::json(&result),
            Err(e) => ToolsCallResult::error(e.to_string()),
        }
    }

    fn handle_gauge(&self, args: &Value) -> ToolsCallResult {
        let args: GaugeArgs = match parse_args(args) {
            Ok(a) => a,
            Err(result) => return result,
        };
        match gauge_calc(
            args.sts_per_10units,
            args.rows_per_10units,
            args.target_width,
            args.target_height,
        ) {
            Ok(result) => ToolsCallResult::json(&result),
            Err(e) => ToolsCallResult::error(e.to_string()),
        }
    }

    fn handle_export(&self, args: &Value) -> ToolsCallResult {
        let args: ExportArgs = match parse_args(args) {
            Ok(a) => a,
            Err(result) => return result,
        };
        if let Err(e) = args.chart_result.validate() {
            return ToolsCallResult::error(e.to_string());
        }
        let title = args.title.as_deref().unwrap_or(&self.default_title);
        ToolsCallResult::text(export_markdown(&args.chart_result, Some(title)))
    }
}

impl Default for KnitServer {
    fn default() -> Self {
        Self::new(&KnitConfig::default())
    }
}

impl McpService for KnitServer {
    fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: self.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn list_tools(&self) -> Vec<ToolDefinition> {
        let pattern_names: Vec<&str> = StitchPattern::ALL.iter().map(|p| p.name()).collect();

        vec![
            ToolDefinition {
                name: "translate_abbrev".to_string(),
                description: "Explain knitting abbreviations. Accepts a comma-separated \
                    string or a list; unknown entries map to \"unknown abbreviation\"."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "items": {
                            "description": "Abbreviations, e.g. \"K, YO, p2tog\" or [\"K\", \"YO\"]",
                            "oneOf": [
                                { "type": "string" },
                                { "type": "array", "items": { "type": "string" } }
                            ]
                        }
                    },
                    "required": ["items"]
                }),
            },
            ToolDefinition {
                name: "generate_chart".to_string(),
                description: "Generate a stitch chart (rows of K/P/YO/K2tog symbols) \
                    for a pattern, plus its legend."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "pattern": {
                            "type": "string",
                            "description": "Pattern name (case-insensitive)",
                            "enum": pattern_names
                        },
                        "width": {
                            "type": "integer",
                            "minimum": 1,
                            "description": "Stitches per row"
                        },
                        "height": {
                            "type": "integer",
                            "minimum": 1,
                            "description": "Number of rows"
                        }
                    },
                    "required": ["pattern", "width", "height"]
                }),
            },
            ToolDefinition {
                name: "gauge_calc".to_string(),
                description: "Convert swatch gauge (per 10 units) and target size into \
                    cast-on stitches and row count."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "sts_per_10units": { "type": "number", "minimum": 0 },
                        "rows_per_10units": { "type": "number", "minimum": 0 },
                        "target_width": { "type": "number", "minimum": 0 },
                        "target_height": { "type": "number", "minimum": 0 }
                    },
                    "required": ["sts_per_10units", "rows_per_10units", "target_width", "target_height"]
                }),
            },
            ToolDefinition {
                name: "export_markdown".to_string(),
                description: "Render a generate_chart result as Markdown, rows shown \
                    bottom to top."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "chart_result": {
                            "type": "object",
                            "description": "The JSON returned by generate_chart"
                        },
                        "title": {
                            "type": "string",
                            "description": format!("Document title (default: {})", self.default_title)
                        }
                    },
                    "required": ["chart_result"]
                }),
            },
            ToolDefinition {
                name: "abbrev_table".to_string(),
                description: "Markdown reference table of common knitting abbreviations."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {}
                }),
            },
        ]
    }

    fn call_tool(&self, name: &str, arguments: &Value) -> ToolsCallResult {
        match name {
            "translate_abbrev" => self.handle_translate(arguments),
            "generate_chart" => self.handle_generate_chart(arguments),
            "gauge_calc" => self.handle_gauge(arguments),
            "export_markdown" => self.handle_export(arguments),
            "abbrev_table" => ToolsCallResult::text(abbreviation_table()),
            _ => ToolsCallResult::error(format!("Unknown tool: {}", name)),
        }
    }

    fn list_resources(&self) -> Vec<ResourceDefinition> {
        vec![ResourceDefinition {
            uri: ABBREVIATIONS_URI.to_string(),
            name: "abbreviations".to_string(),
            description: "Reference table of knitting abbreviations".to_string(),
            mime_type: "text/markdown".to_string(),
        }]
    }

    fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        vec![ResourceTemplate {
            uri_template: "pattern://{name}".to_string(),
            name: "pattern".to_string(),
            description: "Pre-rendered pattern: scarf_seed, mesh_sw, or any name for a \
                20x20 garter square"
                .to_string(),
            mime_type: "text/markdown".to_string(),
        }]
    }

    fn read_resource(&self, uri: &str) -> Result<ResourceContents> {
        if uri == ABBREVIATIONS_URI {
            return Ok(markdown(uri, abbreviation_table().to_string()));
        }

        if let Some(name) = resource_param(uri, "pattern") {
            debug!(name, "rendering pattern resource");
            return Ok(markdown(uri, pattern(name)?));
        }

        Err(KnitError::ResourceNotFound(uri.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> KnitServer {
        KnitServer::default()
    }

    #[test]
    fn test_lists_all_tools() {
        let names: Vec<String> = server().list_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "translate_abbrev",
                "generate_chart",
                "gauge_calc",
                "export_markdown",
                "abbrev_table"
            ]
        );
    }

    #[test]
    fn test_translate_accepts_string_and_list() {
        let result = server().call_tool("translate_abbrev", &json!({"items": "K, xyz"}));
        let map: Value = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(map["K"], "knit");
        assert_eq!(map["xyz"], "unknown abbreviation");

        let result = server().call_tool("translate_abbrev", &json!({"items": ["YO"]}));
        let map: Value = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(map["YO"], "yarn over");
    }

    #[test]
    fn test_generate_chart_tool() {
        let result = server().call_tool(
            "generate_chart",
            &json!({"pattern": "rib2x2", "width": 6, "height": 1}),
        );
        assert!(!result.is_error());
        let chart: ChartResult = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(chart.pattern, "rib2x2");
        assert_eq!(chart.chart[0].len(), 6);
    }

    #[test]
    fn test_generate_chart_rejects_bad_input() {
        let result = server().call_tool(
            "generate_chart",
            &json!({"pattern": "cable", "width": 4, "height": 4}),
        );
        assert!(result.is_error());
        assert!(result.content[0].text.contains("unsupported pattern: cable"));

        let result = server().call_tool(
            "generate_chart",
            &json!({"pattern": "seed", "width": -1, "height": 4}),
        );
        assert!(result.is_error());
    }

    #[test]
    fn test_generate_chart_too_large_is_a_tool_error() {
        let result = server().call_tool(
            "generate_chart",
            &json!({"pattern": "garter", "width": u64::MAX, "height": 1}),
        );
        assert!(result.is_error());
        assert!(result.content[0].text.contains("cell limit"));
    }

    #[test]
    fn test_gauge_tool() {
        let result = server().call_tool(
            "gauge_calc",
            &json!({
                "sts_per_10units": 20,
                "rows_per_10units": 28,
                "target_width": 50,
                "target_height": 30
            }),
        );
        let gauge: Value = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(gauge["cast_on"], 100);
        assert_eq!(gauge["row_count"], 84);

        let result = server().call_tool(
            "gauge_calc",
            &json!({
                "sts_per_10units": -20,
                "rows_per_10units": 28,
                "target_width": 50,
                "target_height": 30
            }),
        );
        assert!(result.is_error());
    }

    #[test]
    fn test_export_tool_round_trip() {
        let server = server();
        let chart = server.call_tool(
            "generate_chart",
            &json!({"pattern": "seed", "width": 3, "height": 2}),
        );
        let chart_result: Value = serde_json::from_str(&chart.content[0].text).unwrap();

        let doc = server.call_tool(
            "export_markdown",
            &json!({"chart_result": chart_result, "title": "Swatch"}),
        );
        assert!(!doc.is_error());
        assert!(doc.content[0].text.starts_with("# Swatch\n"));

        let doc = server.call_tool("export_markdown", &json!({"chart_result": chart_result}));
        assert!(doc.content[0].text.starts_with("# Knitting Pattern\n"));
    }

    #[test]
    fn test_export_tool_rejects_ragged_chart() {
        let result = server().call_tool(
            "export_markdown",
            &json!({"chart_result": {
                "pattern": "garter",
                "width": 2,
                "height": 2,
                "chart": [["K", "K"], ["K"]],
                "legend": {"K": "knit"}
            }}),
        );
        assert!(result.is_error());
    }

    #[test]
    fn test_resources() {
        let server = server();
        let table = server.read_resource(ABBREVIATIONS_URI).unwrap();
        assert_eq!(table.text, abbreviation_table());

        let doc = server.read_resource("pattern://mesh_sw").unwrap();
        assert_eq!(doc.mime_type, "text/markdown");
        assert!(doc.text.contains("- Pattern: lace_mesh"));

        assert!(matches!(
            server.read_resource("pattern://a/b"),
            Err(KnitError::ResourceNotFound(_))
        ));
        assert!(matches!(
            server.read_resource("greeting://bob"),
            Err(KnitError::ResourceNotFound(_))
        ));
    }
}
