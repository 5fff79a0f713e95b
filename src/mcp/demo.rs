//! Demo server: `add`, `echo` and the `greeting://{name}` resource.

use serde::Deserialize;
use serde_json::{json, Value};

use super::types::{ResourceContents, ResourceTemplate, ServerInfo, ToolDefinition, ToolsCallResult};
use super::{parse_args, resource_param, McpService};
use crate::error::{KnitError, Result};

pub const DEMO_SERVER_NAME: &str = "knit-demo";

/// Add two integers; overflow is an error rather than wrapping.
pub fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b)
        .ok_or_else(|| KnitError::InvalidArgument(format!("{} + {} overflows", a, b)))
}

pub fn echo(message: &str) -> String {
    message.to_string()
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

#[derive(Debug, Deserialize)]
struct AddArgs {
    a: i64,
    b: i64,
}

#[derive(Debug, Deserialize)]
struct EchoArgs {
    message: String,
}

/// The companion demo server.
#[derive(Debug, Clone, Default)]
pub struct DemoServer;

impl DemoServer {
    pub fn new() -> Self {
        Self
    }
}

impl McpService for DemoServer {
    fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: DEMO_SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn list_tools(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "add".to_string(),
                description: "Add two numbers".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "a": { "type": "integer" },
                        "b": { "type": "integer" }
                    },
                    "required": ["a", "b"]
                }),
            },
            ToolDefinition {
                name: "echo".to_string(),
                description: "Echo a message back".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "message": { "type": "string" }
                    },
                    "required": ["message"]
                }),
            },
        ]
    }

    fn call_tool(&self, name: &str, arguments: &Value) -> ToolsCallResult {
        match name {
            "add" => match parse_args::<AddArgs>(arguments) {
                Ok(args) => match add(args.a, args.b) {
                    Ok(sum) => ToolsCallResult::text(sum.to_string()),
                    Err(e) => ToolsCallResult::error(e.to_string()),
                },
                Err(result) => result,
            },
            "echo" => match parse_args::<EchoArgs>(arguments) {
                Ok(args) => ToolsCallResult::text(echo(&args.message)),
                Err(result) => result,
            },
            _ => ToolsCallResult::error(format!("Unknown tool: {}", name)),
        }
    }

    fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        vec![ResourceTemplate {
            uri_template: "greeting://{name}".to_string(),
            name: "greeting".to_string(),
            description: "Return a greeting resource".to_string(),
            mime_type: "text/plain".to_string(),
        }]
    }

    fn read_resource(&self, uri: &str) -> Result<ResourceContents> {
        let name = resource_param(uri, "greeting")
            .ok_or_else(|| KnitError::ResourceNotFound(uri.to_string()))?;
        Ok(ResourceContents {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            text: greeting(name),
        })
    }
}
