//! MCP (Model Context Protocol) server module.
//!
//! Provides a JSON-RPC 2.0 over STDIO interface. Each server is an
//! [`McpService`]; the loop in [`server`] only speaks the protocol and
//! hands tool calls and resource reads to the service.

pub mod demo;
pub mod knit;
pub mod server;
pub mod types;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{KnitError, Result};
use types::{
    ResourceContents, ResourceDefinition, ResourceTemplate, ServerInfo, ToolDefinition,
    ToolsCallResult,
};

pub use demo::DemoServer;
pub use knit::KnitServer;

/// Protocol revision both servers speak.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// The set of tools and resources a server exposes.
pub trait McpService {
    fn server_info(&self) -> ServerInfo;

    fn list_tools(&self) -> Vec<ToolDefinition>;

    /// Tool failures are reported in the result (`isError`), never as a
    /// protocol error.
    fn call_tool(&self, name: &str, arguments: &Value) -> ToolsCallResult;

    fn list_resources(&self) -> Vec<ResourceDefinition> {
        Vec::new()
    }

    fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        Vec::new()
    }

    fn read_resource(&self, uri: &str) -> Result<ResourceContents> {
        Err(KnitError::ResourceNotFound(uri.to_string()))
    }

    fn has_resources(&self) -> bool {
        !self.list_resources().is_empty() || !self.list_resource_templates().is_empty()
    }
}

/// Deserialize tool arguments, turning failures into a tool error result.
pub(crate) fn parse_args<T: DeserializeOwned>(
    arguments: &Value,
) -> std::result::Result<T, ToolsCallResult> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(arguments)
        .map_err(|e| ToolsCallResult::error(format!("Invalid arguments: {}", e)))
}

/// The single path segment after `scheme://`, if it matches and is non-empty.
pub(crate) fn resource_param<'a>(uri: &'a str, scheme: &str) -> Option<&'a str> {
    uri.strip_prefix(scheme)?
        .strip_prefix("://")
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}

pub(crate) fn markdown(uri: &str, text: String) -> ResourceContents {
    ResourceContents {
        uri: uri.to_string(),
        mime_type: "text/markdown".to_string(),
        text,
    }
}
